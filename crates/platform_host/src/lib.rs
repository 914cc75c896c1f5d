//! Typed host-shell contracts for the catalog mini-app.
//!
//! This crate is the API-first boundary for everything the enclosing chat-platform runtime
//! provides: the session credential, alert presentation, external link opening, shell chrome
//! (ready/expand/theme), and the page location used for endpoint resolution. Concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alerts;
pub mod chrome;
pub mod external_url;
pub mod host;
pub mod location;
pub mod session;

pub use alerts::{AlertFuture, AlertService, MemoryAlertService, NoopAlertService};
pub use chrome::{NoopShellChrome, ShellChrome};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use location::PageLocation;
pub use session::{MemorySessionCredential, NoSessionCredential, SessionCredentialSource};
