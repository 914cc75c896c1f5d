//! Browser (`wasm32`) implementations of the [`platform_host`] contracts.
//!
//! Every adapter goes through `bridge`, which talks to the chat platform's injected mini-app
//! object on wasm and falls back to inert stubs on native targets so the workspace still builds
//! and tests off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy detection and the service bundle factory used by the entry layer.
pub mod adapters;
pub mod alerts;
mod bridge;
pub mod chrome;
pub mod external_url;
pub mod session;

pub use adapters::{build_host_services, page_location, selected_host_strategy};
pub use alerts::WebAlertService;
pub use chrome::WebShellChrome;
pub use external_url::WebExternalUrlService;
pub use session::WebSessionCredential;
