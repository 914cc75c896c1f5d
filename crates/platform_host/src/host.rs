//! Host service bundle injected into the catalog runtime.

use std::rc::Rc;

use crate::{
    AlertService, ExternalUrlService, NoSessionCredential, NoopAlertService,
    NoopExternalUrlService, NoopShellChrome, PageLocation, SessionCredentialSource, ShellChrome,
};

/// Host strategy detected for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Running inside the chat platform's mini-app web view.
    MiniApp,
    /// Plain browser tab without the host bridge.
    Browser,
    /// Headless composition with no-op adapters (native builds and tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MiniApp => "mini-app",
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific adapter selection happens before this bundle crosses into the
/// runtime, which keeps controllers decoupled from browser details.
#[derive(Clone)]
pub struct HostServices {
    /// Current session credential source.
    pub session: Rc<dyn SessionCredentialSource>,
    /// Alert presentation.
    pub alerts: Rc<dyn AlertService>,
    /// External link opening.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Ready/expand/theme primitives.
    pub chrome: Rc<dyn ShellChrome>,
    /// Location of the hosting page, when known.
    pub location: Option<PageLocation>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters with no session and no page location.
    pub fn headless() -> Self {
        Self {
            session: Rc::new(NoSessionCredential),
            alerts: Rc::new(NoopAlertService),
            external_urls: Rc::new(NoopExternalUrlService),
            chrome: Rc::new(NoopShellChrome),
            location: None,
            host_strategy: HostStrategy::Headless,
        }
    }
}
