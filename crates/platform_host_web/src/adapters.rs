use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, PageLocation};

use crate::{
    bridge, WebAlertService, WebExternalUrlService, WebSessionCredential, WebShellChrome,
};

/// Detects the host strategy for the current page.
///
/// Native builds are always [`HostStrategy::Headless`]; wasm builds report
/// [`HostStrategy::MiniApp`] when the host bridge object is injected and
/// [`HostStrategy::Browser`] otherwise.
pub fn selected_host_strategy() -> HostStrategy {
    if cfg!(not(target_arch = "wasm32")) {
        HostStrategy::Headless
    } else if bridge::mini_app_available() {
        HostStrategy::MiniApp
    } else {
        HostStrategy::Browser
    }
}

/// Returns the location of the hosting page, when running in a browser.
pub fn page_location() -> Option<PageLocation> {
    bridge::page_location()
}

/// Assembles the host service bundle for the detected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Headless => HostServices::headless(),
        strategy => HostServices {
            session: Rc::new(WebSessionCredential),
            alerts: Rc::new(WebAlertService),
            external_urls: Rc::new(WebExternalUrlService),
            chrome: Rc::new(WebShellChrome),
            location: page_location(),
            host_strategy: strategy,
        },
    }
}
