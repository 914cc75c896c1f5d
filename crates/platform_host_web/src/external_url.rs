//! External link adapter backed by the mini-app bridge.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Opens links through the host's `openLink`, or a new browser tab outside the host.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if url.trim().is_empty() {
                return Err("refusing to open an empty link".to_string());
            }
            bridge::open_link(url).await
        })
    }
}
