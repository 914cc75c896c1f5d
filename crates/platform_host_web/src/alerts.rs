//! Alert adapter backed by the mini-app bridge.

use platform_host::{AlertFuture, AlertService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Presents alerts through the host's `showAlert`, or `window.alert` outside the host.
pub struct WebAlertService;

impl AlertService for WebAlertService {
    fn show_alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::show_alert(message).await })
    }
}
