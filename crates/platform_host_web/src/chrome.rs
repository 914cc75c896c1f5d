//! Shell chrome adapter backed by the mini-app bridge.

use platform_host::ShellChrome;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Forwards lifecycle and theming calls to the host web view.
pub struct WebShellChrome;

impl ShellChrome for WebShellChrome {
    fn ready(&self) -> Result<(), String> {
        bridge::ready()
    }

    fn expand(&self) -> Result<(), String> {
        bridge::expand()
    }

    fn set_header_color(&self, color: &str) -> Result<(), String> {
        bridge::set_header_color(color)
    }

    fn set_background_color(&self, color: &str) -> Result<(), String> {
        bridge::set_background_color(color)
    }
}
