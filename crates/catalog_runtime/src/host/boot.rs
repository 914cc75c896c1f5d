use leptos::logging;
use platform_host::ShellChrome;

use crate::config::ThemeSettings;

/// Signals readiness, expands the host viewport, and applies the bundled colors.
///
/// Each step is attempted independently; failures are logged and never block rendering.
pub fn boot_host_chrome(chrome: &dyn ShellChrome, theme: &ThemeSettings) {
    if let Err(err) = chrome.ready() {
        logging::warn!("host ready signal failed: {err}");
    }
    if let Err(err) = chrome.expand() {
        logging::warn!("host expand failed: {err}");
    }
    if let Err(err) = chrome.set_header_color(&theme.header_color) {
        logging::warn!("host header color failed: {err}");
    }
    if let Err(err) = chrome.set_background_color(&theme.background_color) {
        logging::warn!("host background color failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingChrome {
        calls: RefCell<Vec<String>>,
    }

    impl RecordingChrome {
        fn record(&self, call: String) -> Result<(), String> {
            self.calls.borrow_mut().push(call);
            Ok(())
        }
    }

    impl ShellChrome for RecordingChrome {
        fn ready(&self) -> Result<(), String> {
            self.record("ready".to_string())
        }

        fn expand(&self) -> Result<(), String> {
            self.calls.borrow_mut().push("expand".to_string());
            Err("viewport locked".to_string())
        }

        fn set_header_color(&self, color: &str) -> Result<(), String> {
            self.record(format!("header {color}"))
        }

        fn set_background_color(&self, color: &str) -> Result<(), String> {
            self.record(format!("background {color}"))
        }
    }

    #[test]
    fn boot_runs_every_step_even_after_a_failure() {
        let chrome = RecordingChrome::default();
        let theme = ThemeSettings {
            header_color: "#1a1a2e".to_string(),
            background_color: "#16213e".to_string(),
        };

        boot_host_chrome(&chrome, &theme);

        assert_eq!(
            chrome.calls.into_inner(),
            vec![
                "ready".to_string(),
                "expand".to_string(),
                "header #1a1a2e".to_string(),
                "background #16213e".to_string(),
            ]
        );
    }
}
