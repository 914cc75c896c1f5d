//! Host shell chrome: lifecycle signal, viewport, and theming.

/// Host-shell presentation primitives invoked once at boot.
pub trait ShellChrome {
    /// Signals that the mini-app finished loading and can be shown.
    fn ready(&self) -> Result<(), String>;

    /// Requests the full available viewport height.
    fn expand(&self) -> Result<(), String>;

    /// Sets the host header color (`#rrggbb`).
    fn set_header_color(&self, color: &str) -> Result<(), String>;

    /// Sets the host background color (`#rrggbb`).
    fn set_background_color(&self, color: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Shell chrome for hosts without native chrome controls.
pub struct NoopShellChrome;

impl ShellChrome for NoopShellChrome {
    fn ready(&self) -> Result<(), String> {
        Ok(())
    }

    fn expand(&self) -> Result<(), String> {
        Ok(())
    }

    fn set_header_color(&self, _color: &str) -> Result<(), String> {
        Ok(())
    }

    fn set_background_color(&self, _color: &str) -> Result<(), String> {
        Ok(())
    }
}
