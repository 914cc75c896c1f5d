//! Base endpoint resolution.

use platform_host::PageLocation;

/// Port the backend listens on during local development.
pub const DEFAULT_DEV_API_PORT: u16 = 8000;

/// Static inputs for [`resolve_api_base`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpointConfig {
    /// Explicit base URL; blank values are ignored.
    pub base_url_override: Option<String>,
    /// Port substituted when the page is served from a loopback host.
    pub dev_port: u16,
}

impl Default for ApiEndpointConfig {
    fn default() -> Self {
        Self {
            base_url_override: None,
            dev_port: DEFAULT_DEV_API_PORT,
        }
    }
}

/// Resolves the backend base URL without a trailing slash.
///
/// Precedence: a non-blank configured override, then the hosting page's origin (with
/// `config.dev_port` when the host is a loopback address), then `http://localhost:<dev_port>`.
/// Pure: identical inputs always produce the same URL.
pub fn resolve_api_base(config: &ApiEndpointConfig, location: Option<&PageLocation>) -> String {
    if let Some(base) = config
        .base_url_override
        .as_deref()
        .map(str::trim)
        .filter(|base| !base.is_empty())
    {
        return base.trim_end_matches('/').to_string();
    }

    match location {
        Some(location) if location.is_loopback() => {
            format!("{}:{}", location.origin(), config.dev_port)
        }
        Some(location) => location.origin(),
        None => format!("http://localhost:{}", config.dev_port),
    }
}
