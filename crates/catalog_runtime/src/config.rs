//! Build-time bundled mini-app configuration.
//!
//! `mini_app.toml` is validated and embedded by `build.rs`; a non-empty `CATALOG_API_URL`
//! environment variable at build time replaces `api.base_url`.

use std::sync::OnceLock;

use catalog_api::ApiEndpointConfig;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/mini_app_config_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Backend endpoint settings.
pub struct ApiSettings {
    /// Explicit backend base URL; empty means "derive from the page".
    #[serde(default)]
    pub base_url: String,
    /// Backend port used when the page is served from a loopback host.
    pub dev_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Host chrome colors applied at boot.
pub struct ThemeSettings {
    /// Header bar color.
    pub header_color: String,
    /// Page background color.
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Movie listing settings.
pub struct MovieSettings {
    /// Category options offered on the movies screen.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Parsed `mini_app.toml`.
pub struct MiniAppConfig {
    /// Backend endpoint settings.
    pub api: ApiSettings,
    /// Host chrome colors.
    pub theme: ThemeSettings,
    /// Movie listing settings.
    pub movies: MovieSettings,
}

impl MiniAppConfig {
    /// Returns the inputs for [`catalog_api::resolve_api_base`].
    pub fn endpoint(&self) -> ApiEndpointConfig {
        let base_url = self.api.base_url.trim();
        ApiEndpointConfig {
            base_url_override: (!base_url.is_empty()).then(|| base_url.to_string()),
            dev_port: self.api.dev_port,
        }
    }
}

/// Returns the configuration bundled at build time.
pub fn bundled_config() -> &'static MiniAppConfig {
    static CONFIG: OnceLock<MiniAppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_json::from_str(MINI_APP_CONFIG_JSON)
            .expect("generated mini app config should parse")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_config_carries_theme_and_movie_categories() {
        let config = bundled_config();
        assert_eq!(config.theme.header_color, "#1a1a2e");
        assert_eq!(config.theme.background_color, "#16213e");
        assert_eq!(config.movies.categories.len(), 13);
        assert_eq!(config.movies.categories.first().map(String::as_str), Some("NETFLIX"));
        assert_eq!(config.movies.categories.last().map(String::as_str), Some("WEB-SERIES"));
        assert!(config.api.dev_port > 0);
    }

    #[test]
    fn blank_base_url_means_no_override() {
        let mut config = bundled_config().clone();
        config.api.base_url = "  ".to_string();
        assert_eq!(config.endpoint().base_url_override, None);

        config.api.base_url = "https://api.example".to_string();
        assert_eq!(
            config.endpoint(),
            ApiEndpointConfig {
                base_url_override: Some("https://api.example".to_string()),
                dev_port: config.api.dev_port,
            }
        );
    }
}
