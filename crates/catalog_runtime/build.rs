use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const API_URL_OVERRIDE_ENV: &str = "CATALOG_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiSection {
    #[serde(default)]
    base_url: String,
    dev_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeSection {
    header_color: String,
    background_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoviesSection {
    categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MiniAppConfig {
    schema_version: u32,
    api: ApiSection,
    theme: ThemeSection,
    movies: MoviesSection,
}

fn validate(config: &MiniAppConfig, path: &std::path::Path) {
    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }
    if config.api.dev_port == 0 {
        panic!("api.dev_port in {} must be non-zero", path.display());
    }
    for (field, color) in [
        ("theme.header_color", &config.theme.header_color),
        ("theme.background_color", &config.theme.background_color),
    ] {
        if !color.starts_with('#') {
            panic!(
                "{field} in {} must be a hex color, found `{color}`",
                path.display()
            );
        }
    }
    if config
        .movies
        .categories
        .iter()
        .any(|category| category.trim().is_empty())
    {
        panic!("movies.categories in {} contains a blank entry", path.display());
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("mini_app.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={API_URL_OVERRIDE_ENV}");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let mut config: MiniAppConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path);

    if let Ok(base_url) = std::env::var(API_URL_OVERRIDE_ENV) {
        if !base_url.trim().is_empty() {
            config.api.base_url = base_url.trim().to_string();
        }
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize mini app config");
    let generated = format!(
        "/// Build-time generated mini-app configuration JSON.\n\
pub const MINI_APP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("mini_app_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
