//! Mini-app host bridge.
//!
//! Routes calls to the target-specific implementation while keeping one API for the adapter
//! modules. The wasm side talks to the host's injected `Telegram.WebApp` object and degrades to
//! plain browser primitives when that object is missing.

use platform_host::PageLocation;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn mini_app_available() -> bool {
    imp::mini_app_available()
}

pub fn init_data() -> Option<String> {
    imp::init_data()
}

pub fn ready() -> Result<(), String> {
    imp::ready()
}

pub fn expand() -> Result<(), String> {
    imp::expand()
}

pub fn set_header_color(color: &str) -> Result<(), String> {
    imp::set_header_color(color)
}

pub fn set_background_color(color: &str) -> Result<(), String> {
    imp::set_background_color(color)
}

pub async fn show_alert(message: &str) -> Result<(), String> {
    imp::show_alert(message).await
}

pub async fn open_link(url: &str) -> Result<(), String> {
    imp::open_link(url)
}

pub fn page_location() -> Option<PageLocation> {
    imp::page_location()
}
