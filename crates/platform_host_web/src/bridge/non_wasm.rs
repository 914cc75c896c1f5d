use super::*;

fn unsupported() -> String {
    "mini-app host APIs are only available when compiled for wasm32".to_string()
}

pub fn mini_app_available() -> bool {
    false
}

pub fn init_data() -> Option<String> {
    None
}

pub fn ready() -> Result<(), String> {
    Ok(())
}

pub fn expand() -> Result<(), String> {
    Ok(())
}

pub fn set_header_color(_color: &str) -> Result<(), String> {
    Ok(())
}

pub fn set_background_color(_color: &str) -> Result<(), String> {
    Ok(())
}

pub async fn show_alert(_message: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn open_link(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn page_location() -> Option<PageLocation> {
    None
}
