use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
function webApp() {
  const telegram = globalThis.Telegram;
  return telegram && telegram.WebApp ? telegram.WebApp : null;
}

export function miniAppAvailable() {
  return webApp() !== null;
}

export function initData() {
  const app = webApp();
  if (app && typeof app.initData === 'string' && app.initData.length > 0) {
    return app.initData;
  }
  return undefined;
}

export function ready() {
  const app = webApp();
  if (app) {
    app.ready();
  }
}

export function expand() {
  const app = webApp();
  if (app) {
    app.expand();
  }
}

export function setHeaderColor(color) {
  const app = webApp();
  if (app && typeof app.setHeaderColor === 'function') {
    app.setHeaderColor(color);
  }
}

export function setBackgroundColor(color) {
  const app = webApp();
  if (app && typeof app.setBackgroundColor === 'function') {
    app.setBackgroundColor(color);
  }
}

export function showAlert(message) {
  const app = webApp();
  if (app && typeof app.showAlert === 'function') {
    return new Promise((resolve) => app.showAlert(message, () => resolve(null)));
  }
  globalThis.alert(message);
  return Promise.resolve(null);
}

export function openLink(url) {
  const app = webApp();
  if (app && typeof app.openLink === 'function') {
    app.openLink(url);
    return;
  }
  const opened = globalThis.open(url, '_blank');
  if (!opened) {
    throw new Error('external link was blocked by the browser');
  }
  opened.opener = null;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = miniAppAvailable)]
    fn js_mini_app_available() -> bool;

    #[wasm_bindgen(js_name = initData)]
    fn js_init_data() -> Option<String>;

    #[wasm_bindgen(catch, js_name = ready)]
    fn js_ready() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = expand)]
    fn js_expand() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = setHeaderColor)]
    fn js_set_header_color(color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = setBackgroundColor)]
    fn js_set_background_color(color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = showAlert)]
    fn js_show_alert(message: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = openLink)]
    fn js_open_link(url: &str) -> Result<(), JsValue>;
}

fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

pub fn mini_app_available() -> bool {
    js_mini_app_available()
}

pub fn init_data() -> Option<String> {
    js_init_data()
}

pub fn ready() -> Result<(), String> {
    js_ready().map_err(js_error)
}

pub fn expand() -> Result<(), String> {
    js_expand().map_err(js_error)
}

pub fn set_header_color(color: &str) -> Result<(), String> {
    js_set_header_color(color).map_err(js_error)
}

pub fn set_background_color(color: &str) -> Result<(), String> {
    js_set_background_color(color).map_err(js_error)
}

pub async fn show_alert(message: &str) -> Result<(), String> {
    let promise = js_show_alert(message).map_err(js_error)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

pub fn open_link(url: &str) -> Result<(), String> {
    js_open_link(url).map_err(js_error)
}

pub fn page_location() -> Option<PageLocation> {
    let location = web_sys::window()?.location();
    Some(PageLocation::new(
        location.protocol().ok()?,
        location.hostname().ok()?,
    ))
}
