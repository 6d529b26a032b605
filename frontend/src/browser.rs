//! Thin wrappers over the browser APIs the widgets touch directly: cookies,
//! location/history and the JSON blobs the server renders into each page.

use gloo_utils::{document, window};
use log::warn;
use serde::de::DeserializeOwned;
use shared::models::locale::read_cookie;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

pub fn cookies() -> String {
    document()
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

pub fn cookie(name: &str) -> Option<String> {
    read_cookie(&cookies(), name)
}

pub fn set_cookie(value: &str) {
    if let Ok(doc) = document().dyn_into::<HtmlDocument>() {
        if let Err(e) = doc.set_cookie(value) {
            warn!("Failed to set cookie: {:?}", e);
        }
    }
}

pub fn current_href() -> String {
    window().location().href().unwrap_or_default()
}

pub fn current_search() -> String {
    window().location().search().unwrap_or_default()
}

pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    if let Err(e) = window().location().set_hash(hash) {
        warn!("Failed to set location hash: {:?}", e);
    }
}

/// Full page navigation.
pub fn navigate(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        warn!("Failed to navigate to {}: {:?}", href, e);
    }
}

/// Rewrites the address bar without reloading.
pub fn push_href(href: &str) {
    match window().history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
                warn!("Failed to push history state: {:?}", e);
            }
        }
        Err(e) => warn!("History API unavailable: {:?}", e),
    }
}

/// Reads the JSON the server embedded in `<script type="application/json" id=..>`.
pub fn page_data<T: DeserializeOwned>(element_id: &str) -> Result<T, String> {
    let element = document()
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("Element '{}' not found", element_id))?;
    let raw = element.text_content().unwrap_or_default();
    serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse page data '{}': {}", element_id, e))
}

/// Like [`page_data`] but falls back to the type's default and logs why.
pub fn page_data_or_default<T: DeserializeOwned + Default>(element_id: &str) -> T {
    page_data(element_id).unwrap_or_else(|e| {
        warn!("{}", e);
        T::default()
    })
}
