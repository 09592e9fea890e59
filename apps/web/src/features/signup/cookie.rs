//! `document.cookie` backed marker store.

use signup_flow::{
    marker::{format_cookie, parse_cookie},
    MarkerError, MarkerStore,
};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CookieStore;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl MarkerStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        parse_cookie(&cookies, key)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), MarkerError> {
        let refused = |reason: &str| MarkerError {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        let document = html_document().ok_or_else(|| refused("document unavailable"))?;
        document
            .set_cookie(&format_cookie(key, value, ttl))
            .map_err(|_| refused("cookie write rejected"))
    }
}
