//! `/config.js`: browser runtime configuration.
//!
//! The web bundle loads this script before the wasm module and reads
//! `window.MNKY_CONFIG`, so the auth endpoint can change per deployment
//! without rebuilding the bundle.

use crate::mnky::SiteConfig;
use axum::{
    extract::Extension,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

#[derive(Serialize)]
struct BrowserConfig<'a> {
    auth_url: &'a str,
    auth_anon_key: &'a str,
}

/// Render the script body.
///
/// # Errors
///
/// Returns an error if the settings cannot be serialized.
pub fn render(config: &SiteConfig) -> serde_json::Result<String> {
    let json = serde_json::to_string(&BrowserConfig {
        auth_url: &config.auth_url,
        auth_anon_key: &config.auth_anon_key,
    })?;
    Ok(format!("window.MNKY_CONFIG = {json};\n"))
}

// axum handler for config.js
pub async fn runtime_config(Extension(config): Extension<Arc<SiteConfig>>) -> impl IntoResponse {
    match render(&config) {
        Ok(script) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, "application/javascript; charset=utf-8"),
                (CACHE_CONTROL, "no-store"),
            ],
            script,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render runtime config: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
