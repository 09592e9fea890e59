//! Build-time configuration for the auth provider with an optional runtime
//! override. The runtime config is read from `window.MNKY_CONFIG` (served by
//! the site server as `/config.js`) so one bundle can be promoted across
//! environments without rebuilding. Values are public; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub auth_url: String,
    pub auth_anon_key: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let auth_url = option_env!("MNKY_AUTH_URL").unwrap_or("");
        let auth_anon_key = option_env!("MNKY_AUTH_ANON_KEY").unwrap_or("");

        let mut config = Self {
            auth_url: auth_url.to_string(),
            auth_anon_key: auth_anon_key.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    auth_url: Option<String>,
    auth_anon_key: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.auth_url {
        config.auth_url = value;
    }
    if let Some(value) = runtime.auth_anon_key {
        config.auth_anon_key = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MNKY_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        auth_url: read_runtime_value(&object, "auth_url"),
        auth_anon_key: read_runtime_value(&object, "auth_anon_key"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
