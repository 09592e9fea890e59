//! Wire types for the hosted auth provider (GoTrue).

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/v1/otp`.
#[derive(Debug, Serialize)]
pub struct OtpRequest<'a> {
    pub email: &'a str,
    pub create_user: bool,
}

/// Body for `POST /auth/v1/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyOtpRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub email: &'a str,
    pub token: &'a str,
}

/// Error payload. The provider has used several field names across versions.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProviderError {
    /// Most specific message in `body`, or the body itself when it is not JSON.
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| {
                parsed
                    .msg
                    .or(parsed.message)
                    .or(parsed.error_description)
                    .or(parsed.error)
            })
            .unwrap_or_else(|| body.to_string())
    }
}
