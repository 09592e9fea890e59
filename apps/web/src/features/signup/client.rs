//! GoTrue-backed [`AuthGateway`]. Every request carries the public anon key as
//! both `apikey` and bearer token, which is what the provider expects from
//! anonymous browsers.

use crate::{
    app_lib::{config::AppConfig, post_json_with_headers, AppError},
    features::signup::types::{OtpRequest, ProviderError, VerifyOtpRequest},
};
use signup_flow::{AuthGateway, GatewayError};

const OTP_PATH: &str = "/auth/v1/otp";
const VERIFY_PATH: &str = "/auth/v1/verify";

#[derive(Clone, Debug)]
pub(crate) struct SupabaseGateway {
    auth_url: String,
    anon_key: String,
}

impl SupabaseGateway {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            auth_url: config.auth_url.clone(),
            anon_key: config.auth_anon_key.clone(),
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("apikey".to_string(), self.anon_key.clone()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.anon_key),
            ),
        ]
    }

    fn ensure_configured(&self) -> Result<(), GatewayError> {
        if self.auth_url.trim().is_empty() || self.anon_key.trim().is_empty() {
            return Err(gateway_error(AppError::Config(
                "auth provider is not configured".to_string(),
            )));
        }
        Ok(())
    }
}

impl AuthGateway for SupabaseGateway {
    async fn request_code(&self, email: &str) -> Result<(), GatewayError> {
        self.ensure_configured()?;
        let body = OtpRequest {
            email,
            create_user: true,
        };
        post_json_with_headers(&self.auth_url, OTP_PATH, &body, &self.headers())
            .await
            .map_err(gateway_error)
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), GatewayError> {
        self.ensure_configured()?;
        let body = VerifyOtpRequest {
            kind: "email",
            email,
            token: code,
        };
        post_json_with_headers(&self.auth_url, VERIFY_PATH, &body, &self.headers())
            .await
            .map_err(gateway_error)
    }
}

/// Keeps the HTTP status so the flow can tell rate limiting apart.
fn gateway_error(err: AppError) -> GatewayError {
    match err {
        AppError::Http { status, message } => {
            GatewayError::http(status, ProviderError::message_from(&message))
        }
        other => GatewayError::network(other.to_string()),
    }
}
