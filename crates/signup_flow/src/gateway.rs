//! Contract with the hosted auth provider that issues and checks one-time codes.
//!
//! The flow never calls the gateway itself. It emits a [`GatewayCall`], the
//! host runs it through [`perform`] and feeds the returned [`Event`] back.

use crate::flow::Event;

/// A rejected gateway request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("auth gateway rejected the request ({}): {message}", describe_status(.status))]
pub struct GatewayError {
    /// HTTP status when the provider answered, `None` for transport failures.
    pub status: Option<u16>,
    pub message: String,
}

impl GatewayError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Hosted auth provider. Implementations must not retry on their own.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Sends a 6-digit code to `email`, creating the user if needed.
    async fn request_code(&self, email: &str) -> Result<(), GatewayError>;

    /// Confirms a code previously sent to `email`.
    async fn verify_code(&self, email: &str, code: &str) -> Result<(), GatewayError>;
}

fn describe_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "no status".to_string(), |code| code.to_string())
}

/// A pending gateway request emitted by the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCall {
    RequestCode { email: String },
    VerifyCode { email: String, code: String },
}

/// Runs `call` against `gateway` and maps the outcome to the event the flow expects.
pub async fn perform<G: AuthGateway>(gateway: &G, call: &GatewayCall) -> Event {
    match call {
        GatewayCall::RequestCode { email } => {
            Event::CodeRequested(gateway.request_code(email).await)
        }
        GatewayCall::VerifyCode { email, code } => {
            Event::CodeVerified(gateway.verify_code(email, code).await)
        }
    }
}
