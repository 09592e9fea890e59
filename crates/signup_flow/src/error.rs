use crate::gateway::GatewayError;

/// HTTP status the auth gateway uses for throttled requests.
pub const RATE_LIMITED_STATUS: u16 = 429;

/// Failures surfaced to the user. Every variant is recoverable inside the flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("You are being rate limited. Please wait a moment.")]
    RateLimited,
    #[error("Something went wrong. Please try again.")]
    RequestFailed,
    #[error("That code did not match.")]
    VerificationFailed,
}

impl SignupError {
    /// Classifies a rejected code request.
    #[must_use]
    pub fn from_code_request(err: &GatewayError) -> Self {
        if err.status == Some(RATE_LIMITED_STATUS) {
            Self::RateLimited
        } else {
            Self::RequestFailed
        }
    }

    /// Whether the UI renders message text; a rejected code only shakes the cells.
    #[must_use]
    pub fn has_message(&self) -> bool {
        !matches!(self, Self::VerificationFailed)
    }
}

/// The marker store could not persist a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unable to persist {key}: {reason}")]
pub struct MarkerError {
    pub key: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        let err = GatewayError::http(429, "too many requests");
        assert_eq!(SignupError::from_code_request(&err), SignupError::RateLimited);
        assert_eq!(
            SignupError::RateLimited.to_string(),
            "You are being rate limited. Please wait a moment."
        );
    }

    #[test]
    fn other_failures_are_generic() {
        for err in [
            GatewayError::http(400, "bad email"),
            GatewayError::http(500, ""),
            GatewayError::network("offline"),
        ] {
            assert_eq!(SignupError::from_code_request(&err), SignupError::RequestFailed);
        }
        assert_eq!(
            SignupError::RequestFailed.to_string(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn verification_failure_is_visual_only() {
        assert!(!SignupError::VerificationFailed.has_message());
        assert!(SignupError::RateLimited.has_message());
    }
}
