use crate::{error::SignupError, otp::OtpBuffer};

/// Data for one signup attempt. Cleared on completion or cancellation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupSession {
    pub(crate) email: String,
    pub(crate) otp: OtpBuffer,
    pub(crate) error: Option<SignupError>,
    pub(crate) code_requested: bool,
    pub(crate) focus: Option<usize>,
}

impl SignupSession {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn otp(&self) -> &OtpBuffer {
        &self.otp
    }

    #[must_use]
    pub fn error(&self) -> Option<&SignupError> {
        self.error.as_ref()
    }

    /// Text to show under the control, if the current error has any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .filter(|err| err.has_message())
            .map(ToString::to_string)
    }

    #[must_use]
    pub fn code_requested(&self) -> bool {
        self.code_requested
    }

    /// OTP cell that last received focus.
    #[must_use]
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
