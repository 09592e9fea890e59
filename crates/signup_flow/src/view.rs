//! Render model derived from the flow. Hosts draw from this instead of
//! matching on [`FlowState`] themselves.

use crate::{
    otp::OTP_LENGTH,
    session::SignupSession,
    state::{FlowState, Pending, Recovery},
};

/// What occupies the control slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    /// Static "signed up" badge; the flow is inert.
    Confirmation,
    /// Collapsed call-to-action button.
    Button,
    EmailForm,
    OtpForm,
}

/// Line of text under the control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Consent text shown while the email form is idle.
    Disclaimer,
    CodeSent { email: String },
    Verified,
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowView {
    pub affordance: Affordance,
    pub email: String,
    pub digits: [Option<char>; OTP_LENGTH],
    /// A gateway call is outstanding: show a spinner and lock the email form.
    pub busy: bool,
    /// The last code was rejected; cells keep their digits and flag the error.
    pub shake: bool,
    pub notice: Option<Notice>,
}

impl FlowView {
    pub(crate) fn new(state: FlowState, session: &SignupSession, confirmed: bool) -> Self {
        let affordance = if confirmed {
            Affordance::Confirmation
        } else {
            match state {
                FlowState::Collapsed => Affordance::Button,
                FlowState::EmailEntry
                | FlowState::Verifying(Pending::CodeRequest)
                | FlowState::Error(Recovery::EmailEntry) => Affordance::EmailForm,
                FlowState::OtpEntry
                | FlowState::Verifying(Pending::CodeCheck)
                | FlowState::Error(Recovery::OtpEntry)
                | FlowState::Verified => Affordance::OtpForm,
            }
        };

        let notice = match (affordance, state) {
            (Affordance::Confirmation | Affordance::Button, _)
            | (_, FlowState::Verifying(Pending::CodeRequest)) => None,
            (_, FlowState::EmailEntry) => Some(Notice::Disclaimer),
            (_, FlowState::Verified) => Some(Notice::Verified),
            (_, FlowState::Error(Recovery::EmailEntry)) => {
                session.error_message().map(Notice::Error)
            }
            _ => Some(Notice::CodeSent {
                email: session.email().to_string(),
            }),
        };

        Self {
            affordance,
            email: session.email().to_string(),
            digits: session.otp().digits(),
            busy: state.is_busy(),
            shake: state == FlowState::Error(Recovery::OtpEntry),
            notice,
        }
    }

    /// Cell value as the input element should display it.
    #[must_use]
    pub fn digit_text(&self, index: usize) -> String {
        self.digits
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }
}
