//! The signup reducer.
//!
//! `SignupFlow::handle` takes one UI, gateway or timer [`Event`] and returns
//! the [`Command`]s the host must run. Events that the current state does not
//! accept are dropped without touching the session, which is what keeps
//! duplicate submissions and stale responses out.

use crate::{
    email::{normalize_email, valid_email},
    error::SignupError,
    gateway::{GatewayCall, GatewayError},
    marker::{self, MarkerStore},
    otp::{OtpEdit, OTP_LENGTH},
    session::SignupSession,
    state::{FlowState, Pending, Recovery},
    timer::{TimerKind, TimerTicket, Timers},
    view::FlowView,
};
use tracing::{debug, warn};

/// Inputs to the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The collapsed "request early access" control was clicked.
    Activate,
    EmailChanged(String),
    SubmitEmail,
    CodeRequested(Result<(), GatewayError>),
    /// Raw value of an OTP cell after an input event.
    DigitInput { index: usize, value: String },
    /// Backspace keydown on an OTP cell, before the browser edits it.
    Backspace { index: usize },
    CellFocused(usize),
    /// Explicit submit of the OTP form.
    SubmitCode,
    CodeVerified(Result<(), GatewayError>),
    /// The user dismissed the expanded control.
    Cancel,
    TimerFired(TimerTicket),
}

/// Side effects for the host to run, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Gateway(GatewayCall),
    /// Deliver `Event::TimerFired(ticket)` after `ticket.delay()`.
    Schedule(TimerTicket),
    /// The ticket was superseded; the host may drop its timer.
    Cancel(TimerTicket),
    /// Move keyboard focus to an OTP cell.
    Focus(usize),
}

pub struct SignupFlow<S> {
    store: S,
    state: FlowState,
    session: SignupSession,
    timers: Timers,
    /// Marker found at mount or written on verification. Blocks reactivation.
    signed_up: bool,
    /// The permanent confirmation replaces the control.
    confirmed: bool,
}

impl<S: MarkerStore> SignupFlow<S> {
    /// Reads the signup marker once and builds the initial state.
    pub fn mount(store: S) -> Self {
        let signed_up = marker::is_signed_up(&store);
        if signed_up {
            debug!("signup marker present, flow is inert");
        }

        Self {
            store,
            state: FlowState::Collapsed,
            session: SignupSession::default(),
            timers: Timers::default(),
            signed_up,
            confirmed: signed_up,
        }
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> &SignupSession {
        &self.session
    }

    #[must_use]
    pub fn is_signed_up(&self) -> bool {
        self.signed_up
    }

    #[must_use]
    pub fn shows_confirmation(&self) -> bool {
        self.confirmed
    }

    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerTicket> {
        self.timers.armed()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> FlowView {
        FlowView::new(self.state, &self.session, self.confirmed)
    }

    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        let mut out = Vec::new();
        let before = self.state;

        match event {
            Event::Activate => self.activate(),
            Event::EmailChanged(email) => {
                if self.state.accepts_email() {
                    self.session.email = email;
                }
            }
            Event::SubmitEmail => self.submit_email(&mut out),
            Event::CodeRequested(result) => self.code_requested(result, &mut out),
            Event::DigitInput { index, value } => self.digit_input(index, &value, &mut out),
            Event::Backspace { index } => {
                if self.state == FlowState::OtpEntry {
                    if let Some(previous) = self.session.otp.backspace_target(index) {
                        self.focus(previous, &mut out);
                    }
                }
            }
            Event::CellFocused(index) => {
                if index < OTP_LENGTH {
                    self.session.focus = Some(index);
                }
            }
            Event::SubmitCode => {
                if self.state == FlowState::OtpEntry {
                    self.start_verification(&mut out);
                }
            }
            Event::CodeVerified(result) => self.code_verified(result, &mut out),
            Event::Cancel => self.cancel(&mut out),
            Event::TimerFired(ticket) => self.timer_fired(ticket, &mut out),
        }

        if self.state != before {
            debug!(from = ?before, to = ?self.state, "signup flow transition");
        }

        out
    }

    fn activate(&mut self) {
        if self.signed_up || self.state != FlowState::Collapsed {
            return;
        }
        self.state = FlowState::EmailEntry;
    }

    fn submit_email(&mut self, out: &mut Vec<Command>) {
        if !self.state.accepts_email() {
            return;
        }
        self.disarm(out);

        let email = normalize_email(&self.session.email);
        if !valid_email(&email) {
            self.fail(SignupError::InvalidEmail, Recovery::EmailEntry, out);
            return;
        }

        self.session.email.clone_from(&email);
        self.session.error = None;
        self.state = FlowState::Verifying(Pending::CodeRequest);
        out.push(Command::Gateway(GatewayCall::RequestCode { email }));
    }

    fn code_requested(&mut self, result: Result<(), GatewayError>, out: &mut Vec<Command>) {
        if self.state != FlowState::Verifying(Pending::CodeRequest) {
            debug!("ignoring code request result outside of verification");
            return;
        }

        match result {
            Ok(()) => {
                self.session.code_requested = true;
                self.session.error = None;
                self.session.otp.clear();
                self.state = FlowState::OtpEntry;
                self.focus(0, out);
            }
            Err(err) => {
                debug!(status = ?err.status, "code request rejected");
                self.fail(SignupError::from_code_request(&err), Recovery::EmailEntry, out);
            }
        }
    }

    fn digit_input(&mut self, index: usize, value: &str, out: &mut Vec<Command>) {
        if self.state != FlowState::OtpEntry {
            return;
        }

        match self.session.otp.input(index, value) {
            OtpEdit::Rejected => debug!(index, "rejected otp cell input"),
            OtpEdit::Accepted {
                advance_to,
                complete,
                ..
            } => {
                if let Some(next) = advance_to {
                    self.focus(next, out);
                }
                if complete {
                    self.start_verification(out);
                }
            }
        }
    }

    fn start_verification(&mut self, out: &mut Vec<Command>) {
        let Some(code) = self.session.otp.code() else {
            return;
        };

        self.state = FlowState::Verifying(Pending::CodeCheck);
        out.push(Command::Gateway(GatewayCall::VerifyCode {
            email: self.session.email.clone(),
            code,
        }));
    }

    fn code_verified(&mut self, result: Result<(), GatewayError>, out: &mut Vec<Command>) {
        if self.state != FlowState::Verifying(Pending::CodeCheck) {
            debug!("ignoring code check result outside of verification");
            return;
        }

        match result {
            Ok(()) => {
                if let Err(err) = marker::persist_signed_up(&self.store) {
                    warn!(error = %err, "unable to persist signup marker");
                }
                self.signed_up = true;
                self.session.error = None;
                self.state = FlowState::Verified;
                self.arm(TimerKind::Collapse, out);
            }
            Err(err) => {
                debug!(status = ?err.status, "code check rejected");
                self.fail(SignupError::VerificationFailed, Recovery::OtpEntry, out);
            }
        }
    }

    fn cancel(&mut self, out: &mut Vec<Command>) {
        if self.signed_up || !self.state.is_cancellable() {
            return;
        }
        self.disarm(out);
        self.session.reset();
        self.state = FlowState::Collapsed;
    }

    fn timer_fired(&mut self, ticket: TimerTicket, out: &mut Vec<Command>) {
        if !self.timers.fire(ticket) {
            debug!(kind = ?ticket.kind(), "ignoring stale timer");
            return;
        }

        match (ticket.kind(), self.state) {
            (TimerKind::DismissError | TimerKind::ClearDigits, FlowState::Error(recovery)) => {
                self.session.error = None;
                if recovery == Recovery::OtpEntry {
                    self.session.otp.clear();
                    self.focus(0, out);
                }
                self.state = recovery.state();
            }
            (TimerKind::Collapse, FlowState::Verified) => {
                self.state = FlowState::Collapsed;
                self.arm(TimerKind::Reset, out);
            }
            (TimerKind::Reset, FlowState::Collapsed) => {
                self.session.reset();
                self.confirmed = true;
            }
            (kind, state) => debug!(?kind, ?state, "timer fired in unexpected state"),
        }
    }

    fn fail(&mut self, error: SignupError, recovery: Recovery, out: &mut Vec<Command>) {
        let kind = match recovery {
            Recovery::EmailEntry => TimerKind::DismissError,
            Recovery::OtpEntry => TimerKind::ClearDigits,
        };
        self.session.error = Some(error);
        self.state = FlowState::Error(recovery);
        self.arm(kind, out);
    }

    fn focus(&mut self, index: usize, out: &mut Vec<Command>) {
        self.session.focus = Some(index);
        out.push(Command::Focus(index));
    }

    fn arm(&mut self, kind: TimerKind, out: &mut Vec<Command>) {
        let (ticket, replaced) = self.timers.arm(kind);
        if let Some(replaced) = replaced {
            out.push(Command::Cancel(replaced));
        }
        out.push(Command::Schedule(ticket));
    }

    fn disarm(&mut self, out: &mut Vec<Command>) {
        if let Some(ticket) = self.timers.disarm() {
            out.push(Command::Cancel(ticket));
        }
    }
}
