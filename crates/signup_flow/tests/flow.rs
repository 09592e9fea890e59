//! End-to-end behaviour of the signup flow against a scripted gateway and a
//! fake clock. The harness runs commands the way the browser host does:
//! gateway calls resolve immediately, timers fire when the clock passes their
//! deadline, and focus moves are recorded.

use anyhow::Result;
use signup_flow::{
    marker::{SIGNUP_MARKER_KEY, SIGNUP_MARKER_TTL},
    perform, Affordance, AuthGateway, Command, Event, FlowState, GatewayCall, GatewayError,
    MarkerStore, MemoryStore, Notice, Pending, Recovery, SignupFlow, TimerTicket, OTP_LENGTH,
};
use std::{cell::RefCell, collections::VecDeque, time::Duration};

const EMAIL: &str = "ada@example.com";

#[derive(Default)]
struct ScriptedGateway {
    request_results: RefCell<VecDeque<Result<(), GatewayError>>>,
    verify_results: RefCell<VecDeque<Result<(), GatewayError>>>,
    calls: RefCell<Vec<GatewayCall>>,
}

impl ScriptedGateway {
    fn accept_request(&self) {
        self.request_results.borrow_mut().push_back(Ok(()));
    }

    fn reject_request(&self, err: GatewayError) {
        self.request_results.borrow_mut().push_back(Err(err));
    }

    fn accept_code(&self) {
        self.verify_results.borrow_mut().push_back(Ok(()));
    }

    fn reject_code(&self) {
        self.verify_results
            .borrow_mut()
            .push_back(Err(GatewayError::http(403, "Token has expired or is invalid")));
    }

    fn verify_calls(&self) -> Vec<GatewayCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, GatewayCall::VerifyCode { .. }))
            .cloned()
            .collect()
    }
}

impl AuthGateway for ScriptedGateway {
    async fn request_code(&self, email: &str) -> Result<(), GatewayError> {
        self.calls.borrow_mut().push(GatewayCall::RequestCode {
            email: email.to_string(),
        });
        self.request_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("unscripted request")))
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), GatewayError> {
        self.calls.borrow_mut().push(GatewayCall::VerifyCode {
            email: email.to_string(),
            code: code.to_string(),
        });
        self.verify_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("unscripted verify")))
    }
}

struct Harness {
    flow: SignupFlow<MemoryStore>,
    gateway: ScriptedGateway,
    now: Duration,
    timers: Vec<(Duration, TimerTicket)>,
    focus: Option<usize>,
    honor_cancel: bool,
}

impl Harness {
    fn new(store: MemoryStore) -> Self {
        Self {
            flow: SignupFlow::mount(store),
            gateway: ScriptedGateway::default(),
            now: Duration::ZERO,
            timers: Vec::new(),
            focus: None,
            honor_cancel: true,
        }
    }

    async fn send(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for command in self.flow.handle(event) {
                match command {
                    Command::Gateway(call) => queue.push_back(perform(&self.gateway, &call).await),
                    Command::Schedule(ticket) => {
                        self.timers.push((self.now + ticket.delay(), ticket));
                    }
                    Command::Cancel(ticket) => {
                        if self.honor_cancel {
                            self.timers.retain(|(_, armed)| *armed != ticket);
                        }
                    }
                    Command::Focus(index) => self.focus = Some(index),
                }
            }
        }
    }

    async fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            let due = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (deadline, _))| *deadline <= target)
                .min_by_key(|(_, (deadline, _))| *deadline)
                .map(|(position, _)| position);
            let Some(position) = due else {
                break;
            };
            let (deadline, ticket) = self.timers.remove(position);
            self.now = deadline;
            self.send(Event::TimerFired(ticket)).await;
        }
        self.now = target;
    }

    async fn type_email(&mut self, email: &str) {
        self.send(Event::Activate).await;
        self.send(Event::EmailChanged(email.to_string())).await;
        self.send(Event::SubmitEmail).await;
    }

    async fn type_code(&mut self, code: &str) {
        for (index, digit) in code.chars().enumerate() {
            self.send(Event::CellFocused(index)).await;
            self.send(Event::DigitInput {
                index,
                value: digit.to_string(),
            })
            .await;
        }
    }

    async fn reach_otp_entry(&mut self) {
        self.gateway.accept_request();
        self.type_email(EMAIL).await;
        assert_eq!(self.flow.state(), FlowState::OtpEntry);
    }
}

#[tokio::test]
async fn non_numeric_input_never_mutates_the_session() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.reach_otp_entry().await;
    harness.type_code("12").await;
    let before = harness.flow.session().clone();

    for value in ["a", "٣", " ", "12", "9x", "-", "e"] {
        for index in 0..OTP_LENGTH {
            harness
                .send(Event::DigitInput {
                    index,
                    value: value.to_string(),
                })
                .await;
            assert_eq!(harness.flow.session(), &before, "value {value:?} at {index}");
        }
    }
    assert_eq!(harness.flow.state(), FlowState::OtpEntry);
}

#[tokio::test]
async fn six_digits_trigger_exactly_one_verification() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.reach_otp_entry().await;
    harness.gateway.accept_code();

    harness.type_code("123459").await;
    harness.send(Event::SubmitCode).await;

    assert_eq!(
        harness.gateway.verify_calls(),
        vec![GatewayCall::VerifyCode {
            email: EMAIL.to_string(),
            code: "123459".to_string(),
        }]
    );
    assert_eq!(harness.flow.state(), FlowState::Verified);
}

#[tokio::test]
async fn explicit_submit_while_verifying_is_not_a_second_attempt() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.reach_otp_entry().await;
    harness.type_code("12345").await;

    // Last digit without resolving the gateway call yet.
    let commands = harness.flow.handle(Event::DigitInput {
        index: 5,
        value: "9".to_string(),
    });
    let calls = commands
        .iter()
        .filter(|command| matches!(command, Command::Gateway(_)))
        .count();
    assert_eq!(calls, 1);
    assert_eq!(
        harness.flow.state(),
        FlowState::Verifying(Pending::CodeCheck)
    );

    assert!(harness.flow.handle(Event::SubmitCode).is_empty());
    assert!(harness
        .flow
        .handle(Event::DigitInput {
            index: 5,
            value: "1".to_string(),
        })
        .is_empty());
}

#[tokio::test]
async fn rejected_code_clears_cells_after_delay_and_keeps_email() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.reach_otp_entry().await;
    harness.gateway.reject_code();

    harness.type_code("123459").await;

    assert_eq!(harness.flow.state(), FlowState::Error(Recovery::OtpEntry));
    let view = harness.flow.view();
    assert!(view.shake);
    assert_eq!(view.digit_text(5), "9", "rejected digits stay visible");
    assert_eq!(harness.focus, Some(5));

    harness.advance(Duration::from_millis(999)).await;
    assert_eq!(harness.flow.state(), FlowState::Error(Recovery::OtpEntry));
    assert!(!harness.flow.session().otp().is_empty());

    harness.advance(Duration::from_millis(1)).await;
    assert_eq!(harness.flow.state(), FlowState::OtpEntry);
    assert!(harness.flow.session().otp().is_empty());
    assert_eq!(harness.focus, Some(0));
    assert_eq!(harness.flow.session().focus(), Some(0));
    assert_eq!(harness.flow.session().email(), EMAIL);
    assert!(!harness.flow.view().shake);
}

#[tokio::test]
async fn retry_after_rejected_code_can_succeed() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.reach_otp_entry().await;
    harness.gateway.reject_code();
    harness.gateway.accept_code();

    harness.type_code("000000").await;
    harness.advance(Duration::from_secs(1)).await;
    harness.type_code("123459").await;

    assert_eq!(harness.flow.state(), FlowState::Verified);
    assert_eq!(harness.gateway.verify_calls().len(), 2);
}

#[tokio::test]
async fn rate_limited_request_shows_specific_message_then_reverts() {
    let mut harness = Harness::new(MemoryStore::new());
    harness
        .gateway
        .reject_request(GatewayError::http(429, "email rate limit exceeded"));

    harness.type_email(EMAIL).await;

    assert_eq!(harness.flow.state(), FlowState::Error(Recovery::EmailEntry));
    assert_eq!(
        harness.flow.view().notice,
        Some(Notice::Error(
            "You are being rate limited. Please wait a moment.".to_string()
        ))
    );

    harness.advance(Duration::from_millis(2999)).await;
    assert!(harness.flow.session().error().is_some());

    harness.advance(Duration::from_millis(1)).await;
    assert_eq!(harness.flow.state(), FlowState::EmailEntry);
    assert_eq!(harness.flow.session().error_message(), None);
    assert_eq!(harness.flow.session().email(), EMAIL);
}

#[tokio::test]
async fn other_request_failures_show_generic_message_then_revert() {
    for err in [
        GatewayError::http(500, "internal"),
        GatewayError::http(422, "Signups not allowed for otp"),
        GatewayError::network("Unable to reach the server"),
    ] {
        let mut harness = Harness::new(MemoryStore::new());
        harness.gateway.reject_request(err);

        harness.type_email(EMAIL).await;

        assert_eq!(
            harness.flow.session().error_message().as_deref(),
            Some("Something went wrong. Please try again.")
        );
        harness.advance(Duration::from_secs(3)).await;
        assert_eq!(harness.flow.state(), FlowState::EmailEntry);
        assert_eq!(harness.flow.view().notice, Some(Notice::Disclaimer));
    }
}

#[tokio::test]
async fn success_collapses_then_shows_confirmation_and_survives_reload() -> Result<()> {
    let store = MemoryStore::new();
    let mut harness = Harness::new(store.clone());
    harness.reach_otp_entry().await;
    harness.gateway.accept_code();

    harness.type_code("123459").await;

    assert_eq!(harness.flow.state(), FlowState::Verified);
    assert_eq!(harness.flow.view().notice, Some(Notice::Verified));
    assert_eq!(store.get(SIGNUP_MARKER_KEY).as_deref(), Some("true"));
    assert_eq!(store.ttl(SIGNUP_MARKER_KEY), Some(SIGNUP_MARKER_TTL));

    harness.advance(Duration::from_secs(2)).await;
    assert_eq!(harness.flow.state(), FlowState::Collapsed);
    assert_eq!(harness.flow.view().affordance, Affordance::Button);

    // Clicking during the collapse window must not reopen the form.
    harness.send(Event::Activate).await;
    assert_eq!(harness.flow.state(), FlowState::Collapsed);

    harness.advance(Duration::from_secs(2)).await;
    assert!(harness.flow.shows_confirmation());
    assert_eq!(harness.flow.view().affordance, Affordance::Confirmation);
    assert_eq!(harness.flow.session().email(), "");
    assert!(harness.flow.session().otp().is_empty());

    let mut reloaded = Harness::new(store);
    assert_eq!(reloaded.flow.view().affordance, Affordance::Confirmation);
    reloaded.send(Event::Activate).await;
    assert_eq!(reloaded.flow.state(), FlowState::Collapsed);
    assert_eq!(reloaded.flow.view().affordance, Affordance::Confirmation);
    assert!(reloaded.gateway.calls.borrow().is_empty());

    Ok(())
}

#[tokio::test]
async fn backspace_on_empty_first_cell_changes_nothing() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.reach_otp_entry().await;
    let focus = harness.focus;
    let session = harness.flow.session().clone();

    harness.send(Event::Backspace { index: 0 }).await;

    assert_eq!(harness.focus, focus);
    assert_eq!(harness.flow.session(), &session);
    assert_eq!(harness.flow.state(), FlowState::OtpEntry);
}

#[tokio::test]
async fn stale_digit_clear_never_touches_a_restarted_session() {
    let mut harness = Harness::new(MemoryStore::new());
    // A host whose timers cannot be cancelled still delivers the old ticket.
    harness.honor_cancel = false;
    harness.reach_otp_entry().await;
    harness.gateway.reject_code();
    harness.type_code("000000").await;
    assert_eq!(harness.flow.state(), FlowState::Error(Recovery::OtpEntry));

    harness.send(Event::Cancel).await;
    assert_eq!(harness.flow.state(), FlowState::Collapsed);

    harness.gateway.accept_request();
    harness.type_email("grace@example.com").await;
    harness.type_code("123").await;

    harness.advance(Duration::from_secs(5)).await;

    assert_eq!(harness.flow.state(), FlowState::OtpEntry);
    assert_eq!(harness.flow.view().digit_text(0), "1");
    assert_eq!(harness.flow.view().digit_text(2), "3");
    assert_eq!(harness.flow.session().email(), "grace@example.com");
}

#[tokio::test]
async fn stale_error_dismissal_never_clears_a_newer_error() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.honor_cancel = false;
    harness
        .gateway
        .reject_request(GatewayError::http(500, "internal"));
    harness
        .gateway
        .reject_request(GatewayError::http(429, "slow down"));

    harness.type_email(EMAIL).await;
    harness.advance(Duration::from_secs(2)).await;
    harness.send(Event::SubmitEmail).await;

    // First error's timer would have fired at 3s.
    harness.advance(Duration::from_secs(1)).await;
    assert_eq!(harness.flow.state(), FlowState::Error(Recovery::EmailEntry));
    assert_eq!(
        harness.flow.session().error_message().as_deref(),
        Some("You are being rate limited. Please wait a moment.")
    );

    harness.advance(Duration::from_secs(2)).await;
    assert_eq!(harness.flow.state(), FlowState::EmailEntry);
}

#[tokio::test]
async fn cancel_is_refused_while_a_request_is_outstanding() {
    let mut harness = Harness::new(MemoryStore::new());
    harness.send(Event::Activate).await;
    harness
        .send(Event::EmailChanged(EMAIL.to_string()))
        .await;

    let commands = harness.flow.handle(Event::SubmitEmail);
    assert_eq!(commands.len(), 1);
    assert!(harness.flow.handle(Event::Cancel).is_empty());
    assert_eq!(
        harness.flow.state(),
        FlowState::Verifying(Pending::CodeRequest)
    );
    assert!(harness.flow.view().busy);
}
