//! # Early-access signup flow
//!
//! State machine behind the "Request Early Access" control on the MNKY landing
//! page: the collapsed button expands into an email form, the email receives a
//! one-time code, the 6-digit code is verified, and a durable marker keeps the
//! control replaced by a confirmation from then on.
//!
//! ## Flow Overview
//!
//! ```text
//! collapsed -> emailEntry -> verifying -> otpEntry -> verifying -> verified -> collapsed(marked)
//!                  ^             |                        |
//!                  +-- error <---+           otpEntry <---+-- error
//! ```
//!
//! The crate is target independent. [`SignupFlow`] is a reducer: the host
//! feeds it [`Event`]s and runs the returned [`Command`]s (gateway calls,
//! timers, focus moves). The browser host lives in `apps/web`; tests drive it
//! with a fake clock.
//!
//! The marker is read through the injected [`MarkerStore`] once at mount and
//! written only after the gateway confirms a code. Emails and codes must not be
//! logged.

pub mod email;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod marker;
pub mod otp;
pub mod session;
pub mod state;
pub mod timer;
pub mod view;

pub use error::{MarkerError, SignupError};
pub use flow::{Command, Event, SignupFlow};
pub use gateway::{perform, AuthGateway, GatewayCall, GatewayError};
pub use marker::{MarkerStore, MemoryStore};
pub use otp::{OtpBuffer, OTP_LENGTH};
pub use session::SignupSession;
pub use state::{FlowState, Pending, Recovery};
pub use timer::{TimerKind, TimerTicket};
pub use view::{Affordance, FlowView, Notice};
