//! Early-access signup: the browser side of the `signup_flow` reducer.
//!
//! Flow Overview: the email is posted to the provider's OTP endpoint, which
//! mails a 6-digit code; the code is posted to the verify endpoint; on success
//! a `mnky_signed_up` cookie keeps the control replaced by a confirmation for
//! a year. Emails and codes pass through here and must never be logged.

pub(crate) mod client;
pub(crate) mod controller;
pub(crate) mod cookie;
pub(crate) mod types;

pub(crate) use controller::SignupController;
