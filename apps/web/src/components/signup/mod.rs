//! The "Request Early Access" control and its expanded forms. All decisions
//! come from the `signup_flow` view model; these components only render it and
//! forward DOM events.

mod control;
mod email_form;
mod notice;
mod otp_form;

pub(crate) use control::SignupControl;
