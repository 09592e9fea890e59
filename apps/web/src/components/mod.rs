//! Shared UI components exported for routes.

pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod signup;
pub(crate) mod ui;

pub(crate) use footer::Footer;
pub(crate) use hero::Hero;
