//! Domain-level frontend features. Components import these modules to keep view
//! code focused while provider calls and persistence live in dedicated areas.

pub(crate) mod signup;
