//! Shared frontend utilities for HTTP access, configuration, errors, and build
//! metadata.
//!
//! Feature clients build on these helpers so request setup, timeouts and error
//! shaping stay in one place. Nothing here stores secrets; the auth anon key is
//! public by design of the provider, but emails and codes passing through must
//! never be logged.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::post_json_with_headers;
pub(crate) use errors::AppError;
