//! # MNKY site server
//!
//! `mnky` serves the compiled landing page bundle (`apps/web/dist`) and the
//! small amount of server-side surface the page needs:
//!
//! - `/config.js`: runtime configuration for the browser (auth endpoint and
//!   public anon key), so one bundle can be promoted across environments.
//! - `/health`: build and version information.
//! - everything else: static files with an `index.html` fallback for
//!   client-side routes.
//!
//! The early-access signup itself runs entirely in the browser; see the
//! `signup_flow` crate.

pub mod cli;
pub mod mnky;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
