use crate::cli::actions::{server::Args, Action};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dist = matches
        .get_one::<String>("dist")
        .map(PathBuf::from)
        .context("missing required argument: --dist")?;
    let auth_url = matches
        .get_one::<String>("auth-url")
        .cloned()
        .context("missing required argument: --auth-url")?;
    let auth_anon_key = matches
        .get_one::<String>("auth-anon-key")
        .cloned()
        .context("missing required argument: --auth-anon-key")?;

    Ok(Action::Server(Args {
        port,
        dist,
        auth_url,
        auth_anon_key,
    }))
}
