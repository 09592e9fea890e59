use crate::mnky::{self, SiteConfig};
use anyhow::Result;
use std::{fmt, path::PathBuf};
use tracing::{info, warn};

pub struct Args {
    pub port: u16,
    pub dist: PathBuf,
    pub auth_url: String,
    pub auth_anon_key: String,
}

// The anon key is public but still kept out of logs.
impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("port", &self.port)
            .field("dist", &self.dist)
            .field("auth_url", &self.auth_url)
            .field("auth_anon_key", &"REDACTED")
            .finish()
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    if !args.dist.join("index.html").is_file() {
        warn!(
            "{} has no index.html; build the web bundle with `trunk build` in apps/web",
            args.dist.display()
        );
    }

    let config = SiteConfig {
        dist: args.dist,
        auth_url: args.auth_url,
        auth_anon_key: args.auth_anon_key,
    };

    mnky::new(args.port, config).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("dist", args.dist.display().to_string()),
        ("auth_url", args.auth_url.clone()),
        ("auth_anon_key_set", (!args.auth_anon_key.is_empty()).to_string()),
    ];
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\nStartup configuration:", banner());
    for (key, value) in &entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn banner() -> String {
    format!(
        "M N K Y - {} - {}",
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH)
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit(" abc "), "abc");
        assert_eq!(short_commit("unknown"), "unknown");
    }

    #[test]
    fn test_debug_redacts_anon_key() {
        let args = Args {
            port: 8080,
            dist: PathBuf::from("dist"),
            auth_url: "https://project.supabase.co".to_string(),
            auth_anon_key: "secret-anon".to_string(),
        };
        let rendered = format!("{args:?}");
        assert!(!rendered.contains("secret-anon"));
        assert!(rendered.contains("REDACTED"));
    }
}
