use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Build the filter: `RUST_LOG` wins, otherwise `verbosity_level`.
fn filter(verbosity_level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?)
        .add_directive("tower_http=info".parse()?))
}

/// Initialize logging.
///
/// # Errors
///
/// Returns an error if a directive fails to parse or a global subscriber is
/// already installed.
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let fmt_layer = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .pretty();

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(filter(verbosity_level)?);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_verbosity_without_rust_log() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = filter(Level::DEBUG);
            assert!(filter.is_ok());
            let rendered = filter.map(|f| f.to_string()).unwrap_or_default();
            assert!(rendered.contains("debug"), "unexpected filter: {rendered}");
            assert!(rendered.contains("hyper=error"));
        });
    }

    #[test]
    fn test_filter_honors_rust_log() {
        temp_env::with_var("RUST_LOG", Some("mnky=trace"), || {
            let rendered = filter(Level::ERROR)
                .map(|f| f.to_string())
                .unwrap_or_default();
            assert!(rendered.contains("mnky=trace"), "unexpected filter: {rendered}");
        });
    }
}
