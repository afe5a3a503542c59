use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a flag overrides it.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install a `tracing` subscriber that writes to stderr.
///
/// stdout carries the MCP protocol, so nothing else may be written there.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
