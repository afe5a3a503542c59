use clap::Parser;
use dinner_wine_mcp::{init_logging, logging::DEFAULT_LOG_LEVEL, run_stdio_server};

/// Dinner and Wine MCP server (stdio).
#[derive(Parser)]
#[command(name = "dinner-wine-mcp", version)]
struct Cli {
    /// Log filter used when RUST_LOG is unset. Logs go to stderr.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    run_stdio_server().await
}
