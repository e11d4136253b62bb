use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tidings::app::AppContext;
use tidings::cli::Cli;
use tidings::config::UiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new();

    // Fetch and parse failures are fatal here; there is no in-UI error state.
    let (meta, entries) = ctx.load(&cli.url).await?;
    let title = meta.title.unwrap_or_else(|| "tidings".to_string());

    tidings::tui::run(title, entries, UiConfig::default())?;

    Ok(())
}
