//! Palaver TUI entry point.

use std::str::FromStr;

use clap::Parser;
use palaver_app::{HeaderColor, ScreenConfig};
use palaver_tui::runtime::Runtime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Palaver terminal chat screen
#[derive(Parser, Debug)]
#[command(name = "palaver")]
#[command(about = "Single-screen terminal chat UI")]
#[command(version)]
struct Args {
    /// Header title shown in the top bar
    #[arg(short, long, default_value = "Chat Title")]
    title: String,

    /// Header color as a hex literal
    #[arg(short, long, default_value = "#3498db")]
    color: String,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // The alternate screen owns stdout; logs go to stderr so they can be
    // redirected without disturbing the UI.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config =
        ScreenConfig { title: args.title, header_color: HeaderColor::from_str(&args.color)? };

    let runtime = Runtime::new(config)?;
    Ok(runtime.run().await?)
}
