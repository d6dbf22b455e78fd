mod api;
mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rinkcal")]
#[command(about = "Export an NHL club's season schedule to an .ics calendar file")]
struct Cli {
    /// Path to the settings file (built-in defaults are used if absent)
    #[arg(short, long, default_value = "rinkcal.toml")]
    config: PathBuf,

    /// Verbose logging plus raw-response dump files next to the .ics
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = config::load_settings(&cli.config)?;
    if cli.debug {
        settings.debug = true;
    }

    init_tracing(settings.debug);

    pipeline::run(&settings).await
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "rinkcal=debug"
    } else {
        "rinkcal=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
