use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toastline::config::{Config, ConfigStore};
use toastline::ui::app;

#[derive(Parser)]
#[command(name = "toastline", about = "Toast notification demo", version)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout belongs to the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    let store = ConfigStore::new(config, path);

    app::run(store).await
}
