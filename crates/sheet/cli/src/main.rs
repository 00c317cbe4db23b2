//! Command-line entry point: derives a resource sheet from a JSON request.
mod app;
mod config;

use anyhow::Result;
use app::SheetApp;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // stdout carries the sheet; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env().with_args(std::env::args().skip(1));

    SheetApp::new(config).run()
}
