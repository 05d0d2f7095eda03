mod app;
mod config;
mod error;
mod ui;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    // Logs go to stderr; stdout belongs to the terminal UI.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "money_map_tui={level},money_map_client={level}",
                    level = config.log_level
                ))
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
