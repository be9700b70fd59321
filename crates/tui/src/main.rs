mod app;
mod config;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Arc};

use engine::SeaOrmSink;
use migration::MigratorTrait;

use crate::{config::AppConfig, error::Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_logging(&config)?;

    let database = sea_orm::Database::connect(config.database_url.as_str()).await?;
    migration::Migrator::up(&database, None).await?;
    tracing::info!(url = %config.database_url, "database ready");

    let mut app = app::App::new(SeaOrmSink::new(database));
    app.run().await?;
    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = &config.log_level;

    tracing_subscriber::fmt()
        .with_env_filter(format!("cadastro_tui={level},engine={level}"))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
