use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_DATABASE_URL: &str = "sqlite:./cadastro.db?mode=rwc";
const USAGE: &str = "Usage: cargo run -p migration -- [up|down|fresh|refresh|status]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let database = Database::connect(&url).await?;

    match command.as_str() {
        "up" => migration::Migrator::up(&database, None).await?,
        "down" => migration::Migrator::down(&database, Some(1)).await?,
        "fresh" => migration::Migrator::fresh(&database).await?,
        "refresh" => migration::Migrator::refresh(&database).await?,
        "status" => migration::Migrator::status(&database).await?,
        other => {
            eprintln!("unknown command: {other}\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
