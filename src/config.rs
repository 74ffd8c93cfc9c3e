use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Hosted Postgres providers still hand out `postgres://` URLs; use the
/// canonical `postgresql://` scheme so every driver accepts them.
pub fn normalize_database_url(database_url: &str) -> String {
    match database_url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => database_url.to_string(),
    }
}

/// Open the connection pool for the given database URL
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    let database_url = normalize_database_url(database_url);
    info!("Connecting to database: {}", database_url);

    let db = Database::connect(&database_url).await?;
    debug!("Database connection established");
    Ok(db)
}

/// Initialize application state from a database URL
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    let db = connect(database_url).await?;
    Ok(AppState { db })
}
