use anyhow::Result;
use tracing::{debug, info, trace};

use super::initdb::apply_migrations;
use super::serve::run_server;
use crate::config::connect;
use crate::schemas::AppState;

pub async fn migrate_and_serve(database_url: &str, bind_address: &str) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");
    debug!("Bind address: {}", bind_address);

    let db = connect(database_url).await?;
    apply_migrations(&db).await?;

    // The migrated pool is reused for serving
    run_server(AppState { db }, bind_address).await
}
