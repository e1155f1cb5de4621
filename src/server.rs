use crate::config::ServerConfig;
use crate::db::{init_db, Database};
use crate::router::respond;
use anyhow::Context;
use astra::Server;

/// Open the database, make sure the schema exists and serve until the
/// listener fails.
pub fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    // 1️⃣ Create the database handle
    let db = Database::new(&config.database_path);

    // 2️⃣ Create the properties table if needed
    init_db(&db).with_context(|| {
        format!("database initialization failed: {}", config.database_path.display())
    })?;

    // 3️⃣ Start the server
    tracing::info!(addr = %config.bind_addr, workers = config.max_workers, "server running");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing db handle into closure
    server
        .serve(move |req, _info| respond(req, &db))
        .context("server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
