use tracing::info;

use lakeadmin::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = lakeadmin::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        lakeadmin::logging::init_console_only(&config.logging.level);
    }

    info!("LakeAdmin - data platform administration console");

    if config.auth.admin_token.is_none() {
        info!("No admin token configured; the create-user endpoint is disabled");
    }

    // Open the database and apply migrations
    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database at {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    // Run the web server
    let server = WebServer::new(&config.server, &config.auth, db);
    info!("Starting web server on {}", server.addr());

    if let Err(e) = server.run().await {
        eprintln!("Web server error: {e}");
        std::process::exit(1);
    }
}
