use anyhow::Result;
use tracing::{info, warn};

use corporate_site_api::services::{bootstrap_admin_key, BootstrapOutcome};
use corporate_site_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting corporate site API v{}", env!("CARGO_PKG_VERSION"));

    middleware::init_metrics()?;

    // Create database pool
    let pool = persistence::db::create_pool(&config.database).await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    match bootstrap_admin_key(&pool, &config.admin).await? {
        BootstrapOutcome::Created { key_prefix } => {
            info!(api_key_prefix = %key_prefix, "Admin key bootstrapped")
        }
        BootstrapOutcome::AlreadyBootstrapped | BootstrapOutcome::NotConfigured => {}
    }

    if config.email.enabled {
        info!(
            provider = %config.email.provider,
            recipient = %config.notification.admin_email,
            "Inquiry notifications enabled"
        );
    } else {
        warn!("Email disabled: inquiry notifications will only be logged");
    }

    // Build application
    let addr = config.socket_addr()?;
    let app = app::create_app(config, pool);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
