//! Admin key bootstrap for initial setup.
//!
//! Generates the first admin API key on startup when configured. Running it
//! again once an active admin key exists does nothing.

use persistence::repositories::ApiKeyRepository;
use shared::crypto::{extract_key_prefix, generate_api_key, sha256_hex};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminConfig;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Generated key has no identifying prefix")]
    MalformedKey,
}

/// Outcome of a bootstrap run.
#[derive(Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// `admin.bootstrap_key_name` is not set.
    NotConfigured,
    /// An active admin key already exists.
    AlreadyBootstrapped,
    /// A key was generated; the value is shown once in the logs.
    Created { key_prefix: String },
}

/// Bootstrap an admin API key if configured and none exists yet.
///
/// Call after migrations on startup.
pub async fn bootstrap_admin_key(
    pool: &PgPool,
    config: &AdminConfig,
) -> Result<BootstrapOutcome, BootstrapError> {
    let Some(name) = config
        .bootstrap_key_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    else {
        return Ok(BootstrapOutcome::NotConfigured);
    };

    let repo = ApiKeyRepository::new(pool.clone());
    if repo.has_active_admin_key().await? {
        info!("Active admin API key exists - skipping bootstrap");
        return Ok(BootstrapOutcome::AlreadyBootstrapped);
    }

    let api_key = generate_api_key();
    let key_prefix = extract_key_prefix(&api_key)
        .ok_or(BootstrapError::MalformedKey)?
        .to_string();

    repo.create_admin_key(name, &sha256_hex(&api_key), &key_prefix)
        .await?;

    info!(
        key_name = %name,
        api_key_prefix = %key_prefix,
        "Bootstrap admin API key created"
    );

    warn!(
        "SECURITY: Store this admin API key now, it will not be shown again. \
         Remove CMS__ADMIN__BOOTSTRAP_KEY_NAME after initial setup. Admin API key: {}",
        api_key
    );

    Ok(BootstrapOutcome::Created { key_prefix })
}
