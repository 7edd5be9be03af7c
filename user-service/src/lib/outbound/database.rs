use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Create the connection pool, retrying while the database comes up.
///
/// # Errors
/// The last connection error once every attempt has failed
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;

    loop {
        let result = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await;

        match result {
            Ok(pool) => {
                tracing::info!(
                    max_connections = config.max_connections,
                    attempt,
                    database = "postgresql",
                    "Database connection pool created"
                );
                return Ok(pool);
            }
            Err(e) if attempt < config.connect_attempts => {
                tracing::warn!(attempt, error = %e, "Failed to create database connection pool");
                attempt += 1;
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Apply the embedded migrations, retrying like [`connect`].
///
/// # Errors
/// The last migration error once every attempt has failed
pub async fn migrate(pool: &PgPool, attempts: u32) -> Result<(), sqlx::migrate::MigrateError> {
    let mut attempt = 1;

    loop {
        match sqlx::migrate!("./migrations").run(pool).await {
            Ok(()) => {
                tracing::info!(attempt, database = "postgresql", "Database migrations completed");
                return Ok(());
            }
            Err(e) if attempt < attempts => {
                tracing::warn!(attempt, error = %e, "Database migration failed");
                attempt += 1;
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e),
        }
    }
}
