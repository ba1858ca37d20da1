//! Database infrastructure layer
//!
//! PostgreSQL implementations of the two durable stores the sync bridge
//! needs: the append-only activity log and the buyer-to-contact map. Both
//! adapters implement the port traits from `domain_sync` and convert their
//! database errors into `PortError` at the boundary.

pub mod activity;
pub mod contacts;
pub mod error;
pub mod pool;

pub use activity::PgActivityStore;
pub use contacts::PgContactStore;
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};

use sqlx::PgPool;

/// Applies the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|err| DatabaseError::MigrationFailed(err.to_string()))
}
