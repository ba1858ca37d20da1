//! PostgreSQL activity store
//!
//! Durable adapter for the append-only activity log. Details are stored as
//! JSON text and re-parsed leniently on the way out, so a malformed payload
//! never breaks the read path.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use core_kernel::{DomainPort, EntryId, PortError};
use domain_sync::activity::{parse_details, ActivityEntry, NewActivityEntry};
use domain_sync::ports::ActivityStore;

use crate::error::DatabaseError;

/// Row shape of the `sync_activity` table
#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    timestamp: DateTime<Utc>,
    actor: String,
    action: String,
    details: String,
}

impl From<ActivityRow> for ActivityEntry {
    fn from(row: ActivityRow) -> Self {
        ActivityEntry {
            id: EntryId::new(row.id),
            timestamp: row.timestamp,
            actor: row.actor,
            action: row.action,
            details: parse_details(&row.details),
        }
    }
}

/// Activity store backed by PostgreSQL
pub struct PgActivityStore {
    pool: PgPool,
}

impl PgActivityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgActivityStore {}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn append(&self, entry: NewActivityEntry) -> Result<EntryId, PortError> {
        let details = entry.details.to_string();
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sync_activity (timestamp, actor, action, details)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(entry.timestamp)
        .bind(&entry.actor)
        .bind(&entry.action)
        .bind(&details)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(EntryId::new(id))
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<ActivityEntry>, PortError> {
        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
            SELECT id, timestamp, actor, action, details
            FROM sync_activity
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(ActivityEntry::from).collect())
    }
}
