//! Activity log handlers
//!
//! Read-only view over the durable activity log, newest entries first.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use domain_sync::ActivityEntry;

use crate::error::ApiError;
use crate::AppState;

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

#[derive(Debug, Deserialize)]
pub struct ListActivityParams {
    /// Maximum number of entries to return (default 100, capped at 1000)
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ActivityEntryResponse {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub details: Value,
}

impl From<ActivityEntry> for ActivityEntryResponse {
    fn from(entry: ActivityEntry) -> Self {
        Self {
            id: entry.id.value(),
            timestamp: entry.timestamp,
            actor: entry.actor,
            action: entry.action,
            details: entry.details,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListActivityResponse {
    pub entries: Vec<ActivityEntryResponse>,
}

/// Lists recent activity entries, newest first
pub async fn list_activity(
    State(state): State<AppState>,
    Query(params): Query<ListActivityParams>,
) -> Result<Json<ListActivityResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let entries = state.activity.list_recent(limit).await?;

    Ok(Json(ListActivityResponse {
        entries: entries.into_iter().map(Into::into).collect(),
    }))
}
