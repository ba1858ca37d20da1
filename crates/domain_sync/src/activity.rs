//! Activity log
//!
//! Append-only, durable record of every workflow step, and the read path the
//! admin surface renders. The log is a diagnostic side channel: recording
//! must never abort the workflow, so `record` swallows store failures and
//! reports them through tracing instead.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{Clock, EntryId, PortError};

use crate::ports::ActivityStore;

/// Fixed vocabulary of workflow step tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    OrderProcessingStarted,
    OrderProcessingFailed,
    CustomerDetailsCollected,
    ContactCreated,
    ContactCreationFailed,
    CreatingInvoice,
    InvoiceCreated,
    InvoiceCreationFailed,
    ApiRequestCompleted,
    ApiRequestFailed,
}

impl ActivityAction {
    /// Returns the stored tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::OrderProcessingStarted => "order_processing_started",
            ActivityAction::OrderProcessingFailed => "order_processing_failed",
            ActivityAction::CustomerDetailsCollected => "customer_details_collected",
            ActivityAction::ContactCreated => "contact_created",
            ActivityAction::ContactCreationFailed => "contact_creation_failed",
            ActivityAction::CreatingInvoice => "creating_invoice",
            ActivityAction::InvoiceCreated => "invoice_created",
            ActivityAction::InvoiceCreationFailed => "invoice_creation_failed",
            ActivityAction::ApiRequestCompleted => "api_request_completed",
            ActivityAction::ApiRequestFailed => "api_request_failed",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable, stored activity entry
///
/// The action is kept as a plain string on the read path so entries written
/// by older versions with a different vocabulary still render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: EntryId,
    /// UTC timestamp assigned at append time
    pub timestamp: DateTime<Utc>,
    /// Actor identity the log was constructed with
    pub actor: String,
    /// Action tag
    pub action: String,
    /// Structured detail payload
    pub details: Value,
}

/// An entry about to be appended (no id yet)
#[derive(Debug, Clone)]
pub struct NewActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub details: Value,
}

/// Parses a stored detail payload, falling back to an opaque raw string
///
/// Stored details are JSON text; anything that does not parse is exposed
/// as-is rather than failing the read path.
pub fn parse_details(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Activity log service
///
/// Wraps the durable store with the clock capability and the acting
/// identity, both passed in explicitly rather than read from ambient state.
#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<dyn ActivityStore>,
    clock: Arc<dyn Clock>,
    actor: String,
}

impl ActivityLog {
    pub fn new(store: Arc<dyn ActivityStore>, clock: Arc<dyn Clock>, actor: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            actor: actor.into(),
        }
    }

    /// Appends one entry for a workflow step
    ///
    /// Details are serialized to JSON; values that cannot be serialized are
    /// stored as a best-effort string instead of failing the call. A store
    /// failure is reported via tracing and yields `None`; logging never
    /// raises to the workflow.
    pub async fn record(&self, action: ActivityAction, details: impl Serialize) -> Option<EntryId> {
        let details = match serde_json::to_value(&details) {
            Ok(value) => value,
            Err(err) => Value::String(format!("unserializable details: {err}")),
        };

        let entry = NewActivityEntry {
            timestamp: self.clock.now_utc(),
            actor: self.actor.clone(),
            action: action.as_str().to_string(),
            details,
        };

        match self.store.append(entry).await {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(action = %action, error = %err, "failed to append activity entry");
                None
            }
        }
    }

    /// Lists the most recent entries, newest first, bounded by `limit`
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<ActivityEntry>, PortError> {
        self.store.list_recent(limit).await
    }

    /// Returns the actor identity entries are stamped with
    pub fn actor(&self) -> &str {
        &self.actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_tags_are_snake_case() {
        assert_eq!(
            ActivityAction::OrderProcessingStarted.as_str(),
            "order_processing_started"
        );
        assert_eq!(
            ActivityAction::InvoiceCreationFailed.to_string(),
            "invoice_creation_failed"
        );
    }

    #[test]
    fn test_action_serde_matches_stored_tag() {
        let tag = serde_json::to_string(&ActivityAction::ContactCreated).unwrap();
        assert_eq!(tag, "\"contact_created\"");
    }

    #[test]
    fn test_parse_details_structured() {
        let value = parse_details(r#"{"order_id": 1001}"#);
        assert_eq!(value, json!({"order_id": 1001}));
    }

    #[test]
    fn test_parse_details_falls_back_to_raw_string() {
        let value = parse_details("not { json");
        assert_eq!(value, Value::String("not { json".to_string()));
    }
}
