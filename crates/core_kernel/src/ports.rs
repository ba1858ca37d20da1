//! Ports and Adapters Infrastructure
//!
//! The foundational types for the hexagonal (ports and adapters) layout used
//! across the sync bridge. Each collaborator the workflow depends on is
//! reached through a port trait defined in the domain crate: the host
//! platform's order data, the durable buyer/contact map, the activity store.
//! Adapters implement those traits against PostgreSQL, the real commerce
//! platform, or in-memory fakes for tests.
//!
//! ```rust,ignore
//! // In domain_sync/src/ports.rs
//! #[async_trait]
//! pub trait ContactStore: DomainPort {
//!     async fn get(&self, buyer: BuyerId) -> Result<Option<ContactId>, PortError>;
//! }
//!
//! // In infra_db - PostgreSQL adapter
//! impl ContactStore for PgContactStore { ... }
//!
//! // In test_utils - in-memory fake
//! impl ContactStore for InMemoryContactStore { ... }
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// A unified error type that all port implementations use, so error handling
/// is consistent across database adapters, platform adapters, and fakes.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so implementations are thread-safe
/// and usable in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Order", "1001");
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("Order"));
        assert!(error.to_string().contains("1001"));
    }

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::Timeout {
            operation: "append_entry".to_string(),
            duration_ms: 30000,
        };
        assert!(timeout.is_transient());

        let internal = PortError::internal("boom");
        assert!(!internal.is_transient());
    }
}
