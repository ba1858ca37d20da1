//! Synchronization error types
//!
//! The remote invoicing service reports failures in two distinct ways that
//! callers must be able to tell apart: the transport failed (network error,
//! timeout), or the service answered but without minting an identifier
//! (malformed payload, business-rule rejection, auth failure). Both are
//! ordinary values here, never panics, and both are terminal for the run
//! that hit them.

use serde_json::Value;
use thiserror::Error;

use core_kernel::PortError;

/// Errors from a single call to the remote invoicing service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (network error, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The service responded without an `id` field
    ///
    /// Covers every non-success shape at this layer: error bodies, malformed
    /// JSON, auth failures, and 200s that carry no identifier.
    #[error("Remote rejection (status {status:?})")]
    Rejected { status: Option<u16>, body: Value },
}

impl ApiError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport {
            message: message.into(),
        }
    }

    /// Creates a Rejected error from a response status and body
    pub fn rejected(status: Option<u16>, body: Value) -> Self {
        ApiError::Rejected { status, body }
    }

    /// Returns true for transport-level failures
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// Renders the failure as a structured value for activity-log details
    pub fn detail_value(&self) -> Value {
        match self {
            ApiError::Transport { message } => serde_json::json!({ "error": message }),
            ApiError::Rejected { status, body } => serde_json::json!({
                "status": status,
                "response": body,
            }),
        }
    }
}

/// Errors from resolving a buyer to an external contact
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The remote contact-creation call failed
    #[error("Contact creation failed: {0}")]
    Api(#[from] ApiError),

    /// The durable buyer/contact map could not be read or written
    #[error("Contact persistence failed: {0}")]
    Persistence(#[from] PortError),
}

impl ResolutionError {
    /// Renders the failure as a structured value for activity-log details
    pub fn detail_value(&self) -> Value {
        match self {
            ResolutionError::Api(api) => api.detail_value(),
            ResolutionError::Persistence(err) => serde_json::json!({ "error": err.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_carries_response_body() {
        let error = ApiError::rejected(Some(422), json!({"detail": "invalid contact"}));
        assert!(!error.is_transport());

        let detail = error.detail_value();
        assert_eq!(detail["status"], json!(422));
        assert_eq!(detail["response"]["detail"], json!("invalid contact"));
    }

    #[test]
    fn test_transport_detail_is_error_message() {
        let error = ApiError::transport("connection refused");
        assert_eq!(error.detail_value(), json!({"error": "connection refused"}));
    }

    #[test]
    fn test_resolution_error_wraps_persistence() {
        let error = ResolutionError::from(PortError::connection("pool down"));
        assert!(matches!(error, ResolutionError::Persistence(_)));
        assert!(error.detail_value()["error"]
            .as_str()
            .unwrap()
            .contains("pool down"));
    }
}
