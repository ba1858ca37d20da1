//! REST adapter for the remote invoicing service
//!
//! Issues authenticated JSON POST requests against the two fixed resource
//! endpoints (contacts, invoices) and recognizes success strictly by the
//! presence of an `id` field in the parsed response body. Anything else
//! (an error body, malformed JSON, a 200 without an identifier) is a
//! [`ApiError::Rejected`] value, and transport failures become
//! [`ApiError::Transport`]; nothing is thrown past this layer.
//!
//! Every call is logged to the activity log (URL, outcome, response body or
//! error) before the result is returned. Retry policy, if any, belongs to
//! the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use core_kernel::{ContactId, CoreError, DomainPort, InvoiceId};

use crate::activity::{ActivityAction, ActivityLog};
use crate::error::ApiError;
use crate::invoice::InvoicePayload;
use crate::ports::{ContactFields, InvoicingPort};

/// Connection settings for the remote invoicing service
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Contact-creation resource URL
    pub contacts_url: String,
    /// Invoice-creation resource URL
    pub invoices_url: String,
    /// Static API credential sent on every request
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            contacts_url: "https://api.wafeq.com/v1/contacts/".to_string(),
            invoices_url: "https://api.wafeq.com/v1/invoices/".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Thin client for the two remote resource endpoints
pub struct RestInvoicingClient {
    http: reqwest::Client,
    config: RestClientConfig,
    log: ActivityLog,
}

impl RestInvoicingClient {
    /// Creates a client with a bounded per-request timeout
    pub fn new(config: RestClientConfig, log: ActivityLog) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| CoreError::configuration(format!("http client: {err}")))?;

        Ok(Self { http, config, log })
    }

    /// POSTs a JSON body and extracts the `id` field from the response
    async fn post_for_id<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<String, ApiError> {
        let sent = self
            .http
            .post(url)
            .header("Authorization", format!("Api-Key {}", self.config.api_key))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                let message = err.to_string();
                self.log
                    .record(
                        ActivityAction::ApiRequestFailed,
                        json!({ "url": url, "error": message }),
                    )
                    .await;
                return Err(ApiError::transport(message));
            }
        };

        let status = response.status().as_u16();
        let body: Value = match response.json().await {
            Ok(value) => value,
            Err(err) => {
                let message = format!("invalid response body: {err}");
                self.log
                    .record(
                        ActivityAction::ApiRequestFailed,
                        json!({ "url": url, "status": status, "error": message }),
                    )
                    .await;
                return Err(ApiError::rejected(Some(status), Value::String(message)));
            }
        };

        self.log
            .record(
                ActivityAction::ApiRequestCompleted,
                json!({ "url": url, "status": status, "response": body }),
            )
            .await;

        match extract_id(&body) {
            Some(id) => Ok(id),
            None => Err(ApiError::rejected(Some(status), body)),
        }
    }
}

/// Pulls the identifier out of a response body, if present
fn extract_id(body: &Value) -> Option<String> {
    match body.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

impl DomainPort for RestInvoicingClient {}

#[async_trait]
impl InvoicingPort for RestInvoicingClient {
    async fn create_contact(&self, fields: &ContactFields) -> Result<ContactId, ApiError> {
        self.post_for_id(&self.config.contacts_url, fields)
            .await
            .map(ContactId::new)
    }

    async fn create_invoice(&self, payload: &InvoicePayload) -> Result<InvoiceId, ApiError> {
        self.post_for_id(&self.config.invoices_url, payload)
            .await
            .map(InvoiceId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_defaults() {
        let config = RestClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.contacts_url.ends_with("/contacts/"));
        assert!(config.invoices_url.ends_with("/invoices/"));
    }

    #[test]
    fn test_extract_id_accepts_string_and_number() {
        assert_eq!(extract_id(&json!({"id": "cnt_1"})), Some("cnt_1".to_string()));
        assert_eq!(extract_id(&json!({"id": 99})), Some("99".to_string()));
    }

    #[test]
    fn test_extract_id_rejects_other_shapes() {
        assert_eq!(extract_id(&json!({"error": "bad request"})), None);
        assert_eq!(extract_id(&json!({"id": null})), None);
        assert_eq!(extract_id(&json!([1, 2, 3])), None);
    }
}
