//! Synchronization configuration
//!
//! One explicitly constructed configuration struct is passed into each
//! component at construction. There is no shared global credential or table
//! handle; tests build a `SyncConfig` next to their fakes.

use serde::Deserialize;

/// Invoice and actor defaults for the synchronization workflow
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Invoice currency code
    pub currency: String,
    /// Invoice language code
    pub language: String,
    /// Prefix prepended to the order number to form the invoice number
    pub invoice_number_prefix: String,
    /// Revenue account reference applied to every invoice line
    pub revenue_account: String,
    /// Actor identity stamped on activity entries
    pub actor: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            currency: "AED".to_string(),
            language: "en".to_string(),
            invoice_number_prefix: "WS-".to_string(),
            revenue_account: "set-your-revenue-account".to_string(),
            actor: "admin".to_string(),
        }
    }
}

impl SyncConfig {
    /// Derives the invoice number for an order number
    pub fn invoice_number(&self, order_number: &str) -> String {
        format!("{}{}", self.invoice_number_prefix, order_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_derivation() {
        let config = SyncConfig::default();
        assert_eq!(config.invoice_number("1001"), "WS-1001");
    }

    #[test]
    fn test_defaults() {
        let config = SyncConfig::default();
        assert_eq!(config.currency, "AED");
        assert_eq!(config.language, "en");
        assert_eq!(config.actor, "admin");
    }
}
