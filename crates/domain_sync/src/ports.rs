//! Synchronization ports
//!
//! Port traits for everything the workflow collaborates with. The host
//! platform's order data and the durable stores get database or platform
//! adapters in production and in-memory fakes in tests; the invoicing port
//! gets the REST adapter in [`crate::adapters::rest`].

use async_trait::async_trait;
use serde::Serialize;

use core_kernel::{BuyerId, ContactId, DomainPort, EntryId, InvoiceId, OrderId, PortError};

use crate::activity::{ActivityEntry, NewActivityEntry};
use crate::error::ApiError;
use crate::invoice::InvoicePayload;
use crate::order::{BuyerDetails, Order};

/// Durable append-only store for activity entries
#[async_trait]
pub trait ActivityStore: DomainPort {
    /// Appends one entry, returning its assigned id
    async fn append(&self, entry: NewActivityEntry) -> Result<EntryId, PortError>;

    /// Returns the most recent entries, newest first, bounded by `limit`
    async fn list_recent(&self, limit: u32) -> Result<Vec<ActivityEntry>, PortError>;
}

/// Durable buyer-to-contact map
///
/// One record per buyer, written once. Absence of a record is the sole
/// trigger for remote contact creation.
#[async_trait]
pub trait ContactStore: DomainPort {
    /// Looks up the cached contact id for a buyer
    async fn get(&self, buyer: BuyerId) -> Result<Option<ContactId>, PortError>;

    /// Persists the buyer-to-contact mapping (insert-only)
    async fn put(&self, buyer: BuyerId, contact: &ContactId) -> Result<(), PortError>;
}

/// Read access to the platform's order data
#[async_trait]
pub trait OrderSource: DomainPort {
    /// Loads an order by id; `None` if the id does not resolve to an order
    async fn load(&self, order: OrderId) -> Result<Option<Order>, PortError>;

    /// Appends a human-readable note to the order record
    async fn append_note(&self, order: OrderId, note: &str) -> Result<(), PortError>;
}

/// Contact-creation request fields sent to the remote service
///
/// `code` carries the platform buyer id as an external de-duplication hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub city: String,
    pub code: String,
    pub country: String,
    pub phone: String,
}

impl From<&BuyerDetails> for ContactFields {
    fn from(buyer: &BuyerDetails) -> Self {
        Self {
            name: buyer.name.clone(),
            email: buyer.email.clone(),
            city: buyer.city.clone(),
            code: buyer.buyer_id.to_string(),
            country: buyer.country.clone(),
            phone: buyer.phone.clone(),
        }
    }
}

/// Remote invoicing service contract
///
/// Both operations map to a single authenticated POST. Success is recognized
/// strictly by the presence of an identifier in the response; no retries are
/// performed at this layer.
#[async_trait]
pub trait InvoicingPort: DomainPort {
    /// Creates a billing contact, returning its external id
    async fn create_contact(&self, fields: &ContactFields) -> Result<ContactId, ApiError>;

    /// Creates a draft invoice, returning its external id
    async fn create_invoice(&self, payload: &InvoicePayload) -> Result<InvoiceId, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::BuyerId;

    #[test]
    fn test_contact_fields_carry_buyer_id_as_code() {
        let buyer = BuyerDetails {
            buyer_id: BuyerId::new(42),
            name: "J. Reyes".to_string(),
            email: "a@x.com".to_string(),
            phone: "+971".to_string(),
            city: "Dubai".to_string(),
            country: "AE".to_string(),
        };

        let fields = ContactFields::from(&buyer);
        assert_eq!(fields.code, "42");
        assert_eq!(fields.email, "a@x.com");
    }

    #[test]
    fn test_contact_fields_wire_shape() {
        let buyer = BuyerDetails {
            buyer_id: BuyerId::new(7),
            name: "N".to_string(),
            email: "e".to_string(),
            phone: "p".to_string(),
            city: "c".to_string(),
            country: "AE".to_string(),
        };

        let value = serde_json::to_value(ContactFields::from(&buyer)).unwrap();
        for key in ["name", "email", "city", "code", "country", "phone"] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
    }
}
