//! Idempotent buyer-to-contact resolution
//!
//! Guarantees at most one remote contact-creation call per buyer for as long
//! as the cached mapping survives: a cache hit short-circuits without any
//! remote traffic, and a freshly created contact is persisted before its id
//! is handed to the invoicing step.

use std::sync::Arc;

use serde_json::json;

use core_kernel::{ContactId, PortError};

use crate::activity::{ActivityAction, ActivityLog};
use crate::error::ResolutionError;
use crate::order::BuyerDetails;
use crate::ports::{ContactFields, ContactStore, InvoicingPort};

/// Resolves a buyer identity to an external billing contact
pub struct ContactResolver {
    store: Arc<dyn ContactStore>,
    client: Arc<dyn InvoicingPort>,
    log: ActivityLog,
}

impl ContactResolver {
    pub fn new(
        store: Arc<dyn ContactStore>,
        client: Arc<dyn InvoicingPort>,
        log: ActivityLog,
    ) -> Self {
        Self { store, client, log }
    }

    /// Returns the external contact id for a buyer, creating one remotely
    /// if none is cached
    ///
    /// The mapping is persisted before the id is returned, so a crash
    /// between the remote call and the local write is the one window where
    /// a later retry could create a duplicate contact. The cache check and
    /// the cache write are not guarded against each other: two concurrent
    /// first orders by the same buyer can both miss and create two remote
    /// contacts.
    pub async fn resolve(&self, buyer: &BuyerDetails) -> Result<ContactId, ResolutionError> {
        if let Some(existing) = self.store.get(buyer.buyer_id).await? {
            tracing::debug!(buyer_id = %buyer.buyer_id, contact_id = %existing, "contact cache hit");
            return Ok(existing);
        }

        let fields = ContactFields::from(buyer);
        let contact = self.client.create_contact(&fields).await?;

        self.persist(buyer, &contact).await?;

        self.log
            .record(
                ActivityAction::ContactCreated,
                json!({
                    "contact_id": contact,
                    "email": buyer.email,
                }),
            )
            .await;

        Ok(contact)
    }

    async fn persist(&self, buyer: &BuyerDetails, contact: &ContactId) -> Result<(), PortError> {
        self.store.put(buyer.buyer_id, contact).await
    }
}
