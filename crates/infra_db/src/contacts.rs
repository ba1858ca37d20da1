//! PostgreSQL contact store
//!
//! Durable buyer-to-contact map. Writes are insert-only: a concurrent or
//! repeated put for the same buyer leaves the first stored mapping in place.

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{BuyerId, ContactId, DomainPort, PortError};
use domain_sync::ports::ContactStore;

use crate::error::DatabaseError;

/// Contact store backed by PostgreSQL
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgContactStore {}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn get(&self, buyer: BuyerId) -> Result<Option<ContactId>, PortError> {
        let contact: Option<String> = sqlx::query_scalar(
            r#"
            SELECT contact_id
            FROM sync_contacts
            WHERE buyer_id = $1
            "#,
        )
        .bind(buyer.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(contact.map(ContactId::new))
    }

    async fn put(&self, buyer: BuyerId, contact: &ContactId) -> Result<(), PortError> {
        // ON CONFLICT DO NOTHING keeps the mapping insert-only.
        sqlx::query(
            r#"
            INSERT INTO sync_contacts (buyer_id, contact_id)
            VALUES ($1, $2)
            ON CONFLICT (buyer_id) DO NOTHING
            "#,
        )
        .bind(buyer.value())
        .bind(contact.as_str())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(())
    }
}
