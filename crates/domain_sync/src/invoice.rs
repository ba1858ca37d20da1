//! Draft invoice payload
//!
//! Built once per workflow run and serialized straight into the remote
//! create-invoice call; nothing here is persisted locally. Field names match
//! the accounting service's wire format.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::ContactId;

use crate::config::SyncConfig;
use crate::order::Order;

/// Invoice lifecycle status on the remote service
///
/// Invoices are always created non-finalized; finalizing or sending them is
/// a separate action outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
}

/// One invoice line entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    /// Revenue account reference
    pub account: String,
    /// Item name as shown on the order
    pub description: String,
    /// Quantity, carried through unmodified
    pub quantity: i32,
    /// Line total, carried through unmodified and unrounded
    pub unit_amount: Decimal,
}

/// The transient create-invoice request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePayload {
    pub currency: String,
    pub language: String,
    pub status: InvoiceStatus,
    pub contact: ContactId,
    pub invoice_date: NaiveDate,
    pub invoice_due_date: NaiveDate,
    pub invoice_number: String,
    pub line_items: Vec<InvoiceLine>,
}

impl InvoicePayload {
    /// Builds the draft invoice mirroring an order's line items
    ///
    /// Issue date and due date are both the current date; the invoice number
    /// is the configured prefix followed by the order number.
    pub fn from_order(
        order: &Order,
        contact: &ContactId,
        config: &SyncConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            currency: config.currency.clone(),
            language: config.language.clone(),
            status: InvoiceStatus::Draft,
            contact: contact.clone(),
            invoice_date: today,
            invoice_due_date: today,
            invoice_number: config.invoice_number(&order.number),
            line_items: build_line_items(order, &config.revenue_account),
        }
    }
}

/// Maps order line items to invoice line entries
///
/// Quantity and line total pass through exactly as read from the order.
pub fn build_line_items(order: &Order, account: &str) -> Vec<InvoiceLine> {
    order
        .lines
        .iter()
        .map(|line| InvoiceLine {
            account: account.to_string(),
            description: line.name.clone(),
            quantity: line.quantity,
            unit_amount: line.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{BillingFields, OrderLine};
    use core_kernel::{BuyerId, OrderId};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn order_with_lines(lines: Vec<OrderLine>) -> Order {
        Order {
            id: OrderId::new(1001),
            number: "1001".to_string(),
            buyer_id: BuyerId::new(42),
            account: None,
            billing: BillingFields::default(),
            lines,
        }
    }

    #[test]
    fn test_payload_from_order() {
        let order = order_with_lines(vec![
            OrderLine {
                name: "Widget".to_string(),
                quantity: 1,
                total: dec!(50),
            },
            OrderLine {
                name: "Gadget".to_string(),
                quantity: 2,
                total: dec!(20),
            },
        ]);
        let config = SyncConfig::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let payload =
            InvoicePayload::from_order(&order, &ContactId::new("cnt_1"), &config, today);

        assert_eq!(payload.invoice_number, "WS-1001");
        assert_eq!(payload.status, InvoiceStatus::Draft);
        assert_eq!(payload.invoice_date, today);
        assert_eq!(payload.invoice_due_date, today);
        assert_eq!(payload.line_items.len(), 2);
        assert_eq!(payload.line_items[0].unit_amount, dec!(50));
        assert_eq!(payload.line_items[1].unit_amount, dec!(20));
    }

    #[test]
    fn test_wire_format() {
        let order = order_with_lines(vec![OrderLine {
            name: "Widget".to_string(),
            quantity: 1,
            total: dec!(12.34),
        }]);
        let config = SyncConfig {
            revenue_account: "acc_rev".to_string(),
            ..SyncConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let payload =
            InvoicePayload::from_order(&order, &ContactId::new("cnt_1"), &config, today);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["status"], "DRAFT");
        assert_eq!(value["contact"], "cnt_1");
        assert_eq!(value["invoice_date"], "2025-03-14");
        assert_eq!(value["invoice_due_date"], "2025-03-14");
        assert_eq!(value["line_items"][0]["account"], "acc_rev");
        assert_eq!(value["line_items"][0]["description"], "Widget");
    }

    proptest! {
        /// Line mapping preserves count, quantity, and amount exactly.
        #[test]
        fn prop_line_items_carried_unmodified(
            lines in proptest::collection::vec(
                (any::<String>(), 1..1000i32, 0i64..10_000_000i64, 0u32..3u32),
                0..20,
            )
        ) {
            let lines: Vec<OrderLine> = lines
                .into_iter()
                .map(|(name, quantity, mantissa, scale)| OrderLine {
                    name,
                    quantity,
                    total: Decimal::new(mantissa, scale),
                })
                .collect();
            let order = order_with_lines(lines.clone());

            let mapped = build_line_items(&order, "acc_rev");

            prop_assert_eq!(mapped.len(), lines.len());
            for (entry, line) in mapped.iter().zip(&lines) {
                prop_assert_eq!(entry.quantity, line.quantity);
                prop_assert_eq!(entry.unit_amount, line.total);
                prop_assert_eq!(&entry.description, &line.name);
            }
        }
    }
}
