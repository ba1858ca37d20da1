//! Order model and buyer extraction
//!
//! Orders are created and owned entirely by the host commerce platform; this
//! system reads one order per triggering event and, on success, appends a
//! single note back to it. The shapes here mirror what the platform exposes,
//! not what the accounting service expects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BuyerId, OrderId};

/// A completed order as read from the commerce platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Platform order identifier
    pub id: OrderId,
    /// Human-readable order number (not always equal to the id)
    pub number: String,
    /// Buyer identifier; assigned by the platform for every order
    pub buyer_id: BuyerId,
    /// Authenticated account linked to the order, if any
    pub account: Option<BuyerAccount>,
    /// Billing fields as entered at checkout
    pub billing: BillingFields,
    /// Ordered line items
    pub lines: Vec<OrderLine>,
}

/// Stored details of an authenticated buyer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerAccount {
    pub display_name: String,
    pub email: String,
}

/// Billing fields entered on the order itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
}

/// One ordered line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item name as shown on the order
    pub name: String,
    /// Ordered quantity
    pub quantity: i32,
    /// Line total, carried through unmodified
    pub total: Decimal,
}

/// Buyer identity fields used for contact creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerDetails {
    pub buyer_id: BuyerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
}

impl Order {
    /// Extracts the buyer identity for contact resolution
    ///
    /// A linked account's stored name and email take precedence over the
    /// billing fields entered on the order; phone, city, and country always
    /// come from the billing fields.
    pub fn buyer_details(&self) -> BuyerDetails {
        let (name, email) = match &self.account {
            Some(account) => (account.display_name.clone(), account.email.clone()),
            None => (
                format!("{} {}", self.billing.first_name, self.billing.last_name),
                self.billing.email.clone(),
            ),
        };

        BuyerDetails {
            buyer_id: self.buyer_id,
            name,
            email,
            phone: self.billing.phone.clone(),
            city: self.billing.city.clone(),
            country: self.billing.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn billing() -> BillingFields {
        BillingFields {
            first_name: "Jordan".to_string(),
            last_name: "Reyes".to_string(),
            email: "jordan@checkout.test".to_string(),
            phone: "+971-50-0000000".to_string(),
            city: "Dubai".to_string(),
            country: "AE".to_string(),
        }
    }

    #[test]
    fn test_account_details_preferred_over_billing() {
        let order = Order {
            id: OrderId::new(1),
            number: "1".to_string(),
            buyer_id: BuyerId::new(42),
            account: Some(BuyerAccount {
                display_name: "J. Reyes".to_string(),
                email: "jordan@account.test".to_string(),
            }),
            billing: billing(),
            lines: vec![],
        };

        let buyer = order.buyer_details();
        assert_eq!(buyer.name, "J. Reyes");
        assert_eq!(buyer.email, "jordan@account.test");
        // Contact fields without an account-side counterpart still come
        // from billing.
        assert_eq!(buyer.city, "Dubai");
        assert_eq!(buyer.phone, "+971-50-0000000");
    }

    #[test]
    fn test_guest_order_falls_back_to_billing() {
        let order = Order {
            id: OrderId::new(2),
            number: "2".to_string(),
            buyer_id: BuyerId::new(0),
            account: None,
            billing: billing(),
            lines: vec![OrderLine {
                name: "Widget".to_string(),
                quantity: 3,
                total: dec!(29.97),
            }],
        };

        let buyer = order.buyer_details();
        assert_eq!(buyer.name, "Jordan Reyes");
        assert_eq!(buyer.email, "jordan@checkout.test");
    }
}
