//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use rust_decimal::Decimal;

use core_kernel::{BuyerId, OrderId};
use domain_sync::order::{BillingFields, BuyerAccount, Order, OrderLine};

/// Builder for test orders
pub struct OrderBuilder {
    id: OrderId,
    number: String,
    buyer_id: BuyerId,
    account: Option<BuyerAccount>,
    billing: BillingFields,
    lines: Vec<OrderLine>,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: OrderId::new(1001),
            number: "1001".to_string(),
            buyer_id: BuyerId::new(42),
            account: None,
            billing: BillingFields {
                first_name: "Alex".to_string(),
                last_name: "Nasser".to_string(),
                email: "a@x.com".to_string(),
                phone: "+971-50-1234567".to_string(),
                city: "Dubai".to_string(),
                country: "AE".to_string(),
            },
            lines: Vec::new(),
        }
    }

    /// Sets the order id and matching order number
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = OrderId::new(id);
        self.number = id.to_string();
        self
    }

    /// Sets the human-readable order number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the buyer id
    pub fn with_buyer_id(mut self, buyer_id: i64) -> Self {
        self.buyer_id = BuyerId::new(buyer_id);
        self
    }

    /// Links an authenticated account with stored name and email
    pub fn with_account(
        mut self,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.account = Some(BuyerAccount {
            display_name: display_name.into(),
            email: email.into(),
        });
        self
    }

    /// Sets the billing email
    pub fn with_billing_email(mut self, email: impl Into<String>) -> Self {
        self.billing.email = email.into();
        self
    }

    /// Appends a line item
    pub fn with_line(mut self, name: impl Into<String>, quantity: i32, total: Decimal) -> Self {
        self.lines.push(OrderLine {
            name: name.into(),
            quantity,
            total,
        });
        self
    }

    /// Builds the order
    pub fn build(self) -> Order {
        Order {
            id: self.id,
            number: self.number,
            buyer_id: self.buyer_id,
            account: self.account,
            billing: self.billing,
            lines: self.lines,
        }
    }
}
