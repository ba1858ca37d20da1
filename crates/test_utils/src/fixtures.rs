//! Pre-built test fixtures

use rust_decimal_macros::dec;

use domain_sync::{Order, SyncConfig};

use crate::builders::OrderBuilder;

/// Order `#1001` for buyer 42 with two line items (qty 1 @ 50, qty 2 @ 20)
pub fn completed_order() -> Order {
    OrderBuilder::new()
        .with_line("Widget", 1, dec!(50))
        .with_line("Gadget", 2, dec!(20))
        .build()
}

/// Sync configuration used across scenario tests
pub fn sync_config() -> SyncConfig {
    SyncConfig {
        revenue_account: "acc_revenue".to_string(),
        ..SyncConfig::default()
    }
}
