//! Tests for strongly-typed identifiers

use core_kernel::{BuyerId, ContactId, EntryId, InvoiceId, OrderId};

#[test]
fn test_ids_are_distinct_types() {
    // Compile-time property: the same raw value produces distinct types.
    let order = OrderId::new(7);
    let buyer = BuyerId::new(7);
    assert_eq!(order.value(), buyer.value());
}

#[test]
fn test_entry_id_ordering() {
    // Activity entries are ordered by insertion id.
    let earlier = EntryId::new(1);
    let later = EntryId::new(2);
    assert!(earlier < later);
}

#[test]
fn test_external_ids_preserve_opaque_values() {
    let contact = ContactId::new("CON-2024-00042");
    let invoice = InvoiceId::new("d41d8cd9");

    assert_eq!(contact.to_string(), "CON-2024-00042");
    assert_eq!(invoice.as_str(), "d41d8cd9");
}

#[test]
fn test_json_shape_matches_wire_format() {
    // Numeric ids serialize as JSON numbers, external ids as strings,
    // matching the platform and accounting-service payloads.
    let order = OrderId::new(1001);
    assert_eq!(serde_json::json!(order), serde_json::json!(1001));

    let contact = ContactId::new("cnt_1");
    assert_eq!(serde_json::json!(contact), serde_json::json!("cnt_1"));
}
