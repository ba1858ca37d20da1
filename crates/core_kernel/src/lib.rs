//! Core Kernel - Foundational types and utilities for the sync bridge
//!
//! This crate provides the fundamental building blocks used across all
//! domain and infrastructure modules:
//! - Strongly-typed identifiers for orders, buyers, and external resources
//! - The clock capability passed explicitly to time-dependent components
//! - Common error types and the port infrastructure

pub mod clock;
pub mod error;
pub mod identifiers;
pub mod ports;

pub use clock::{Clock, SystemClock};
pub use error::CoreError;
pub use identifiers::{BuyerId, ContactId, EntryId, InvoiceId, OrderId};
pub use ports::{DomainPort, PortError};
