//! Order-to-invoice synchronization domain
//!
//! When the host commerce platform marks an order as completed, this crate
//! makes sure a matching billing contact exists in the external accounting
//! service, creates a draft invoice mirroring the order's line items, and
//! records every step in a durable activity log.
//!
//! # Components
//!
//! - [`activity`]: append-only activity log service and its entry types
//! - [`contact`]: idempotent buyer-to-contact resolution
//! - [`invoice`]: draft invoice payload built from order line items
//! - [`workflow`]: the forward-only order-completed state machine
//! - [`ports`]: traits for the collaborators (order source, contact map,
//!   activity store, remote invoicing service)
//! - [`adapters`]: the REST adapter for the remote invoicing service
//!
//! All collaborators are injected at construction; nothing reads ambient
//! globals, so every component can be exercised against in-memory fakes.

pub mod activity;
pub mod adapters;
pub mod config;
pub mod contact;
pub mod error;
pub mod invoice;
pub mod order;
pub mod ports;
pub mod workflow;

pub use activity::{ActivityAction, ActivityEntry, ActivityLog, NewActivityEntry};
pub use config::SyncConfig;
pub use contact::ContactResolver;
pub use error::{ApiError, ResolutionError};
pub use invoice::{InvoiceLine, InvoicePayload, InvoiceStatus};
pub use order::{BuyerAccount, BuyerDetails, Order, OrderLine};
pub use ports::{ActivityStore, ContactFields, ContactStore, InvoicingPort, OrderSource};
pub use workflow::{FailureStage, OrderToInvoiceWorkflow, RunOutcome};
