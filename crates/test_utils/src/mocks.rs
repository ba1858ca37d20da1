//! In-memory port implementations
//!
//! Fakes for every port the workflow depends on, so component and scenario
//! tests run without a database, a network, or the host platform.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use core_kernel::{BuyerId, Clock, ContactId, DomainPort, EntryId, InvoiceId, OrderId, PortError};
use domain_sync::{
    ActivityEntry, ActivityStore, ApiError, ContactFields, ContactStore, InvoicePayload,
    InvoicingPort, NewActivityEntry, Order, OrderSource,
};

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A stable instant used across the test suite
    pub fn test_default() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Append-only activity store backed by a Vec
#[derive(Default)]
pub struct InMemoryActivityStore {
    entries: Mutex<Vec<ActivityEntry>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    failing_reads: AtomicBool,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent appends fail, to exercise the swallow-and-continue
    /// contract of the activity log
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes subsequent reads fail, to exercise the degraded read path
    pub fn set_failing_reads(&self, failing: bool) {
        self.failing_reads.store(failing, Ordering::SeqCst);
    }

    /// All entries in insertion order
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Action tags in insertion order
    pub fn actions(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.action.clone())
            .collect()
    }
}

impl DomainPort for InMemoryActivityStore {}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn append(&self, entry: NewActivityEntry) -> Result<EntryId, PortError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PortError::internal("activity store unavailable"));
        }

        let id = EntryId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.entries.lock().unwrap().push(ActivityEntry {
            id,
            timestamp: entry.timestamp,
            actor: entry.actor,
            action: entry.action,
            details: entry.details,
        });
        Ok(id)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<ActivityEntry>, PortError> {
        if self.failing_reads.load(Ordering::SeqCst) {
            return Err(PortError::internal("activity store unavailable"));
        }

        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// Buyer-to-contact map backed by a HashMap
#[derive(Default)]
pub struct InMemoryContactStore {
    map: Mutex<HashMap<BuyerId, ContactId>>,
    failing_puts: AtomicBool,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent writes fail, to exercise the persistence branch of
    /// contact resolution
    pub fn set_failing_puts(&self, failing: bool) {
        self.failing_puts.store(failing, Ordering::SeqCst);
    }

    /// Seeds a cached mapping
    pub fn insert(&self, buyer: BuyerId, contact: ContactId) {
        self.map.lock().unwrap().insert(buyer, contact);
    }

    pub fn len(&self) -> usize {
        self.map.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainPort for InMemoryContactStore {}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn get(&self, buyer: BuyerId) -> Result<Option<ContactId>, PortError> {
        Ok(self.map.lock().unwrap().get(&buyer).cloned())
    }

    async fn put(&self, buyer: BuyerId, contact: &ContactId) -> Result<(), PortError> {
        if self.failing_puts.load(Ordering::SeqCst) {
            return Err(PortError::connection("contact store unavailable"));
        }

        // Insert-only, like the durable table: an existing record wins.
        self.map
            .lock()
            .unwrap()
            .entry(buyer)
            .or_insert_with(|| contact.clone());
        Ok(())
    }
}

/// Order source backed by a fixed set of orders
#[derive(Default)]
pub struct StaticOrderSource {
    orders: Mutex<HashMap<OrderId, Order>>,
    notes: Mutex<Vec<(OrderId, String)>>,
}

impl StaticOrderSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(self, order: Order) -> Self {
        self.orders.lock().unwrap().insert(order.id, order);
        self
    }

    /// Notes appended to orders, in append order
    pub fn notes(&self) -> Vec<(OrderId, String)> {
        self.notes.lock().unwrap().clone()
    }
}

impl DomainPort for StaticOrderSource {}

#[async_trait]
impl OrderSource for StaticOrderSource {
    async fn load(&self, order: OrderId) -> Result<Option<Order>, PortError> {
        Ok(self.orders.lock().unwrap().get(&order).cloned())
    }

    async fn append_note(&self, order: OrderId, note: &str) -> Result<(), PortError> {
        self.notes.lock().unwrap().push((order, note.to_string()));
        Ok(())
    }
}

/// Invoicing client driven by scripted responses
///
/// Responses are consumed in FIFO order; when the queue is empty the call
/// succeeds with a generated identifier, so happy-path tests only script
/// the failures they care about. Every request is recorded for inspection.
#[derive(Default)]
pub struct ScriptedInvoicingClient {
    contact_responses: Mutex<VecDeque<Result<ContactId, ApiError>>>,
    invoice_responses: Mutex<VecDeque<Result<InvoiceId, ApiError>>>,
    contact_calls: Mutex<Vec<ContactFields>>,
    invoice_calls: Mutex<Vec<InvoicePayload>>,
    auto_id: AtomicI64,
}

impl ScriptedInvoicingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_contact_response(&self, response: Result<ContactId, ApiError>) {
        self.contact_responses.lock().unwrap().push_back(response);
    }

    pub fn push_invoice_response(&self, response: Result<InvoiceId, ApiError>) {
        self.invoice_responses.lock().unwrap().push_back(response);
    }

    /// Contact-creation requests received, in call order
    pub fn contact_calls(&self) -> Vec<ContactFields> {
        self.contact_calls.lock().unwrap().clone()
    }

    /// Invoice-creation requests received, in call order
    pub fn invoice_calls(&self) -> Vec<InvoicePayload> {
        self.invoice_calls.lock().unwrap().clone()
    }

    fn next_auto(&self) -> i64 {
        self.auto_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl DomainPort for ScriptedInvoicingClient {}

#[async_trait]
impl InvoicingPort for ScriptedInvoicingClient {
    async fn create_contact(&self, fields: &ContactFields) -> Result<ContactId, ApiError> {
        self.contact_calls.lock().unwrap().push(fields.clone());
        match self.contact_responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(ContactId::new(format!("cnt_auto_{}", self.next_auto()))),
        }
    }

    async fn create_invoice(&self, payload: &InvoicePayload) -> Result<InvoiceId, ApiError> {
        self.invoice_calls.lock().unwrap().push(payload.clone());
        match self.invoice_responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(InvoiceId::new(format!("inv_auto_{}", self.next_auto()))),
        }
    }
}
