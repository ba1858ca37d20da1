//! Order-completed synchronization workflow
//!
//! Forward-only state machine over a single run:
//! started → order validated → buyer collected → contact resolved →
//! line items built → invoice submitted → completed, failing terminally at
//! the first error with no compensating rollback. Invoice creation has no
//! side effect on the order until it succeeds, so log-and-stop is safe.
//!
//! The entry point never returns an error: a failed sync must not break the
//! surrounding order-completion flow, and failures are observable through
//! the activity log and the returned outcome only.

use std::sync::Arc;

use serde_json::json;
use tracing::Instrument;
use uuid::Uuid;

use core_kernel::{Clock, ContactId, InvoiceId, OrderId};

use crate::activity::{ActivityAction, ActivityLog};
use crate::config::SyncConfig;
use crate::contact::ContactResolver;
use crate::invoice::InvoicePayload;
use crate::ports::{InvoicingPort, OrderSource};

/// The stage at which a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The order id did not resolve to a loadable order
    OrderValidation,
    /// The buyer could not be resolved to an external contact
    ContactResolution,
    /// The remote invoice-creation call failed
    InvoiceCreation,
}

/// Terminal result of one workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        contact_id: ContactId,
        invoice_id: InvoiceId,
    },
    Failed {
        stage: FailureStage,
    },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}

/// Orchestrates the end-to-end order-completed synchronization
///
/// All collaborators and the configuration are injected at construction;
/// the platform adapter that receives completion events only needs to call
/// [`handle_order_completed`](Self::handle_order_completed).
pub struct OrderToInvoiceWorkflow {
    orders: Arc<dyn OrderSource>,
    resolver: ContactResolver,
    client: Arc<dyn InvoicingPort>,
    log: ActivityLog,
    clock: Arc<dyn Clock>,
    config: SyncConfig,
}

impl OrderToInvoiceWorkflow {
    pub fn new(
        orders: Arc<dyn OrderSource>,
        resolver: ContactResolver,
        client: Arc<dyn InvoicingPort>,
        log: ActivityLog,
        clock: Arc<dyn Clock>,
        config: SyncConfig,
    ) -> Self {
        Self {
            orders,
            resolver,
            client,
            log,
            clock,
            config,
        }
    }

    /// Runs the synchronization for one completed order
    ///
    /// Each remote call blocks this run until it returns or times out; a
    /// hung call affects this run only. No step is retried automatically;
    /// every stop point is logged with the attempted action and the failure
    /// payload so the run can be replayed manually.
    pub async fn handle_order_completed(&self, order_id: OrderId) -> RunOutcome {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("order_to_invoice", %order_id, %run_id);
        self.run(order_id).instrument(span).await
    }

    async fn run(&self, order_id: OrderId) -> RunOutcome {
        self.log
            .record(
                ActivityAction::OrderProcessingStarted,
                json!({ "order_id": order_id }),
            )
            .await;

        let order = match self.orders.load(order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                self.log
                    .record(
                        ActivityAction::OrderProcessingFailed,
                        json!({ "order_id": order_id, "reason": "invalid order id" }),
                    )
                    .await;
                return RunOutcome::Failed {
                    stage: FailureStage::OrderValidation,
                };
            }
            Err(err) => {
                self.log
                    .record(
                        ActivityAction::OrderProcessingFailed,
                        json!({ "order_id": order_id, "reason": err.to_string() }),
                    )
                    .await;
                return RunOutcome::Failed {
                    stage: FailureStage::OrderValidation,
                };
            }
        };

        let buyer = order.buyer_details();
        self.log
            .record(
                ActivityAction::CustomerDetailsCollected,
                json!({
                    "order_id": order_id,
                    "buyer_id": buyer.buyer_id,
                    "email": buyer.email,
                }),
            )
            .await;

        let contact_id = match self.resolver.resolve(&buyer).await {
            Ok(contact_id) => contact_id,
            Err(err) => {
                self.log
                    .record(
                        ActivityAction::ContactCreationFailed,
                        json!({
                            "email": buyer.email,
                            "response": err.detail_value(),
                        }),
                    )
                    .await;
                return RunOutcome::Failed {
                    stage: FailureStage::ContactResolution,
                };
            }
        };

        let payload =
            InvoicePayload::from_order(&order, &contact_id, &self.config, self.clock.today_utc());

        self.log
            .record(
                ActivityAction::CreatingInvoice,
                json!({
                    "order_id": order_id,
                    "contact_id": contact_id,
                    "invoice_number": payload.invoice_number,
                }),
            )
            .await;

        let invoice_id = match self.client.create_invoice(&payload).await {
            Ok(invoice_id) => invoice_id,
            Err(err) => {
                self.log
                    .record(
                        ActivityAction::InvoiceCreationFailed,
                        json!({
                            "order_id": order_id,
                            "response": err.detail_value(),
                        }),
                    )
                    .await;
                return RunOutcome::Failed {
                    stage: FailureStage::InvoiceCreation,
                };
            }
        };

        self.log
            .record(
                ActivityAction::InvoiceCreated,
                json!({ "invoice_id": invoice_id, "order_id": order_id }),
            )
            .await;

        // The run is already complete; a note failure is diagnostic only.
        let note = format!("Accounting invoice created successfully. Invoice ID: {invoice_id}");
        if let Err(err) = self.orders.append_note(order_id, &note).await {
            tracing::warn!(%order_id, error = %err, "failed to append invoice note to order");
        }

        RunOutcome::Completed {
            contact_id,
            invoice_id,
        }
    }
}
