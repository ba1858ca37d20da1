//! Tests for the REST invoicing adapter
//!
//! Runs the adapter against a local stub endpoint to pin down the strict
//! success rule (an `id` in the body, nothing else) and the call logging.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use core_kernel::Clock;
use domain_sync::adapters::{RestClientConfig, RestInvoicingClient};
use domain_sync::{ActivityLog, ApiError, ContactFields, InvoicePayload, InvoicingPort, SyncConfig};
use test_utils::{completed_order, FixedClock, InMemoryActivityStore};

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Value,
    seen_auth: Arc<Mutex<Vec<String>>>,
}

async fn stub_handler(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(_request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(auth) = headers.get("authorization") {
        state
            .seen_auth
            .lock()
            .unwrap()
            .push(auth.to_str().unwrap_or_default().to_string());
    }
    (state.status, Json(state.body.clone()))
}

/// Serves one canned response on an ephemeral port, returning its URL
async fn spawn_stub(state: StubState) -> String {
    let app = Router::new().route("/", post(stub_handler)).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn stub_state(status: StatusCode, body: Value) -> StubState {
    StubState {
        status,
        body,
        seen_auth: Arc::new(Mutex::new(Vec::new())),
    }
}

fn client_for(url: &str, store: Arc<InMemoryActivityStore>) -> RestInvoicingClient {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::test_default());
    let log = ActivityLog::new(store, clock, "admin");
    RestInvoicingClient::new(
        RestClientConfig {
            contacts_url: url.to_string(),
            invoices_url: url.to_string(),
            api_key: "secret".to_string(),
            timeout_secs: 5,
        },
        log,
    )
    .unwrap()
}

fn contact_fields() -> ContactFields {
    ContactFields::from(&completed_order().buyer_details())
}

#[tokio::test]
async fn test_create_contact_success_and_auth_header() {
    let state = stub_state(StatusCode::OK, json!({"id": "cnt_81", "name": "Alex"}));
    let seen_auth = state.seen_auth.clone();
    let url = spawn_stub(state).await;
    let store = Arc::new(InMemoryActivityStore::new());
    let client = client_for(&url, store.clone());

    let contact = client.create_contact(&contact_fields()).await.unwrap();

    assert_eq!(contact.as_str(), "cnt_81");
    assert_eq!(
        seen_auth.lock().unwrap().as_slice(),
        ["Api-Key secret".to_string()]
    );
    assert_eq!(store.actions(), vec!["api_request_completed".to_string()]);
}

#[tokio::test]
async fn test_ok_response_without_id_is_rejection() {
    let state = stub_state(StatusCode::OK, json!({"name": "no identifier here"}));
    let url = spawn_stub(state).await;
    let store = Arc::new(InMemoryActivityStore::new());
    let client = client_for(&url, store.clone());

    let error = client.create_contact(&contact_fields()).await.unwrap_err();

    match error {
        ApiError::Rejected { status, body } => {
            assert_eq!(status, Some(200));
            assert_eq!(body["name"], json!("no identifier here"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    // The call itself is still logged as completed.
    assert_eq!(store.actions(), vec!["api_request_completed".to_string()]);
}

#[tokio::test]
async fn test_error_status_is_rejection_with_body() {
    let state = stub_state(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"detail": "currency not enabled"}),
    );
    let url = spawn_stub(state).await;
    let store = Arc::new(InMemoryActivityStore::new());
    let client = client_for(&url, store.clone());

    let payload = InvoicePayload::from_order(
        &completed_order(),
        &core_kernel::ContactId::new("cnt_1"),
        &SyncConfig::default(),
        FixedClock::test_default().today_utc(),
    );
    let error = client.create_invoice(&payload).await.unwrap_err();

    match error {
        ApiError::Rejected { status, .. } => assert_eq!(status, Some(422)),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_numeric_id_is_accepted() {
    let state = stub_state(StatusCode::CREATED, json!({"id": 99}));
    let url = spawn_stub(state).await;
    let store = Arc::new(InMemoryActivityStore::new());
    let client = client_for(&url, store);

    let contact = client.create_contact(&contact_fields()).await.unwrap();
    assert_eq!(contact.as_str(), "99");
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = Arc::new(InMemoryActivityStore::new());
    let client = client_for(&format!("http://{addr}/"), store.clone());

    let error = client.create_contact(&contact_fields()).await.unwrap_err();

    assert!(error.is_transport());
    assert_eq!(store.actions(), vec!["api_request_failed".to_string()]);
}
