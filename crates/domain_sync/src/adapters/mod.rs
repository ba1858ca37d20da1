//! Adapters for the remote invoicing service

pub mod rest;

pub use rest::{RestClientConfig, RestInvoicingClient};
