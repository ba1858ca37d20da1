//! Request handlers

pub mod activity;
pub mod health;
