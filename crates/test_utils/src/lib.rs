//! Test Utilities Crate
//!
//! Shared test infrastructure for the sync bridge test suite.
//!
//! # Modules
//!
//! - `mocks`: in-memory port implementations and a fixed clock
//! - `builders`: builder patterns for test data construction
//! - `fixtures`: pre-built orders and configurations
//! - `assertions`: custom assertion helpers for activity sequences

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod mocks;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;
