//! Clock capability
//!
//! Components that stamp timestamps or derive dates receive a clock
//! explicitly at construction instead of reading ambient time. Production
//! code wires [`SystemClock`]; tests substitute a fixed clock to make
//! timestamps and invoice dates deterministic.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current UTC time
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in UTC
    fn today_utc(&self) -> NaiveDate {
        self.now_utc().date_naive()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
