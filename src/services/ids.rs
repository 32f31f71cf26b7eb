//! # Identifier Generator
//!
//! Order and transaction identifiers are derived from the wall clock: every value is at
//! least the number of milliseconds since the Unix epoch. A shared floor makes them
//! strictly increasing inside one process, so two calls in the same millisecond still
//! get distinct values.

use crate::model::OrderId;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Time-based, strictly increasing identifier source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `max(now_ms, previous + 1)`.
    pub fn next_id(&self) -> u64 {
        let now = now_millis();
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(previous) | Err(previous) => previous,
        };
        now.max(previous + 1)
    }

    pub fn next_order_id(&self) -> OrderId {
        OrderId(self.next_id())
    }

    /// Gateway-style transaction reference, e.g. `txn_1760781234567`.
    pub fn next_transaction_id(&self) -> String {
        format!("txn_{}", self.next_id())
    }
}

/// Formats the human-facing order reference: a fixed tag followed by the last
/// `digits` decimal digits of the order id, zero-padded when the id is shorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNumbering {
    pub prefix: String,
    pub digits: usize,
}

impl Default for OrderNumbering {
    fn default() -> Self {
        Self {
            prefix: "VT".to_string(),
            digits: 6,
        }
    }
}

impl OrderNumbering {
    pub fn format(&self, id: OrderId) -> String {
        let decimal = id.0.to_string();
        let suffix = &decimal[decimal.len().saturating_sub(self.digits)..];
        format!("{}{:0>width$}", self.prefix, suffix, width = self.digits)
    }
}
