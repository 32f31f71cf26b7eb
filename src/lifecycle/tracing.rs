//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! The compact format hides module paths; the stores tag their events with
//! `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the service layer
//! RUST_LOG=storefront_services::services=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, placing an order and paying for it reads:
//!
//! ```text
//! INFO Created entity_type="Order" id=1760781234567 size=1
//! INFO create_order: Order stored order_id=1760781234567 order_number="VT234567"
//! INFO process_payment: Payment approved transaction_id="txn_1760781234568"
//! ```
//!
//! A declined payment is logged at `warn` with the drawn sample, and every failed store
//! request is logged at `warn` by the store itself with the id and the error.

/// Installs the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
