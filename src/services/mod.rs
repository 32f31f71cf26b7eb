//! # Service Layer
//!
//! The operations the storefront calls. Each one awaits a simulated network delay,
//! talks to a store, and resolves to an [`Envelope`]. Nothing here returns `Err` or
//! panics on a bad input: every outcome, including a store that has gone away, comes
//! back as a failure envelope.
//!
//! ## Structure
//!
//! - [`StorefrontApi`] - the five operations the storefront depends on
//! - [`SimulatedBackend`] - in-memory implementation of [`StorefrontApi`], plus the
//!   wider order, cart and catalog services through its fields
//! - [`ids`] - time-based identifiers and order numbers
//! - [`latency`] - the delay every operation awaits
//! - [`payment`] - the gateway stand-in and its pluggable decision source

pub mod cart_service;
pub mod catalog_service;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod latency;
pub mod order_service;
pub mod payment;

pub use cart_service::CartService;
pub use catalog_service::CatalogService;
pub use envelope::Envelope;
pub use error::ServiceError;
pub use order_service::OrderService;
pub use payment::{FixedSample, PaymentDecider, PaymentService, SeededDecider};

use crate::model::{Order, OrderId, OrderRequest, PaymentOutcome, PaymentRequest};
use async_trait::async_trait;

/// The backend surface the storefront is written against.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Records a confirmed order from the checkout payload.
    async fn create_order(&self, order: OrderRequest) -> Envelope<Order>;

    /// The order with this id, or "Order not found".
    async fn get_order_by_id(&self, id: OrderId) -> Envelope<Order>;

    /// One simulated gateway attempt.
    async fn process_payment(&self, payment: PaymentRequest) -> Envelope<PaymentOutcome>;

    /// Units currently in the cart.
    async fn get_cart_item_count(&self) -> Envelope<u32>;

    /// Distinct catalog categories.
    async fn get_categories(&self) -> Envelope<Vec<String>>;
}

/// In-process backend built from the order, payment, cart and catalog services.
#[derive(Clone)]
pub struct SimulatedBackend {
    pub orders: OrderService,
    pub payments: PaymentService,
    pub cart: CartService,
    pub catalog: CatalogService,
}

#[async_trait]
impl StorefrontApi for SimulatedBackend {
    async fn create_order(&self, order: OrderRequest) -> Envelope<Order> {
        self.orders.create_order(order).await
    }

    async fn get_order_by_id(&self, id: OrderId) -> Envelope<Order> {
        self.orders.get_order_by_id(id).await
    }

    async fn process_payment(&self, payment: PaymentRequest) -> Envelope<PaymentOutcome> {
        self.payments.process_payment(payment).await
    }

    async fn get_cart_item_count(&self) -> Envelope<u32> {
        self.cart.get_cart_item_count().await
    }

    async fn get_categories(&self) -> Envelope<Vec<String>> {
        self.catalog.get_categories().await
    }
}
