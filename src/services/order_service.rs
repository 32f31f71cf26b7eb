//! Order operations exposed to the storefront.

use crate::clients::{ActorClient, OrderClient};
use crate::lifecycle::config::LatencyConfig;
use crate::model::{Order, OrderId, OrderRequest};
use crate::services::latency::simulate_latency;
use crate::services::{Envelope, ServiceError};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    latency: LatencyConfig,
}

impl OrderService {
    pub fn new(orders: OrderClient, latency: LatencyConfig) -> Self {
        Self { orders, latency }
    }

    /// Records a confirmed order. The payload is stored verbatim without validation.
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: OrderRequest) -> Envelope<Order> {
        simulate_latency(self.latency.create_order()).await;
        self.orders.create_order(request).await.into()
    }

    #[instrument(skip(self))]
    pub async fn get_order_by_id(&self, id: OrderId) -> Envelope<Order> {
        simulate_latency(self.latency.get_order()).await;
        let envelope: Envelope<Order> = self.orders.find_order(id).await.into();
        if let Some(error) = envelope.error() {
            warn!(%id, %error, "Order lookup failed");
        }
        envelope
    }

    /// Lookup by an untrusted key, as received from a URL segment or form field.
    ///
    /// The key must be exactly the decimal id. Anything else is "Order not found".
    #[instrument(skip(self))]
    pub async fn get_order_by_key(&self, key: &str) -> Envelope<Order> {
        match key.parse::<OrderId>() {
            Ok(id) => self.get_order_by_id(id).await,
            Err(e) => {
                simulate_latency(self.latency.get_order()).await;
                debug!(error = %e, "Key is not an order id");
                Envelope::Failure(ServiceError::NotFound("Order"))
            }
        }
    }

    /// Every order in creation order.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Envelope<Vec<Order>> {
        simulate_latency(self.latency.list_orders()).await;
        self.orders.list().await.into()
    }

    /// Forgets every order. Returns how many were dropped.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Envelope<usize> {
        self.orders.reset().await.into()
    }
}
