//! Cart reads and writes. The cart itself lives in the cart store; this service only
//! aggregates and forwards.

use crate::clients::{ActorClient, CartClient};
use crate::lifecycle::config::LatencyConfig;
use crate::model::{CartLine, CartLineId, Product};
use crate::services::latency::simulate_latency;
use crate::services::Envelope;
use tracing::instrument;

#[derive(Clone)]
pub struct CartService {
    cart: CartClient,
    latency: LatencyConfig,
}

impl CartService {
    pub fn new(cart: CartClient, latency: LatencyConfig) -> Self {
        Self { cart, latency }
    }

    /// Total units across all lines. Zero for an empty cart.
    #[instrument(skip(self))]
    pub async fn get_cart_item_count(&self) -> Envelope<u32> {
        simulate_latency(self.latency.cart_read()).await;
        Envelope::from(self.cart.list().await).map(|lines| {
            lines
                .iter()
                .fold(0u32, |count, line| count.saturating_add(line.quantity))
        })
    }

    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Envelope<Vec<CartLine>> {
        simulate_latency(self.latency.cart_read()).await;
        self.cart.list().await.into()
    }

    /// Sum of unit price times quantity over every line.
    #[instrument(skip(self))]
    pub async fn get_cart_total(&self) -> Envelope<f64> {
        simulate_latency(self.latency.cart_read()).await;
        Envelope::from(self.cart.list().await)
            .map(|lines| lines.iter().map(CartLine::line_total).sum())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: &Product, quantity: u32) -> Envelope<CartLine> {
        simulate_latency(self.latency.cart_write()).await;
        self.cart.add_item(product, quantity).await.into()
    }

    /// Sets a line's quantity. `Success(None)` means the line was removed.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: CartLineId, quantity: u32) -> Envelope<Option<CartLine>> {
        simulate_latency(self.latency.cart_write()).await;
        self.cart.set_quantity(id, quantity).await.into()
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: CartLineId) -> Envelope<()> {
        simulate_latency(self.latency.cart_write()).await;
        self.cart.delete(id).await.into()
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Envelope<usize> {
        simulate_latency(self.latency.cart_write()).await;
        self.cart.clear().await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{ProductCreate, ProductId};
    use crate::services::ServiceError;

    fn spawn_service() -> CartService {
        let (actor, client) = cart_actor::new(8);
        tokio::spawn(actor.run(()));
        CartService::new(CartClient::new(client), LatencyConfig::none())
    }

    fn product(id: u64, price: f64) -> Product {
        Product::new(ProductId(id), ProductCreate::new(format!("Item {id}"), "Tops", price))
    }

    #[tokio::test]
    async fn test_count_sums_quantities() {
        let service = spawn_service();
        assert_eq!(service.get_cart_item_count().await, Envelope::Success(0));

        service.add_to_cart(&product(1, 10.0), 2).await.into_result().unwrap();
        service.add_to_cart(&product(2, 5.5), 3).await.into_result().unwrap();

        assert_eq!(service.get_cart_item_count().await, Envelope::Success(5));
        assert_eq!(service.get_cart_total().await, Envelope::Success(36.5));
    }

    #[tokio::test]
    async fn test_update_remove_and_clear() {
        let service = spawn_service();
        let first = service.add_to_cart(&product(1, 10.0), 1).await.into_result().unwrap();
        let second = service.add_to_cart(&product(2, 20.0), 1).await.into_result().unwrap();

        let updated = service.update_quantity(first.id, 4).await.into_result().unwrap();
        assert_eq!(updated.map(|l| l.quantity), Some(4));

        assert!(service.remove_from_cart(second.id).await.is_success());
        assert_eq!(
            service.remove_from_cart(second.id).await,
            Envelope::Failure(ServiceError::NotFound("Cart item"))
        );

        assert_eq!(service.clear_cart().await, Envelope::Success(1));
        assert_eq!(service.get_cart().await, Envelope::Success(vec![]));
    }

    #[tokio::test]
    async fn test_invalid_quantity_is_rejected() {
        let service = spawn_service();
        let envelope = service.add_to_cart(&product(1, 10.0), 0).await;
        assert_eq!(envelope.error().map(ServiceError::code), Some("rejected"));
    }

    #[tokio::test]
    async fn test_unreachable_cart_is_unavailable() {
        let mut mock = MockClient::<CartLine>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);

        let service = CartService::new(CartClient::new(mock.client()), LatencyConfig::none());
        let envelope = service.get_cart_item_count().await;
        assert_eq!(envelope.error().map(ServiceError::code), Some("unavailable"));
        mock.verify();
    }
}
