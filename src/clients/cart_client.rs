//! # Cart Client
//!
//! High-level API for the cart contents store. Wraps a `ResourceClient<CartLine>`.

use crate::cart_actor::CartError;
use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CartLine, CartLineCreate, CartLineId, CartLineUpdate, Product};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>) -> Self {
        Self { inner }
    }

    /// Adds `quantity` units of `product`.
    ///
    /// A product already in the cart gets its existing line incremented; otherwise a new
    /// line is created with the product's current price. The cart store resolves which one
    /// inside a single request, so concurrent adds of one product still share a line.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: &Product, quantity: u32) -> Result<CartLine, CartError> {
        debug!(quantity, "Sending request");
        self.inner
            .create(CartLineCreate::for_product(product, quantity))
            .await
            .map_err(Self::map_error)
    }

    /// Sets a line's quantity. Zero removes the line and returns `None`.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        id: CartLineId,
        quantity: u32,
    ) -> Result<Option<CartLine>, CartError> {
        if quantity == 0 {
            self.delete(id).await?;
            return Ok(None);
        }
        self.inner
            .update(id, CartLineUpdate { quantity })
            .await
            .map(Some)
            .map_err(Self::map_error)
    }

    /// Empties the cart. Returns how many lines were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        self.inner.clear().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartLine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, CartError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor;
    use crate::framework::mock::{create_mock_client, expect_create};
    use crate::model::{ProductCreate, ProductId};

    fn dress() -> Product {
        Product::new(ProductId(1), ProductCreate::new("Wrap Dress", "Dresses", 89.0))
    }

    fn spawn_cart() -> CartClient {
        let (actor, client) = cart_actor::new(8);
        tokio::spawn(actor.run(()));
        CartClient::new(client)
    }

    #[tokio::test]
    async fn test_add_item_is_a_single_create() {
        let (client, mut receiver) = create_mock_client::<CartLine>(10);
        let cart = CartClient::new(client);
        let product = dress();

        let task = tokio::spawn(async move { cart.add_item(&product, 2).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.product_id, ProductId(1));
        assert_eq!(params.unit_price, 89.0);
        assert_eq!(params.quantity, 2);

        let stored = CartLine {
            id: CartLineId(5),
            product_id: params.product_id,
            name: params.name,
            unit_price: params.unit_price,
            quantity: 3,
        };
        responder.send(Ok(stored.clone())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), stored);
    }

    #[tokio::test]
    async fn test_add_same_product_twice_keeps_one_line() {
        let cart = spawn_cart();
        let product = dress();

        cart.add_item(&product, 2).await.unwrap();
        let line = cart.add_item(&product, 3).await.unwrap();

        assert_eq!(line.quantity, 5);
        assert_eq!(cart.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_of_one_product_share_a_line() {
        let cart = spawn_cart();
        let product = dress();

        let (first, second) = tokio::join!(cart.add_item(&product, 2), cart.add_item(&product, 3));
        first.unwrap();
        second.unwrap();

        let lines = cart.list().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected_when_merging() {
        let cart = spawn_cart();
        let product = dress();
        cart.add_item(&product, 2).await.unwrap();

        let err = cart.add_item(&product, 0).await.unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
        assert_eq!(cart.list().await.unwrap()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected_on_add() {
        let cart = spawn_cart();
        let err = cart.add_item(&dress(), 0).await.unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
    }

    #[tokio::test]
    async fn test_set_quantity_zero_removes_line() {
        let cart = spawn_cart();
        let line = cart.add_item(&dress(), 2).await.unwrap();

        let updated = cart.set_quantity(line.id, 4).await.unwrap();
        assert_eq!(updated.map(|l| l.quantity), Some(4));

        assert_eq!(cart.set_quantity(line.id, 0).await.unwrap(), None);
        assert!(cart.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_line_is_not_found() {
        let cart = spawn_cart();
        let err = cart.set_quantity(CartLineId(99), 1).await.unwrap_err();
        assert_eq!(err, CartError::NotFound("line_99".into()));
    }
}
