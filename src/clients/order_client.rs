//! # Order Client
//!
//! High-level API for the order store. Wraps a `ResourceClient<Order>`.

use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderId, OrderRequest};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends a new confirmed order and returns it as stored.
    #[instrument(skip(self, request), fields(items = request.items.len(), total = request.total))]
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");
        let order = self.inner.create(request).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, order_number = %order.order_number, "Order stored");
        Ok(order)
    }

    /// First order with the given id, or [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn find_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Drops every stored order. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<usize, OrderError> {
        self.inner.clear().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, OrderError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, expect_get, MockClient};
    use crate::model::OrderItem;
    use crate::services::ids::{IdGenerator, OrderNumbering};

    #[tokio::test]
    async fn test_create_order_forwards_request_verbatim() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move {
            orders
                .create_order(OrderRequest::new(vec![OrderItem::new("A1", 1)], 49.99))
                .await
        });

        let (request, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(request.items, vec![OrderItem::new("A1", 1)]);
        assert_eq!(request.total, 49.99);

        let mut stored = Order::new(OrderId(1760000000001), request);
        stored.order_number = "VT000001".into();
        responder.send(Ok(stored.clone())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), stored);
    }

    #[tokio::test]
    async fn test_find_order_missing_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.find_order(OrderId(7)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, OrderId(7));
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::NotFound("7".into())));
    }

    #[tokio::test]
    async fn test_closed_store_is_communication_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1)).return_err(FrameworkError::ActorClosed);

        let orders = OrderClient::new(mock.client());
        let err = orders.find_order(OrderId(1)).await.unwrap_err();
        assert_eq!(err, OrderError::ActorCommunicationError("Actor closed".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_orders_cannot_be_deleted() {
        let (actor, client) = crate::order_actor::new(8, std::sync::Arc::new(IdGenerator::new()));
        tokio::spawn(actor.run(OrderNumbering::default()));
        let orders = OrderClient::new(client);

        let order = orders
            .create_order(OrderRequest::new(vec![OrderItem::new("A1", 1)], 49.99))
            .await
            .unwrap();

        let err = orders.delete(order.id).await.unwrap_err();
        assert_eq!(err, OrderError::Rejected("orders are append-only".into()));
        assert_eq!(orders.list().await.unwrap(), vec![order.clone()]);
        assert_eq!(orders.find_order(order.id).await.unwrap(), order);

        assert_eq!(orders.reset().await.unwrap(), 1);
        assert!(orders.list().await.unwrap().is_empty());
    }
}
