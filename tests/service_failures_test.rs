//! Failure paths: declined payments and stores that are no longer running.

use std::sync::Arc;
use storefront_services::clients::{CartClient, CatalogClient, OrderClient};
use storefront_services::lifecycle::config::LatencyConfig;
use storefront_services::lifecycle::{ServiceConfig, StorefrontSystem};
use storefront_services::model::{OrderId, OrderRequest, PaymentRequest};
use storefront_services::services::ids::IdGenerator;
use storefront_services::services::{
    CartService, CatalogService, Envelope, FixedSample, OrderService, PaymentService,
    ServiceError, SimulatedBackend, StorefrontApi,
};
use storefront_services::{cart_actor, catalog_actor, order_actor};

/// A backend whose stores were never started. Every store call fails to send.
fn backend_without_stores() -> SimulatedBackend {
    let ids = Arc::new(IdGenerator::new());
    let (order_store, orders) = order_actor::new(4, ids.clone());
    let (cart_store, cart) = cart_actor::new(4);
    let (catalog_store, catalog) = catalog_actor::new(4);
    drop((order_store, cart_store, catalog_store));

    let latency = LatencyConfig::none();
    SimulatedBackend {
        orders: OrderService::new(OrderClient::new(orders), latency.clone()),
        payments: PaymentService::new(Arc::new(FixedSample(0.5)), ids, 0.10, latency.payment()),
        cart: CartService::new(CartClient::new(cart), latency.clone()),
        catalog: CatalogService::new(CatalogClient::new(catalog), latency),
    }
}

fn assert_unavailable<T: std::fmt::Debug>(envelope: Envelope<T>) {
    match envelope {
        Envelope::Failure(error @ ServiceError::Unavailable { .. }) => {
            assert!(!error.to_string().is_empty());
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stopped_stores_yield_failure_envelopes() {
    let backend = backend_without_stores();

    assert_unavailable(backend.create_order(OrderRequest::default()).await);
    assert_unavailable(backend.get_order_by_id(OrderId(1)).await);
    assert_unavailable(backend.get_cart_item_count().await);
    assert_unavailable(backend.get_categories().await);

    // The gateway does not depend on any store.
    assert!(backend
        .process_payment(PaymentRequest::new(10.0, "card"))
        .await
        .is_success());
}

#[tokio::test]
async fn test_forced_decline() {
    let system =
        StorefrontSystem::with_decider(&ServiceConfig::instant(), Arc::new(FixedSample(0.0)));

    for _ in 0..5 {
        let envelope = system
            .backend
            .process_payment(PaymentRequest::new(49.99, "card"))
            .await;
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({"success": false, "error": "Payment failed. Please try again."})
        );
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_order_keys_are_not_found() {
    let system = StorefrontSystem::new(&ServiceConfig::instant());

    for key in ["", "abc", "12abc", "0x1f"] {
        let envelope = system.backend.orders.get_order_by_key(key).await;
        assert_eq!(envelope, Envelope::Failure(ServiceError::NotFound("Order")));
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reset_forgets_orders() {
    let system = StorefrontSystem::new(&ServiceConfig::instant());
    let order = system
        .backend
        .create_order(OrderRequest::default())
        .await
        .into_result()
        .unwrap();

    assert_eq!(system.backend.orders.reset().await, Envelope::Success(1));
    assert_eq!(
        system.backend.get_order_by_id(order.id).await,
        Envelope::Failure(ServiceError::NotFound("Order"))
    );

    system.shutdown().await.unwrap();
}
