//! Demo checkout against the simulated backend.
//!
//! Stocks a small catalog, fills the cart, places an order, pays for it and reads the
//! order back, logging each envelope as JSON.

use serde::Serialize;
use storefront_services::lifecycle::{setup_tracing, ServiceConfig, StorefrontSystem};
use storefront_services::model::{
    OrderItem, OrderRequest, PaymentRequest, ProductCreate, ShippingInfo,
};
use storefront_services::services::{Envelope, StorefrontApi};
use tracing::{info, warn, Instrument};

fn log_envelope<T: Serialize>(operation: &str, envelope: &Envelope<T>) {
    match serde_json::to_string(envelope) {
        Ok(json) if envelope.is_success() => info!(operation, %json, "Envelope"),
        Ok(json) => warn!(operation, %json, "Envelope"),
        Err(e) => warn!(operation, error = %e, "Envelope not serializable"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServiceConfig::load()?;
    info!(?config, "Starting storefront backend");
    let system = StorefrontSystem::new(&config);
    let backend = system.backend.clone();

    let span = tracing::info_span!("catalog_setup");
    async {
        for params in [
            ProductCreate::new("Wrap Dress", "Dresses", 89.0)
                .description("Midi wrap dress in soft viscose")
                .colors(["Black", "Sage"])
                .featured(),
            ProductCreate::new("Slip Dress", "Dresses", 69.0).description("Bias-cut satin"),
            ProductCreate::new("Wool Coat", "Outerwear", 199.0).colors(["Camel"]),
        ] {
            log_envelope("add_product", &backend.catalog.add_product(params).await);
        }
        log_envelope("get_categories", &backend.get_categories().await);
    }
    .instrument(span)
    .await;

    let products = backend.catalog.get_featured_products().await.into_result()?;
    let span = tracing::info_span!("cart");
    async {
        for product in &products {
            log_envelope("add_to_cart", &backend.cart.add_to_cart(product, 2).await);
        }
        log_envelope("get_cart_item_count", &backend.get_cart_item_count().await);
    }
    .instrument(span)
    .await;

    let total = backend.cart.get_cart_total().await.into_result()?;
    let items = products
        .iter()
        .map(|p| OrderItem {
            sku: p.id.to_string(),
            qty: 2,
            price: Some(p.price),
        })
        .collect();
    let request = OrderRequest::new(items, total).with_shipping(ShippingInfo {
        full_name: "Ada Lovelace".into(),
        address: "12 St James's Square".into(),
        city: "London".into(),
        postal_code: "SW1Y 4JH".into(),
        country: "GB".into(),
    });

    let span = tracing::info_span!("checkout");
    let order = async {
        let created = backend.create_order(request).await;
        log_envelope("create_order", &created);
        created.into_result()
    }
    .instrument(span)
    .await?;

    let payment = backend
        .process_payment(PaymentRequest::new(total, "card").for_order(order.id))
        .await;
    log_envelope("process_payment", &payment);
    if payment.is_success() {
        log_envelope("clear_cart", &backend.cart.clear_cart().await);
    }

    log_envelope("get_order_by_id", &backend.get_order_by_id(order.id).await);

    drop(backend);
    system.shutdown().await?;
    info!("Demo complete");
    Ok(())
}
