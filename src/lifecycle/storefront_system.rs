use crate::cart_actor;
use crate::catalog_actor;
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::lifecycle::config::ServiceConfig;
use crate::order_actor;
use crate::services::ids::IdGenerator;
use crate::services::{
    CartService, CatalogService, OrderService, PaymentDecider, PaymentService, SeededDecider,
    SimulatedBackend,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("store task failed during shutdown: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// Owns the running stores and the backend built on top of them.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting the order, cart and catalog stores and stopping them
/// - **Dependency Wiring**: one [`IdGenerator`] shared by orders and payments, the
///   configured order numbering injected into the order store
/// - **Service Construction**: the [`SimulatedBackend`] handed to the storefront
///
/// # Example
///
/// ```rust
/// use storefront_services::lifecycle::{ServiceConfig, StorefrontSystem};
/// use storefront_services::services::StorefrontApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = StorefrontSystem::new(&ServiceConfig::instant());
///     assert_eq!(system.backend.get_cart_item_count().await.into_result()?, 0);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct StorefrontSystem {
    pub backend: SimulatedBackend,
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts every store. Payments use an RNG seeded from `config.payment.seed` when set.
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_decider(config, Arc::new(SeededDecider::from_config(&config.payment)))
    }

    /// Starts every store with an explicit payment decision source.
    pub fn with_decider(config: &ServiceConfig, decider: Arc<dyn PaymentDecider>) -> Self {
        let buffer_size = config.actors.buffer_size;
        let ids = Arc::new(IdGenerator::new());

        // 1. Create stores
        let (order_actor, order_client) = order_actor::new(buffer_size, ids.clone());
        let (cart_actor, cart_client) = cart_actor::new(buffer_size);
        let (catalog_actor, catalog_client) = catalog_actor::new(buffer_size);

        // 2. Start them with their context
        let handles = vec![
            tokio::spawn(order_actor.run(config.orders.numbering())),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(catalog_actor.run(())),
        ];

        // 3. Build the services
        let latency = config.latency.clone();
        let backend = SimulatedBackend {
            orders: OrderService::new(OrderClient::new(order_client), latency.clone()),
            payments: PaymentService::new(
                decider,
                ids,
                config.payment.failure_rate,
                latency.payment(),
            ),
            cart: CartService::new(CartClient::new(cart_client), latency.clone()),
            catalog: CatalogService::new(CatalogClient::new(catalog_client), latency),
        };

        info!(
            buffer_size,
            failure_rate = config.payment.failure_rate,
            "Storefront backend started"
        );
        Self { backend, handles }
    }

    /// Stops every store and waits for its task to finish.
    ///
    /// Dropping the backend closes the store channels; each store drains and exits.
    /// Clones of the backend still held elsewhere keep their store alive, so drop them
    /// first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down storefront backend...");
        drop(self.backend);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
