//! # Order Store
//!
//! The order store is a [`ResourceActor`] over [`Order`]: a single task that owns the
//! ordered sequence of every order placed in this process. Orders are appended on
//! creation and never updated or removed, except by a full `clear` used to isolate tests.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type
//! - [`new()`] - Factory that wires the actor to an [`IdGenerator`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_services::clients::OrderClient;
//! use storefront_services::model::{OrderItem, OrderRequest};
//! use storefront_services::order_actor;
//! use storefront_services::services::ids::{IdGenerator, OrderNumbering};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32, Arc::new(IdGenerator::new()));
//!     tokio::spawn(actor.run(OrderNumbering::default()));
//!
//!     let orders = OrderClient::new(generic_client);
//!     let order = orders
//!         .create_order(OrderRequest::new(vec![OrderItem::new("A1", 1)], 49.99))
//!         .await?;
//!     assert!(order.order_number.starts_with("VT"));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;
use crate::services::ids::IdGenerator;
use std::sync::Arc;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize, ids: Arc<IdGenerator>) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, Box::new(move || ids.next_order_id()))
}
