//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each wrapper turns framework errors into the store's own error type and exposes
//! domain-specific methods (`create_order`, `add_item`, `add_product`, ...).

pub mod actor_client;
pub mod cart_client;
pub mod catalog_client;
pub mod order_client;

pub use actor_client::*;
pub use cart_client::*;
pub use catalog_client::*;
pub use order_client::*;
