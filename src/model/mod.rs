//! Pure data structures (DTOs) for the storefront.
//!
//! [`Order`], [`CartLine`] and [`Product`] implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait in their actor modules.
//! [`PaymentRequest`] and [`PaymentOutcome`] are never stored.

pub mod cart;
pub mod order;
pub mod payment;
pub mod product;

pub use cart::*;
pub use order::*;
pub use payment::*;
pub use product::*;
