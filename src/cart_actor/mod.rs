//! # Cart Actor
//!
//! Stand-in for the storefront's cart contents store. The service layer only reads and
//! aggregates it; adding and editing lines goes through [`CartClient`](crate::clients::CartClient).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CartLine`]
//! - [`error`] - [`CartError`] type
//! - [`actions`] - [`CartAction`] for merging repeated adds into one line

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{CartLine, CartLineId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates a new Cart actor and its client. Line ids count up from 1.
pub fn new(buffer_size: usize) -> (ResourceActor<CartLine>, ResourceClient<CartLine>) {
    let counter = AtomicU64::new(1);
    ResourceActor::new(
        buffer_size,
        Box::new(move || CartLineId(counter.fetch_add(1, Ordering::SeqCst))),
    )
}
