//! # Catalog Actor
//!
//! Stand-in for the product catalog store. Products are added once and then only read.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Product, ProductId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates a new Catalog actor and its client. Product ids count up from 1.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    let counter = AtomicU64::new(1);
    ResourceActor::new(
        buffer_size,
        Box::new(move || ProductId(counter.fetch_add(1, Ordering::SeqCst))),
    )
}
