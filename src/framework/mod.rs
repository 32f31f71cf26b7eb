//! Generic single-writer actor framework for in-memory resource stores.
//!
//! This module provides the building blocks every store in the crate is made of:
//! the order store, the cart and the product catalog are all a [`ResourceActor`]
//! over a different [`ActorEntity`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns an ordered collection of entities
//! - [`ResourceClient`] - Typed handle for sending requests to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::{IdAllocator, ResourceActor};
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
