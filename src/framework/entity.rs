//! # ActorEntity Trait
//!
//! The contract every stored resource (Order, CartLine, Product) implements so it can be
//! owned by a generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types pin down the identifier, the creation and update payloads, the custom
//! actions and the error type, so an `OrderRequest` can never be sent to the cart actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::merges_with`] / [`ActorEntity::on_merge`]
//!
//! The lifecycle hooks default to doing nothing (`Ok(())`) and `merges_with` defaults to
//! `false`, so every `Create` appends a new entity. Entities that never change
//! (orders) use an uninhabited `Update`/`Action` type so those requests cannot be built.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may call other actors. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Increment`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message. A `CartError` is the union of
    /// everything the cart can reject.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier assigned at creation.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the allocated ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is appended to the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether a `Create` with these params should be folded into this stored entity
    /// instead of appending a new one. The actor asks the stored entities in order and
    /// merges into the first that answers `true`.
    fn merges_with(&self, _params: &Self::Create) -> bool {
        false
    }

    /// Folds a `Create` payload into this entity. Only called when `merges_with` returned
    /// `true`; the lookup and the merge run inside one request.
    async fn on_merge(
        &mut self,
        _params: Self::Create,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
