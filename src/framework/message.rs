//! # Generic Messages
//!
//! Request types carried from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the standard resource lifecycle plus two collection-level requests:
///
/// - **Create**: allocate an ID and append a new entity built from [`ActorEntity::Create`].
/// - **Get**: first entity whose ID matches, if any.
/// - **List**: every entity in insertion order.
/// - **Update**: mutate an existing entity with [`ActorEntity::Update`].
/// - **Delete**: remove an entity.
/// - **Action**: run a custom [`ActorEntity::Action`] on an entity.
/// - **Clear**: drop every entity, returning how many were removed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}
