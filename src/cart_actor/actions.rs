//! Custom actions for the Cart actor.
//!
//! These run against a single [`CartLine`](crate::model::CartLine) through
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for cart lines.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds units to an existing line, used when the same product is added twice.
    ///
    /// # Errors
    /// Fails if the resulting quantity would overflow.
    Increment(u32),
}
