//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer that owns an in-memory
//! store. Every read and write to the store is a message processed sequentially in one
//! Tokio task, so no caller can observe a half-applied change and no lock is needed.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Produces the identifier for the next created entity.
pub type IdAllocator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Clients only hold the sender.
///
/// The store is a `Vec` kept in insertion order. Lookups are a linear scan that returns
/// the first entity with a matching ID, and `List` returns entities in the order they were
/// created.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use storefront_services::framework::ResourceActor;
/// use storefront_services::model::{Product, ProductCreate, ProductId};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Product>::new(10, Box::new(|| ProductId(7)));
///     tokio::spawn(actor.run(()));
///
///     let product = client
///         .create(ProductCreate::new("Linen Shirt", "Tops", 59.0))
///         .await
///         .unwrap();
///     assert_eq!(product.id, ProductId(7));
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: IdAllocator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Called once per successful `Create` to allocate the new entity's ID.
    pub fn new(buffer_size: usize, next_id: IdAllocator<T::Id>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "storefront_services::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    if let Some(idx) = self.store.iter().position(|item| item.merges_with(&params)) {
                        let item = &mut self.store[idx];
                        let id = item.id().clone();
                        match item.on_merge(params, &context).await {
                            Ok(()) => {
                                info!(entity_type, %id, "Merged");
                                let _ = respond_to.send(Ok(item.clone()));
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Merge failed");
                                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            }
                        }
                        continue;
                    }

                    let id = (self.next_id)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == &id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(idx) = self.position(&id) {
                        let item = &mut self.store[idx];
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(idx) = self.position(&id) {
                        if let Err(e) = self.store[idx].on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(idx);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(idx) = self.position(&id) {
                        let result = self.store[idx]
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    struct NoteUpdate {
        text: String,
    }

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    #[derive(Debug, thiserror::Error)]
    enum NoteError {
        #[error("empty note")]
        Empty,
        #[error("already pinned")]
        AlreadyPinned,
    }

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Action = NoteAction;
        type ActionResult = bool;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
            if params.text.is_empty() {
                return Err(NoteError::Empty);
            }
            Ok(Self {
                id,
                text: params.text,
                pinned: false,
            })
        }

        async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), NoteError> {
            self.text = update.text;
            Ok(())
        }

        async fn handle_action(&mut self, action: NoteAction, _ctx: &()) -> Result<bool, NoteError> {
            match action {
                NoteAction::Pin if self.pinned => Err(NoteError::AlreadyPinned),
                NoteAction::Pin => {
                    self.pinned = true;
                    Ok(true)
                }
            }
        }
    }

    fn spawn_notes() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicU32::new(1));
        let (actor, client) =
            ResourceActor::<Note>::new(8, Box::new(move || counter.fetch_add(1, Ordering::SeqCst)));
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let client = spawn_notes();

        let first = client.create(NoteCreate { text: "a".into() }).await.unwrap();
        let second = client.create(NoteCreate { text: "b".into() }).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(client.perform_action(1, NoteAction::Pin).await.unwrap());
        assert!(client.perform_action(1, NoteAction::Pin).await.is_err());

        let updated = client.update(2, NoteUpdate { text: "c".into() }).await.unwrap();
        assert_eq!(updated.text, "c");

        client.delete(1).await.unwrap();
        assert!(client.get(1).await.unwrap().is_none());

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "c");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let client = spawn_notes();
        for text in ["x", "y", "z"] {
            client.create(NoteCreate { text: text.into() }).await.unwrap();
        }
        let texts: Vec<String> = client.list().await.unwrap().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["x", "y", "z"]);
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_store_slot() {
        let client = spawn_notes();
        assert!(client.create(NoteCreate { text: String::new() }).await.is_err());
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_entity_is_not_found() {
        let client = spawn_notes();
        let err = client.update(42, NoteUpdate { text: "x".into() }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "42"));
        assert!(matches!(client.delete(42).await, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let client = spawn_notes();
        client.create(NoteCreate { text: "a".into() }).await.unwrap();
        client.create(NoteCreate { text: "b".into() }).await.unwrap();
        assert_eq!(client.clear().await.unwrap(), 2);
        assert!(client.list().await.unwrap().is_empty());
    }
}
