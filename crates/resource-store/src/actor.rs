//! # ResourceActor
//!
//! The server half of the store: owns the rows of one record type and processes
//! [`ResourceRequest`]s sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that stores a collection of rows.
///
/// **Concurrency Model**:
/// Each actor processes its own messages one at a time, so the `store` needs no
/// `Mutex`. Two racing `delete_many` calls for the same row are serialized here: the
/// first removes it, the second matches nothing and reports `0`.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// # Operations
///
/// * **Create**: assigns the next id, calls `T::from_create_params`, then
///   `on_create`, then inserts.
/// * **Get**: clone of the row, or `None`.
/// * **FindMany**: clones of all matching rows, ordered by insertion.
/// * **DeleteMany**: runs `on_delete` on every matching row; if all succeed, removes
///   them and returns the count. If any hook fails, nothing is removed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "inventory_actions::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            self.insertion_order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindMany { filter, respond_to } => {
                    let items: Vec<T> = self
                        .insertion_order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, found = items.len(), "FindMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::DeleteMany { filter, respond_to } => {
                    debug!(entity_type, ?filter, "DeleteMany");
                    let matched: Vec<T::Id> = self
                        .insertion_order
                        .iter()
                        .filter(|id| self.store.get(*id).is_some_and(|item| item.matches(&filter)))
                        .cloned()
                        .collect();

                    let mut hook_error = None;
                    for id in &matched {
                        if let Some(item) = self.store.get(id) {
                            if let Err(e) = item.on_delete(&context).await {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                hook_error = Some(e);
                                break;
                            }
                        }
                    }
                    if let Some(e) = hook_error {
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    for id in &matched {
                        self.store.remove(id);
                    }
                    self.insertion_order.retain(|id| self.store.contains_key(id));
                    info!(entity_type, removed = matched.len(), size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(matched.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
