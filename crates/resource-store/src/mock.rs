//! # Mock Store & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running store. Use it to test code that
//! sits *around* a store: request handlers, validation pipelines, error mapping.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real rows |
//! | **Use Case** | Logic *around* the client | The store itself, or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Two styles
//!
//! - **Fluent**: queue responses with `expect_*(...).return_ok(...)`, run the code under
//!   test, then call [`MockClient::verify`].
//! - **Inspecting**: [`create_mock_client`] gives you the raw receiver; the
//!   [`expect_create`], [`expect_get`], [`expect_find_many`] and [`expect_delete_many`]
//!   helpers pull the next request so you can assert on its payload or filter before
//!   answering it. Asserting that *no* request was sent is a `try_recv()` on the receiver.
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use resource_store::mock::MockClient;
//! use resource_store::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteFilter;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = NoteCreate; type Filter = NoteFilter;
//!     type Context = (); type Error = NoteError;
//!     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn matches(&self, _: &NoteFilter) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a store that went away
//!     mock.expect_create().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.create(NoteCreate).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued response for the next request of the matching kind.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    FindMany {
        response: Result<Vec<T>, FrameworkError>,
    },
    DeleteMany {
        response: Result<usize, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_create().return_ok(ProductId(1));
/// mock.expect_delete_many().return_ok(0);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindMany { respond_to, .. },
                        Some(Expectation::FindMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::DeleteMany { respond_to, .. },
                        Some(Expectation::DeleteMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `find_many` operation.
    pub fn expect_find_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::FindMany {
            response,
        })
    }

    /// Expects a `delete_many` operation.
    pub fn expect_delete_many(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::DeleteMany {
            response,
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// REQUEST INSPECTION HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests; the test pulls them off with the `expect_*`
/// helpers below and responds through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindMany request
pub async fn expect_find_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Filter,
    tokio::sync::oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindMany { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteMany request
pub async fn expect_delete_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Filter,
    tokio::sync::oneshot::Sender<Result<usize, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::DeleteMany { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        owner: String,
    }

    #[derive(Debug)]
    struct ItemCreate {
        owner: String,
    }

    #[derive(Debug, PartialEq)]
    struct ItemFilter {
        owner: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Item error")]
    struct ItemError;

    #[async_trait]
    impl ActorEntity for Item {
        type Id = u32;
        type Create = ItemCreate;
        type Filter = ItemFilter;
        type Context = ();
        type Error = ItemError;

        fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                owner: params.owner,
            })
        }

        fn matches(&self, filter: &ItemFilter) -> bool {
            self.owner == filter.owner
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ItemCreate {
                    owner: "alice".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.owner, "alice");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_delete_many_filter_is_observable() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let delete_task = tokio::spawn(async move {
            client
                .delete_many(ItemFilter {
                    owner: "bob".to_string(),
                })
                .await
        });

        let (filter, responder) = expect_delete_many(&mut receiver)
            .await
            .expect("Expected DeleteMany request");
        assert_eq!(
            filter,
            ItemFilter {
                owner: "bob".to_string()
            }
        );
        responder.send(Ok(0)).unwrap();

        assert_eq!(delete_task.await.unwrap().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Item>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get().return_ok(Some(Item {
            id: 1,
            owner: "alice".to_string(),
        }));
        mock.expect_find_many().return_ok(vec![]);
        mock.expect_delete_many().return_ok(1);

        let client = mock.client();

        let id = client
            .create(ItemCreate {
                owner: "alice".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().owner, "alice");

        let found = client
            .find_many(ItemFilter {
                owner: "carol".to_string(),
            })
            .await
            .unwrap();
        assert!(found.is_empty());

        let removed = client
            .delete_many(ItemFilter {
                owner: "alice".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(removed, 1);

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_delete_many().return_ok(0);
        mock.verify();
    }
}
