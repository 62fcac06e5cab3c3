//! # Mock Clients for Tests
//!
//! Two ways to test code that talks to a store without running a real
//! [`ResourceActor`](crate::ResourceActor):
//!
//! | | [`MockClient`] | [`create_mock_client`] |
//! |---|---|---|
//! | Style | queue of expectations, answered automatically | test receives raw requests and answers them |
//! | Good for | "given these replies, does my wrapper do X" | asserting the exact payload that was sent |
//! | Errors | `return_err(FrameworkError::...)` | send an `Err` on the responder |
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Order>::new();
//! mock.expect_list().return_ok(vec![order_a, order_b]);
//!
//! let orders = OrderClient::new(mock.client());
//! assert_eq!(orders.find_by_user_id("u1").await?.len(), 1);
//! mock.verify();
//! ```
//!
//! Expectations are consumed strictly in order. A request that does not match
//! the next expectation (wrong kind, or wrong id) panics the mock task; the
//! caller then sees [`FrameworkError::ActorDropped`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_id<I: PartialEq + std::fmt::Debug>(expected: &I, actual: &I) {
    assert_eq!(expected, actual, "mock received a request for an unexpected id");
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id(&expected, &id);
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

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, Box::new(|response| Expectation::Create { response }))
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, Box::new(move |response| Expectation::Get { id, response }))
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder::new(self, Box::new(|response| Expectation::List { response }))
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, Box::new(move |response| Expectation::Update { id, response }))
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder::new(self, Box::new(move |response| Expectation::Delete { id, response }))
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder::new(self, Box::new(move |response| Expectation::Action { id, response }))
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

type MakeExpectation<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>;

/// Finishes an expectation with the reply the mock should give.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    make: MakeExpectation<T, R>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(mock: &'a MockClient<T>, make: MakeExpectation<T, R>) -> Self {
        Self { mock, make }
    }

    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.make)(Ok(value)));
    }

    /// Reply with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.make)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
///
/// The test plays the actor: pull a request with one of the `expect_*`
/// helpers below, inspect it, answer through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message must be an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct WidgetCreate {
        label: String,
    }

    #[derive(Debug)]
    struct WidgetUpdate;

    #[derive(Debug)]
    enum WidgetAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Widget error")]
    struct WidgetError;

    #[async_trait]
    impl ActorEntity for Widget {
        type Id = u32;
        type Create = WidgetCreate;
        type Update = WidgetUpdate;
        type Action = WidgetAction;
        type ActionResult = ();
        type Context = ();
        type Error = WidgetError;

        fn from_create_params(id: u32, params: WidgetCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: WidgetUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, action: WidgetAction, _: &()) -> Result<(), Self::Error> {
            match action {}
        }
    }

    fn widget(id: u32, label: &str) -> Widget {
        Widget {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Widget>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(WidgetCreate {
                    label: "gear".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "gear");
        responder.send(Ok(widget(1, "gear"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, widget(1, "gear"));
    }

    #[tokio::test]
    async fn test_expectations_are_answered_in_order() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_create().return_ok(widget(1, "gear"));
        mock.expect_get(1).return_ok(Some(widget(1, "gear")));
        mock.expect_list()
            .return_ok(vec![widget(1, "gear"), widget(2, "cog")]);
        mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));

        let client = mock.client();

        let created = client
            .create(WidgetCreate {
                label: "gear".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(widget(1, "gear")));

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 2);

        let deleted = client.delete(2).await;
        assert!(matches!(deleted, Err(FrameworkError::NotFound(id)) if id == "2"));

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_id_is_reported_as_dropped_request() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(7).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
