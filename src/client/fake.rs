use crate::client::error::ClientError;
use crate::client::query::{marathon_response, GraphQlRequest};
use crate::client::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
enum Failure {
    Request(String),
    Decode(String),
}

/// `FakeTransport` is an in-memory implementation of the `Transport` trait for testing
/// purposes. It answers every request with one canned response (or canned failure) and
/// records what it was sent.
#[derive(Clone)]
pub struct FakeTransport {
    response: Arc<Mutex<Value>>,
    failure: Arc<Mutex<Option<Failure>>>,
    requests: Arc<Mutex<Vec<GraphQlRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FakeTransport {
    /// Create a FakeTransport that answers with `{"data": null}`
    pub fn new() -> Self {
        Self::with_response(serde_json::json!({ "data": null }))
    }

    pub fn with_response(response: Value) -> Self {
        FakeTransport {
            response: Arc::new(Mutex::new(response)),
            failure: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer with `{"data": {"marathon": {<key>: items}}}`
    pub fn with_collection(key: &str, items: Vec<Value>) -> Self {
        Self::with_response(marathon_response(key, items))
    }

    pub fn fake_set_response(&self, response: Value) {
        *lock(&self.response) = response;
    }

    /// Simulate a failed HTTP exchange on every following request
    pub fn fake_fail_request(&self, message: &str) {
        *lock(&self.failure) = Some(Failure::Request(message.to_string()));
    }

    /// Simulate a response body that is not JSON on every following request
    pub fn fake_fail_decode(&self, message: &str) {
        *lock(&self.failure) = Some(Failure::Decode(message.to_string()));
    }

    /// Clear any simulated failure
    pub fn fake_reset(&self) {
        *lock(&self.failure) = None;
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<GraphQlRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        lock(&self.requests).push(request.clone());

        let failure = lock(&self.failure).clone();
        match failure {
            Some(Failure::Request(message)) => Err(ClientError::RemoteRequest(message)),
            Some(Failure::Decode(message)) => Err(ClientError::RemoteDecode(message)),
            None => Ok(lock(&self.response).clone()),
        }
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}
