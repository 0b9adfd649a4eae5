use crate::client::error::ClientError;
use crate::client::query::GraphQlRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Transport trait for posting a GraphQL document and reading back the JSON reply
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Post `request` as the JSON body and decode the JSON response
    ///
    /// * `request` - Query text and variables to send
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError>;
}

/// Implementation of Transport for Arc<T> where T implements Transport
///
/// Lets one configured client be shared by every marathon that needs it.
#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        (**self).execute(request).await
    }
}
