use crate::client::error::ClientError;
use crate::client::query::GraphQlRequest;
use crate::client::transport::Transport;
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, info};

/// Default GraphQL endpoint of the Bokoblin API
pub const BOKO_API_URL: &str = "https://api.bokoblin.com";

/// Real HTTP implementation of the Transport trait.
///
/// The wrapped `reqwest::Client` is used as supplied; timeouts, proxies and
/// TLS settings are whatever the caller configured on it.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport that talks to `BOKO_API_URL`
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, BOKO_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        info!("Creating HttpTransport for {}", endpoint);
        Self { client, endpoint }
    }

    pub fn from_config(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self::with_endpoint(client, config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        debug!(
            "Posting query to {} for marathon {}",
            self.endpoint, request.variables.marathon_id
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::RemoteRequest(e.to_string()))?;

        debug!("Response status {} from {}", response.status(), self.endpoint);

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::RemoteDecode(e.to_string()))
    }
}
