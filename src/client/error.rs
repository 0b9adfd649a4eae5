use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur while enriching a marathon from the remote API
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP exchange itself failed
    #[error("Remote request failed: {0}")]
    RemoteRequest(String),

    /// The response was not JSON, or not shaped like a marathon query result
    #[error("Failed to decode remote response: {0}")]
    RemoteDecode(String),

    /// A returned element could not be decoded into an entity
    #[error(transparent)]
    Model(#[from] ModelError),
}
