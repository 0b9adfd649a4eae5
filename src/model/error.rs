use thiserror::Error;

/// Errors raised while decoding a JSON map into a model entity
#[derive(Error, Debug)]
pub enum ModelError {
    /// A required field was absent or null
    #[error("{entity}.{field} is required but was missing")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field was present but could not be coerced to its target type
    #[error("Cannot convert {entity}.{field}: {reason}")]
    ValueConversion {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// A collection that must always be sent was not in the map
    #[error("{entity}.{field} not found in payload")]
    KeyNotFound {
        entity: &'static str,
        field: &'static str,
    },

    /// The raw payload was not valid JSON
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Name of the entity whose decode failed, if the error is tied to one
    pub fn entity(&self) -> Option<&'static str> {
        match self {
            ModelError::MissingRequiredField { entity, .. }
            | ModelError::ValueConversion { entity, .. }
            | ModelError::KeyNotFound { entity, .. } => Some(*entity),
            ModelError::Json(_) => None,
        }
    }

    /// Name of the field whose decode failed, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ModelError::MissingRequiredField { field, .. }
            | ModelError::ValueConversion { field, .. }
            | ModelError::KeyNotFound { field, .. } => Some(*field),
            ModelError::Json(_) => None,
        }
    }
}
