// ============================================================================
// ERRORS - Fallos tipados de parseo, mapa y llamadas a la API
// ============================================================================

use thiserror::Error;

/// Un payload no se pudo convertir en un registro tipado.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map is not ready")]
    NotReady,

    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("map script error: {0}")]
    Js(String),
}

/// Error común que devuelven las acciones de los stores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("a pet with id {0} already exists")]
    DuplicatePet(u64),

    #[error("no pet with id {0}")]
    PetNotFound(u64),
}

impl AppError {
    /// Mensaje que ve el usuario en el banner de alertas
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Could not reach the server, please try again".to_string(),
            AppError::Http { status, .. } if *status == 401 || *status == 403 => {
                "You need to log in first".to_string()
            }
            other => other.to_string(),
        }
    }
}
