// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, request parsing) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("request entity too large")]
    PayloadTooLarge,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn property_not_found() -> Self {
        ServerError::NotFound("Property not found".into())
    }

    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge => 413,
            ServerError::MethodNotAllowed => 405,
            ServerError::Storage(_) | ServerError::Internal(_) => 500,
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
