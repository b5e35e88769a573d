//! Error taxonomy shared by both clients.

use crate::transport::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoError>;

/// Failures surfaced to the caller. An empty match set is not one of them.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service answered but signalled failure or sent an unusable payload.
    #[error("Service error: {message}")]
    Service {
        message: String,
        /// Raw response text, kept for diagnosis.
        body: String,
        /// Encoded request that produced the response.
        request: String,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl GeoError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn service(
        message: impl Into<String>,
        body: impl Into<String>,
        request: impl Into<String>,
    ) -> Self {
        Self::Service {
            message: message.into(),
            body: body.into(),
            request: request.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }
}
