//! Error types for the scenario client.
//!
//! # Design
//! A non-2xx reply keeps its status and raw body so the runner can print
//! exactly what the server said. `Transport` covers the case where no
//! response arrived at all.

use thiserror::Error;

/// Errors returned by `ScenarioClient` and the smoke driver.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    /// `body` is the raw reply, kept for the operator.
    #[error("deserialization failed: {message}; body: {body}")]
    DeserializationError { message: String, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The base address and an id did not form a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}
