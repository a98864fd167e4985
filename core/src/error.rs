//! Error types for the food API client and its configuration.
//!
//! # Design
//! `NotFound` gets its own variant because a missing record is the one
//! status callers tell apart. Every other non-2xx response lands in
//! `HttpError` with the raw status and body. The dashboard collapses all of
//! these into a single failure at its call sites; the variants exist for
//! logging and for hosts that drive `FoodClient` directly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `FoodClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested food does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connection, DNS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors raised while loading `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {message}")]
    Invalid { message: String },
}
