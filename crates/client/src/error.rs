// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Error types for va-client operations.

use thiserror::Error;

use crate::transport::TransportError;

/// All possible errors that can occur in va-client operations.
///
/// The taxonomy is deliberately small: the client is not ready, the
/// remote call failed, or the input never left the machine.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote data client has not finished initializing. Calls fail
    /// fast with this error rather than queuing.
    #[error("client not ready: connect before issuing calls")]
    ClientNotReady,

    /// The remote service answered with an error, surfaced verbatim.
    #[error("remote error: {0}")]
    Remote(String),

    /// The transport failed before a reply arrived.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a reply of the wrong shape.
    #[error("unexpected reply: expected {expected}")]
    UnexpectedReply { expected: &'static str },

    /// Local validation rejected the input before any remote call.
    #[error("validation error: {0}")]
    Validation(#[from] va_core::Error),

    /// Cache (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for va-client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the failure happened before any remote call was made.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::ClientNotReady | Error::Validation(_))
    }
}
