// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Error types for va-core operations.

use thiserror::Error;

/// All possible errors that can occur in va-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("invalid rating: {0}\n  hint: ratings run from 1 to 5 stars")]
    InvalidRating(i64),

    #[error("invalid video url: '{0}'\n  hint: video links must start with http:// or https://")]
    InvalidVideoUrl(String),

    #[error("invalid principal: '{0}'")]
    InvalidPrincipal(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: admin, user, guest")]
    InvalidRole(String),

    #[error("invalid approval status: '{0}'\n  hint: valid statuses are: pending, approved, rejected")]
    InvalidApprovalStatus(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for va-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
