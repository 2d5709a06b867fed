// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Per-mutation state tracking.
//!
//! Every mutation runs the same cycle: `idle → pending → (success |
//! error)`. Success and error are terminal for that invocation; a new
//! invocation starts a fresh cycle. Nothing is retried automatically.

use std::fmt;

/// Lifecycle state of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStatus {
    /// Never invoked, or reset.
    #[default]
    Idle,
    /// Invoked and awaiting the remote call.
    Pending,
    /// The last invocation succeeded.
    Success,
    /// The last invocation failed.
    Error,
}

impl MutationStatus {
    /// Returns the string representation used in logs and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationStatus::Idle => "idle",
            MutationStatus::Pending => "pending",
            MutationStatus::Success => "success",
            MutationStatus::Error => "error",
        }
    }
}

impl fmt::Display for MutationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The mutations the synchronization layer tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    SubmitContactForm,
    RequestCallback,
    SubmitEnquiry,
    SubmitTestimonial,
    DeleteTestimonial,
}

/// Observable state of one mutation, exposed to display layers.
#[derive(Debug, Clone, Default)]
pub struct Mutation {
    status: MutationStatus,
    error: Option<String>,
}

impl Mutation {
    /// Create a tracker in the idle state.
    pub fn new() -> Self {
        Mutation::default()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> MutationStatus {
        self.status
    }

    /// True while an invocation is in flight.
    pub fn is_pending(&self) -> bool {
        self.status == MutationStatus::Pending
    }

    /// The failure message from the last invocation, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fresh invocation cycle.
    pub(crate) fn begin(&mut self) {
        self.status = MutationStatus::Pending;
        self.error = None;
    }

    /// Mark the in-flight invocation successful.
    pub(crate) fn succeed(&mut self) {
        self.status = MutationStatus::Success;
        self.error = None;
    }

    /// Mark the in-flight invocation failed.
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.status = MutationStatus::Error;
        self.error = Some(message.into());
    }
}
