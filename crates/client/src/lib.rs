// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! va-client: Remote data client and synchronization layer for the
//! Vinay Associates advisory site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────┐
//! │ Display     │────►│ SyncEngine   │────►│ RemoteClient│────►│ Remote  │
//! │ layer       │◄────│ (QueryCache) │◄────│ (typed ops) │◄────│ service │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────┘
//! ```
//!
//! # Features
//!
//! - Typed proxy over the remote data service, one method per operation
//! - Injectable query cache with invalidate and patch operations
//! - Per-mutation `idle → pending → (success | error)` state tracking
//! - Injectable transport trait for testing

pub mod cache;
pub mod error;
pub mod mutation;
pub mod queries;
pub mod remote;
pub mod transport;

pub use cache::{QueryCache, QueryKey};
pub use error::{Error, Result};
pub use mutation::{Mutation, MutationKind, MutationStatus};
pub use queries::SyncEngine;
pub use remote::{ClientConfig, RemoteClient};
pub use transport::{Transport, TransportError, WebSocketTransport};

#[cfg(test)]
mod test_helpers;




#[cfg(test)]
mod remote_tests;

#[cfg(test)]
mod transport_tests;
