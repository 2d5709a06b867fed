// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Shared test helpers for the client test modules.

#![allow(clippy::unwrap_used)]

use chrono::DateTime;

use va_core::testimonial::{Testimonial, TestimonialInput};
use va_core::{Caller, Principal};

use super::queries::SyncEngine;
use super::remote::{ClientConfig, RemoteClient};
use super::transport_tests::MockTransport;

/// Create a test testimonial with the given id and creation time.
pub fn make_testimonial(id: u64, secs: i64) -> Testimonial {
    Testimonial {
        id,
        name: format!("Visitor {}", id),
        message: "Great service".to_string(),
        rating: 5,
        video_url: None,
        approved: true,
        timestamp: DateTime::from_timestamp(secs, 0).unwrap(),
    }
}

/// Create a valid testimonial submission.
pub fn make_testimonial_input(name: &str) -> TestimonialInput {
    TestimonialInput {
        name: name.to_string(),
        message: "Great service".to_string(),
        video_url: None,
        rating: 5,
    }
}

/// Create an authenticated caller for tests.
pub fn make_caller() -> Caller {
    Caller::authenticated(Principal::from_text("aaaaa-bbbbb").unwrap())
}

/// Create a client over a mock transport, returning a shared handle to
/// the mock for scripting and inspection.
pub fn make_client_with_mock(caller: Caller) -> (RemoteClient<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    let handle = transport.clone();
    let client = RemoteClient::with_transport(ClientConfig::default(), transport, caller);
    (client, handle)
}

/// Create a sync engine over a mock transport.
pub fn make_engine_with_mock(caller: Caller) -> (SyncEngine<MockTransport>, MockTransport) {
    let (client, handle) = make_client_with_mock(caller);
    (SyncEngine::new(client), handle)
}
