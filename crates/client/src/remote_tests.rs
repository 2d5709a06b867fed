// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Tests for the typed remote client.

#![allow(clippy::unwrap_used)]

use va_core::forms::ContactFormInput;
use va_core::protocol::{ClientRequest, ServerReply};
use va_core::{ApprovalStatus, Caller, Principal, UserProfile};

use super::error::Error;
use super::test_helpers::{make_caller, make_client_with_mock, make_testimonial, make_testimonial_input};
use super::transport::TransportError;

fn contact_input() -> ContactFormInput {
    ContactFormInput {
        full_name: "Asha Rao".to_string(),
        phone: "9876543210".to_string(),
        email: "asha@example.com".to_string(),
        message: "Call me".to_string(),
    }
}

#[tokio::test]
async fn calls_fail_fast_when_not_connected() {
    let (mut client, handle) = make_client_with_mock(make_caller());

    let result = client.submit_contact_form(&contact_input()).await;
    assert!(matches!(result, Err(Error::ClientNotReady)));
    // Nothing was queued for later: the call never reached the transport.
    assert!(handle.calls().is_empty());
}

#[tokio::test]
async fn submit_contact_form_sends_fields() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::Ack);
    client.submit_contact_form(&contact_input()).await.unwrap();

    let requests = handle.requests();
    assert_eq!(requests.len(), 1);
    assert!(matches!(
        &requests[0],
        ClientRequest::SubmitContactForm { full_name, .. } if full_name == "Asha Rao"
    ));
}

#[tokio::test]
async fn envelope_names_the_caller() {
    let principal = Principal::from_text("w7x7r-cok77").unwrap();
    let (mut client, handle) = make_client_with_mock(Caller::authenticated(principal.clone()));
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::flag(true));
    client.is_caller_admin().await.unwrap();

    let calls = handle.calls();
    assert_eq!(calls[0].caller.principal(), Some(&principal));
}

#[tokio::test]
async fn server_error_surfaces_verbatim() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::error("unauthorized: admin role required"));
    let result = client.delete_testimonial(4).await;
    assert!(
        matches!(result, Err(Error::Remote(message)) if message == "unauthorized: admin role required")
    );
}

#[tokio::test]
async fn unexpected_reply_shape_is_an_error() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::flag(true));
    let result = client.submit_contact_form(&contact_input()).await;
    assert!(matches!(
        result,
        Err(Error::UnexpectedReply { expected: "ack" })
    ));
}

#[tokio::test]
async fn transport_failure_marks_client_not_ready() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_failure(TransportError::ReceiveFailed("broken pipe".into()));
    let result = client.is_caller_admin().await;
    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(!client.is_ready());

    // Subsequent calls fail fast instead of hitting the dead transport.
    let result = client.is_caller_admin().await;
    assert!(matches!(result, Err(Error::ClientNotReady)));
}

#[tokio::test]
async fn submit_testimonial_returns_server_record() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    let created = make_testimonial(7, 700);
    handle.queue_reply(ServerReply::Testimonial(created.clone()));

    let returned = client
        .submit_testimonial(&make_testimonial_input("Asha"))
        .await
        .unwrap();
    assert_eq!(returned, created);
}

#[tokio::test]
async fn get_approved_testimonials_returns_list() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::testimonials(vec![
        make_testimonial(1, 100),
        make_testimonial(2, 200),
    ]));
    let list = client.get_approved_testimonials().await.unwrap();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn approval_operations_round_trip() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::Ack);
    client.request_approval().await.unwrap();

    handle.queue_reply(ServerReply::Ack);
    let user = Principal::from_text("aaaaa-ccccc").unwrap();
    client
        .set_approval(user, ApprovalStatus::Approved)
        .await
        .unwrap();

    handle.queue_reply(ServerReply::Approvals { approvals: vec![] });
    let approvals = client.list_approvals().await.unwrap();
    assert!(approvals.is_empty());
}

#[tokio::test]
async fn profile_round_trip() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::Profile { profile: None });
    assert!(client.get_caller_profile().await.unwrap().is_none());

    handle.queue_reply(ServerReply::Ack);
    client
        .save_caller_profile(UserProfile {
            name: "Asha".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn ping_checks_echoed_id() {
    let (mut client, handle) = make_client_with_mock(make_caller());
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::pong(42));
    client.ping(42).await.unwrap();

    handle.queue_reply(ServerReply::pong(7));
    let result = client.ping(42).await;
    assert!(matches!(result, Err(Error::UnexpectedReply { .. })));
}

#[tokio::test]
async fn set_caller_changes_the_envelope() {
    let (mut client, handle) = make_client_with_mock(Caller::Anonymous);
    client.connect().await.unwrap();

    handle.queue_reply(ServerReply::flag(false));
    client.is_caller_admin().await.unwrap();

    let principal = Principal::from_text("aaaaa-bbbbb").unwrap();
    client.set_caller(Caller::authenticated(principal.clone()));
    handle.queue_reply(ServerReply::flag(true));
    client.is_caller_admin().await.unwrap();

    let calls = handle.calls();
    assert_eq!(calls[0].caller, Caller::Anonymous);
    assert_eq!(calls[1].caller.principal(), Some(&principal));
}
