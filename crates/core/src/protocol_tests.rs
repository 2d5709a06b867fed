// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testimonial::Testimonial;
use chrono::DateTime;

fn make_testimonial(id: u64) -> Testimonial {
    Testimonial {
        id,
        name: "Asha".to_string(),
        message: "Great service".to_string(),
        rating: 5,
        video_url: None,
        approved: true,
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

#[test]
fn request_uses_snake_case_tag() {
    let request = ClientRequest::GetApprovedTestimonials;
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"type":"get_approved_testimonials"}"#);
}

#[test]
fn submit_request_round_trips() {
    let request = ClientRequest::SubmitContactForm {
        full_name: "Asha Rao".to_string(),
        phone: "9876543210".to_string(),
        email: "asha@example.com".to_string(),
        message: "Call me".to_string(),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains(r#""type":"submit_contact_form""#));
    let back: ClientRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn envelope_carries_caller() {
    let principal = Principal::from_text("aaaaa-bbbbb").unwrap();
    let envelope = CallEnvelope::new(
        Caller::authenticated(principal),
        ClientRequest::DeleteTestimonial { id: 4 },
    );
    let json = envelope.to_json().unwrap();
    assert!(json.contains(r#""caller""#));
    assert!(json.contains(r#""principal":"aaaaa-bbbbb""#));
    assert!(json.contains(r#""type":"delete_testimonial""#));

    let back = CallEnvelope::from_json(&json).unwrap();
    assert_eq!(back, envelope);
}

#[test]
fn anonymous_envelope_round_trips() {
    let envelope = CallEnvelope::new(Caller::Anonymous, ClientRequest::IsCallerAdmin);
    let back = CallEnvelope::from_json(&envelope.to_json().unwrap()).unwrap();
    assert_eq!(back, envelope);
}

#[test]
fn testimonials_reply_round_trips() {
    let reply = ServerReply::testimonials(vec![make_testimonial(1), make_testimonial(2)]);
    let json = reply.to_json().unwrap();
    assert!(json.contains(r#""type":"testimonials""#));
    let back = ServerReply::from_json(&json).unwrap();
    assert_eq!(back, reply);
}

#[test]
fn single_testimonial_reply_round_trips() {
    let reply = ServerReply::Testimonial(make_testimonial(9));
    let back = ServerReply::from_json(&reply.to_json().unwrap()).unwrap();
    assert_eq!(back, reply);
}

#[test]
fn error_reply_carries_message_verbatim() {
    let reply = ServerReply::error("unauthorized: admin role required");
    let json = reply.to_json().unwrap();
    let back = ServerReply::from_json(&json).unwrap();
    assert!(
        matches!(back, ServerReply::Error { message } if message == "unauthorized: admin role required")
    );
}

#[test]
fn flag_and_pong_round_trip() {
    let back = ServerReply::from_json(&ServerReply::flag(true).to_json().unwrap()).unwrap();
    assert!(matches!(back, ServerReply::Flag { value: true }));

    let back = ServerReply::from_json(&ServerReply::pong(42).to_json().unwrap()).unwrap();
    assert!(matches!(back, ServerReply::Pong { id: 42 }));
}

#[test]
fn profile_reply_handles_absence() {
    let reply = ServerReply::Profile { profile: None };
    let back = ServerReply::from_json(&reply.to_json().unwrap()).unwrap();
    assert!(matches!(back, ServerReply::Profile { profile: None }));
}

#[test]
fn set_approval_round_trips() {
    let request = ClientRequest::SetApproval {
        user: Principal::from_text("aaaaa-bbbbb").unwrap(),
        status: ApprovalStatus::Approved,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains(r#""status":"approved""#));
    let back: ClientRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}
