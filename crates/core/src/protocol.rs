// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Wire protocol messages for the remote data service.
//!
//! The protocol is simple request/response:
//! - The client sends one call per message, wrapped in an envelope that
//!   names the caller identity.
//! - The server answers each call with exactly one reply.

use serde::{Deserialize, Serialize};

use crate::forms::{CallbackRequest, ContactForm, InsuranceEnquiry};
use crate::identity::{ApprovalStatus, Caller, Principal, UserApprovalInfo, UserProfile, UserRole};
use crate::testimonial::Testimonial;

/// A single remote call, tagged by operation name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientRequest {
    /// Create a contact form record. Answered with `Ack`.
    SubmitContactForm {
        full_name: String,
        phone: String,
        email: String,
        message: String,
    },

    /// Create a callback request record. Answered with `Ack`.
    RequestCallback {
        full_name: String,
        phone: String,
        preferred_time: String,
        message: String,
    },

    /// Create an insurance enquiry record. Answered with `Ack`.
    SubmitEnquiry {
        full_name: String,
        contact_method: String,
        insurance_type: String,
        additional_info: String,
    },

    /// Create a testimonial. The server assigns id, timestamp, and the
    /// initial approval flag, and answers with the stored record.
    SubmitTestimonial {
        name: String,
        message: String,
        video_url: Option<String>,
        rating: i64,
    },

    /// List testimonials visible to the public.
    GetApprovedTestimonials,

    /// List every testimonial, approved or not. Admin only.
    GetAllTestimonials,

    /// List all contact form submissions. Admin only.
    GetAllContactForms,

    /// List all callback requests. Admin only.
    GetAllCallbackRequests,

    /// List all insurance enquiries. Admin only.
    GetAllEnquiries,

    /// Average star rating across approved testimonials.
    GetAverageRating,

    /// Delete a testimonial by id. Admin only. Answered with `Ack`.
    DeleteTestimonial { id: u64 },

    /// Whether the calling identity holds the admin role.
    IsCallerAdmin,

    /// Whether the calling identity has been approved.
    IsCallerApproved,

    /// Request approval for the calling identity. Answered with `Ack`.
    RequestApproval,

    /// Set a user's approval status. Admin only. Answered with `Ack`.
    SetApproval {
        user: Principal,
        status: ApprovalStatus,
    },

    /// List all approval records. Admin only.
    ListApprovals,

    /// Assign a role to a user. Admin only. Answered with `Ack`.
    AssignUserRole { user: Principal, role: UserRole },

    /// Fetch the calling identity's stored profile.
    GetCallerProfile,

    /// Store the calling identity's profile. Answered with `Ack`.
    SaveCallerProfile { profile: UserProfile },

    /// Ping message for keepalive.
    Ping {
        /// Client-chosen ID echoed in Pong.
        id: u64,
    },
}

/// A single call plus the identity it is made under.
///
/// The caller is an explicit field rather than connection-ambient state,
/// so every request names the session it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallEnvelope {
    /// Session identity for this call.
    pub caller: Caller,
    /// The call itself.
    pub request: ClientRequest,
}

/// The server's answer to a single call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerReply {
    /// The call succeeded and returns nothing.
    Ack,

    /// A single testimonial record.
    Testimonial(Testimonial),

    /// A testimonial listing.
    Testimonials { testimonials: Vec<Testimonial> },

    /// A contact form listing.
    ContactForms { forms: Vec<ContactForm> },

    /// A callback request listing.
    CallbackRequests { requests: Vec<CallbackRequest> },

    /// An insurance enquiry listing.
    Enquiries { enquiries: Vec<InsuranceEnquiry> },

    /// Average star rating across approved testimonials.
    AverageRating { rating: i64 },

    /// A boolean answer (admin / approval checks).
    Flag { value: bool },

    /// An approval record listing.
    Approvals { approvals: Vec<UserApprovalInfo> },

    /// A caller profile, absent when none has been saved.
    Profile { profile: Option<UserProfile> },

    /// Pong response to a client Ping.
    Pong {
        /// Echoed from the Ping message.
        id: u64,
    },

    /// The call failed.
    Error {
        /// Human-readable error description, surfaced verbatim.
        message: String,
    },
}

impl CallEnvelope {
    /// Creates an envelope for the given caller and call.
    pub fn new(caller: Caller, request: ClientRequest) -> Self {
        CallEnvelope { caller, request }
    }

    /// Serializes the envelope to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an envelope from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl ServerReply {
    /// Creates an Error reply.
    pub fn error(message: impl Into<String>) -> Self {
        ServerReply::Error {
            message: message.into(),
        }
    }

    /// Creates a Testimonials reply.
    pub fn testimonials(testimonials: Vec<Testimonial>) -> Self {
        ServerReply::Testimonials { testimonials }
    }

    /// Creates a Flag reply.
    pub fn flag(value: bool) -> Self {
        ServerReply::Flag { value }
    }

    /// Creates a Pong reply.
    pub fn pong(id: u64) -> Self {
        ServerReply::Pong { id }
    }

    /// Serializes the reply to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a reply from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
