// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! va-core: Shared library for the Vinay Associates data layer
//!
//! This crate provides the domain records, caller identity types, wire
//! protocol messages, and validation rules used by the va-client crate.

pub mod error;
pub mod forms;
pub mod identity;
pub mod protocol;
pub mod testimonial;
pub mod validate;

pub use error::{Error, Result};
pub use forms::{
    CallbackInput, CallbackRequest, ContactForm, ContactFormInput, EnquiryInput, InsuranceEnquiry,
};
pub use identity::{ApprovalStatus, Caller, Principal, UserApprovalInfo, UserProfile, UserRole};
pub use protocol::{CallEnvelope, ClientRequest, ServerReply};
pub use testimonial::{Testimonial, TestimonialInput};
