// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Create-only submission records: contact forms, callback requests, and
//! insurance enquiries.
//!
//! Each record is created by a single remote call and never mutated. The
//! `id` and `timestamp` fields are assigned by the remote service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Server-assigned identifier, immutable.
    pub id: u64,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

/// A submitted callback request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    /// Server-assigned identifier, immutable.
    pub id: u64,
    pub full_name: String,
    pub phone: String,
    pub preferred_time: String,
    pub message: String,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

/// A submitted insurance enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceEnquiry {
    /// Server-assigned identifier, immutable.
    pub id: u64,
    pub full_name: String,
    pub contact_method: String,
    pub insurance_type: String,
    pub additional_info: String,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

/// Fields collected by the contact form. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormInput {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Fields collected by the callback dialog. The message is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallbackInput {
    pub full_name: String,
    pub phone: String,
    pub preferred_time: String,
    pub message: String,
}

/// Fields collected by the quote dialog. Additional info is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnquiryInput {
    pub full_name: String,
    pub contact_method: String,
    pub insurance_type: String,
    pub additional_info: String,
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
