// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Input validation for form submissions.
//!
//! Validation runs before any remote call is made; a failed check never
//! reaches the remote data client. All checks trim surrounding whitespace
//! and the validated variants returned here carry the trimmed values.

use crate::error::{Error, Result};
use crate::forms::{CallbackInput, ContactFormInput, EnquiryInput};
use crate::testimonial::{TestimonialInput, MAX_RATING, MIN_RATING};

// Input length limits
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 30;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_MESSAGE_LENGTH: usize = 5_000;
pub const MAX_SHORT_FIELD_LENGTH: usize = 100;
pub const MAX_VIDEO_URL_LENGTH: usize = 2_048;

/// Trim a required field, rejecting empty or over-long values.
fn required(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    if trimmed.len() > max {
        return Err(Error::FieldTooLong {
            field,
            actual: trimmed.len(),
            max,
        });
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field, rejecting only over-long values.
fn optional(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.len() > max {
        return Err(Error::FieldTooLong {
            field,
            actual: trimmed.len(),
            max,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate an email address shape.
///
/// Intentionally loose: one '@' with a non-empty local part and a domain
/// containing a dot. The remote service is authoritative beyond that.
pub fn validate_email(email: &str) -> Result<()> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validate a submission-side star rating.
pub fn validate_rating(rating: i64) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(Error::InvalidRating(rating));
    }
    Ok(())
}

/// Validate a video link.
pub fn validate_video_url(url: &str) -> Result<()> {
    if url.len() > MAX_VIDEO_URL_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Video url",
            actual: url.len(),
            max: MAX_VIDEO_URL_LENGTH,
        });
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(Error::InvalidVideoUrl(url.to_string()));
    }
    Ok(())
}

/// Validate and trim a contact form submission. All fields are required.
pub fn validate_contact_form(input: &ContactFormInput) -> Result<ContactFormInput> {
    let full_name = required("Full name", &input.full_name, MAX_NAME_LENGTH)?;
    let phone = required("Phone", &input.phone, MAX_PHONE_LENGTH)?;
    let email = required("Email", &input.email, MAX_EMAIL_LENGTH)?;
    validate_email(&email)?;
    let message = required("Message", &input.message, MAX_MESSAGE_LENGTH)?;
    Ok(ContactFormInput {
        full_name,
        phone,
        email,
        message,
    })
}

/// Validate and trim a callback request. The message is optional.
pub fn validate_callback(input: &CallbackInput) -> Result<CallbackInput> {
    let full_name = required("Full name", &input.full_name, MAX_NAME_LENGTH)?;
    let phone = required("Phone", &input.phone, MAX_PHONE_LENGTH)?;
    let preferred_time = required("Preferred time", &input.preferred_time, MAX_SHORT_FIELD_LENGTH)?;
    let message = optional("Message", &input.message, MAX_MESSAGE_LENGTH)?;
    Ok(CallbackInput {
        full_name,
        phone,
        preferred_time,
        message,
    })
}

/// Validate and trim an insurance enquiry. Additional info is optional.
pub fn validate_enquiry(input: &EnquiryInput) -> Result<EnquiryInput> {
    let full_name = required("Full name", &input.full_name, MAX_NAME_LENGTH)?;
    let contact_method = required("Contact method", &input.contact_method, MAX_SHORT_FIELD_LENGTH)?;
    let insurance_type = required("Insurance type", &input.insurance_type, MAX_SHORT_FIELD_LENGTH)?;
    let additional_info = optional("Additional info", &input.additional_info, MAX_MESSAGE_LENGTH)?;
    Ok(EnquiryInput {
        full_name,
        contact_method,
        insurance_type,
        additional_info,
    })
}

/// Validate and trim a testimonial submission.
///
/// A blank video field is normalized to `None` rather than an empty
/// string, so downstream code never sees a sentinel value.
pub fn validate_testimonial(input: &TestimonialInput) -> Result<TestimonialInput> {
    let name = required("Name", &input.name, MAX_NAME_LENGTH)?;
    let message = required("Message", &input.message, MAX_MESSAGE_LENGTH)?;
    validate_rating(input.rating)?;
    let video_url = match input.video_url.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(url) => {
            validate_video_url(url)?;
            Some(url.to_string())
        }
    };
    Ok(TestimonialInput {
        name,
        message,
        video_url,
        rating: input.rating,
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
