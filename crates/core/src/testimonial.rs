// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Testimonial record and list ordering.
//!
//! Testimonials are the only entity with a post-create lifecycle: they are
//! moderated (only approved ones are listed publicly) and can be deleted
//! by an administrator. Public listings are ordered newest-first by the
//! server-assigned creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest displayable star rating.
pub const MIN_RATING: i64 = 1;
/// Highest displayable star rating.
pub const MAX_RATING: i64 = 5;

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Server-assigned identifier, immutable.
    pub id: u64,
    pub name: String,
    pub message: String,
    /// Star rating as stored by the server. May be out of range for
    /// records written before validation existed; clamp for display.
    pub rating: i64,
    /// Optional link to a video testimonial.
    pub video_url: Option<String>,
    /// Whether moderation has made this testimonial publicly visible.
    pub approved: bool,
    /// Server-assigned creation time, the sole sort key for listings.
    pub timestamp: DateTime<Utc>,
}

impl Testimonial {
    /// Star rating clamped into the displayable range.
    ///
    /// The server is authoritative for the stored value; display layers
    /// must never render fewer than 1 or more than 5 stars.
    pub fn display_rating(&self) -> u8 {
        // CORRECTNESS: clamped into [1, 5] which fits in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.rating.clamp(MIN_RATING, MAX_RATING) as u8
        }
    }
}

/// Fields collected by the testimonial form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialInput {
    pub name: String,
    pub message: String,
    /// Optional video link; `None` when the visitor left the field blank.
    pub video_url: Option<String>,
    pub rating: i64,
}

/// Sort testimonials newest-first.
///
/// Equal timestamps break ties by id descending so repeated sorts of the
/// same list always produce the same order.
pub fn sort_newest_first(list: &mut [Testimonial]) {
    list.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Splice a record into a newest-first list.
///
/// Replaces any existing entry sharing the record's id, otherwise
/// prepends, then restores newest-first order.
pub fn upsert_newest_first(list: &mut Vec<Testimonial>, record: Testimonial) {
    if let Some(existing) = list.iter_mut().find(|t| t.id == record.id) {
        *existing = record;
    } else {
        list.insert(0, record);
    }
    sort_newest_first(list);
}

#[cfg(test)]
#[path = "testimonial_tests.rs"]
mod tests;
