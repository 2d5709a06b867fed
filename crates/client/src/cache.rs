// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Query cache for the synchronization layer.
//!
//! An explicit key→value store rather than ambient global state, so it
//! can be constructed, injected, and unit-tested without a rendering
//! environment. Values are held as JSON; each slot carries a freshness
//! bit that invalidation clears without discarding the stale value.
//!
//! The cache is purely in-memory: a new session always starts empty, and
//! nothing here survives a restart.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Logical resource names used as cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Publicly listed testimonials, newest first.
    ApprovedTestimonials,
    /// Every testimonial, approved or not (admin listing).
    AllTestimonials,
    /// Contact form submissions (admin listing).
    ContactForms,
    /// Callback requests (admin listing).
    CallbackRequests,
    /// Insurance enquiries (admin listing).
    Enquiries,
    /// Whether the current caller is an admin.
    AdminFlag,
    /// Average star rating across approved testimonials.
    AverageRating,
}

impl QueryKey {
    /// Returns the string representation used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::ApprovedTestimonials => "approved_testimonials",
            QueryKey::AllTestimonials => "all_testimonials",
            QueryKey::ContactForms => "contact_forms",
            QueryKey::CallbackRequests => "callback_requests",
            QueryKey::Enquiries => "enquiries",
            QueryKey::AdminFlag => "admin_flag",
            QueryKey::AverageRating => "average_rating",
        }
    }
}

/// A cached value plus its freshness bit.
#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    fresh: bool,
}

/// Injectable key→value store with invalidate and patch operations.
#[derive(Debug, Default)]
pub struct QueryCache {
    slots: HashMap<QueryKey, Slot>,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        QueryCache {
            slots: HashMap::new(),
        }
    }

    /// Get the cached value for a key, fresh or stale.
    ///
    /// Returns `None` when nothing is cached or the stored value does
    /// not deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        self.slots
            .get(&key)
            .and_then(|slot| serde_json::from_value(slot.value.clone()).ok())
    }

    /// Get the cached value only if it is still fresh.
    pub fn get_fresh<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        self.slots
            .get(&key)
            .filter(|slot| slot.fresh)
            .and_then(|slot| serde_json::from_value(slot.value.clone()).ok())
    }

    /// True when a fresh value is cached for the key.
    pub fn is_fresh(&self, key: QueryKey) -> bool {
        self.slots.get(&key).is_some_and(|slot| slot.fresh)
    }

    /// True when any value, fresh or stale, is cached for the key.
    pub fn contains(&self, key: QueryKey) -> bool {
        self.slots.contains_key(&key)
    }

    /// Store a fresh value for a key, replacing whatever was there.
    pub fn set<T: Serialize>(&mut self, key: QueryKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.slots.insert(key, Slot { value, fresh: true });
        Ok(())
    }

    /// Mark a key stale without discarding its value.
    ///
    /// Stale values remain readable via [`QueryCache::get`] so display
    /// layers can keep showing the old list while a refetch runs.
    pub fn invalidate(&mut self, key: QueryKey) {
        if let Some(slot) = self.slots.get_mut(&key) {
            slot.fresh = false;
        }
    }

    /// Patch a cached list in place.
    ///
    /// A missing slot is treated as an empty list. The patched result is
    /// stored fresh: a deliberate local write is as good as a fetch
    /// until something invalidates it.
    pub fn patch_list<T, F>(&mut self, key: QueryKey, patch: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>),
    {
        let mut list: Vec<T> = self
            .slots
            .get(&key)
            .and_then(|slot| serde_json::from_value(slot.value.clone()).ok())
            .unwrap_or_default();
        patch(&mut list);
        self.set(key, &list)
    }

    /// Drop a key entirely.
    pub fn remove(&mut self, key: QueryKey) {
        self.slots.remove(&key);
    }

    /// Drop everything, e.g. when the session identity changes.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
