// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Synchronization layer bridging imperative mutations to cached reads.
//!
//! Two cache-update strategies apply after a successful submit:
//!
//! - **Invalidate-and-refetch** for contact forms, callbacks, and
//!   enquiries. These are fire-and-forget: no list is displayed back to
//!   the submitting visitor, so marking the admin listing stale is
//!   enough.
//! - **Direct splice** for testimonials, which are displayed immediately
//!   after submission. The server-assigned record is spliced into the
//!   cached list, the list is re-sorted newest-first, and a reconcile
//!   refetch runs afterward to converge on server state.
//!
//! Deletes take the conservative path: invalidate and force a refetch,
//! accepting a brief stale display until the refetch resolves.

use std::collections::HashMap;

use tracing::{debug, warn};

use va_core::forms::{
    CallbackInput, CallbackRequest, ContactForm, ContactFormInput, EnquiryInput, InsuranceEnquiry,
};
use va_core::identity::Caller;
use va_core::testimonial::{sort_newest_first, upsert_newest_first, Testimonial, TestimonialInput};
use va_core::validate;

use crate::cache::{QueryCache, QueryKey};
use crate::error::Result;
use crate::mutation::{Mutation, MutationKind, MutationStatus};
use crate::remote::RemoteClient;
use crate::transport::{Transport, WebSocketTransport};

/// Cache-aware wrapper coordinating mutations and reads.
pub struct SyncEngine<T: Transport = WebSocketTransport> {
    client: RemoteClient<T>,
    cache: QueryCache,
    mutations: HashMap<MutationKind, Mutation>,
}

impl<T: Transport> SyncEngine<T> {
    /// Create an engine with an empty cache.
    pub fn new(client: RemoteClient<T>) -> Self {
        Self::with_cache(client, QueryCache::new())
    }

    /// Create an engine around an injected cache (for testing, or for
    /// sharing one cache across engines).
    pub fn with_cache(client: RemoteClient<T>, cache: QueryCache) -> Self {
        SyncEngine {
            client,
            cache,
            mutations: HashMap::new(),
        }
    }

    /// Connect the underlying client.
    pub async fn connect(&mut self) -> Result<()> {
        self.client.connect().await
    }

    /// Disconnect the underlying client.
    pub async fn disconnect(&mut self) -> Result<()> {
        self.client.disconnect().await
    }

    /// Read access to the cache.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The underlying remote client.
    pub fn client(&self) -> &RemoteClient<T> {
        &self.client
    }

    /// Mutable access to the underlying client, for operations the
    /// engine does not wrap (approvals, roles, profiles).
    pub fn client_mut(&mut self) -> &mut RemoteClient<T> {
        &mut self.client
    }

    /// Replace the session identity (sign-in / sign-out).
    ///
    /// Every cached result was fetched under the old identity, so the
    /// whole cache is dropped; the next read of each key refetches.
    pub fn set_caller(&mut self, caller: Caller) {
        self.client.set_caller(caller);
        self.cache.clear();
    }

    /// Current state of a tracked mutation.
    pub fn mutation(&self, kind: MutationKind) -> MutationStatus {
        self.mutations
            .get(&kind)
            .map_or(MutationStatus::Idle, Mutation::status)
    }

    /// Failure message of a tracked mutation, if its last run failed.
    pub fn mutation_error(&self, kind: MutationKind) -> Option<&str> {
        self.mutations.get(&kind).and_then(Mutation::error)
    }

    fn begin(&mut self, kind: MutationKind) {
        self.mutations.entry(kind).or_default().begin();
    }

    fn settle<R>(&mut self, kind: MutationKind, result: &Result<R>) {
        let mutation = self.mutations.entry(kind).or_default();
        match result {
            Ok(_) => mutation.succeed(),
            Err(e) => mutation.fail(e.to_string()),
        }
    }

    /// Fetch the public testimonial list.
    ///
    /// The slot is written and then immediately marked stale: cached
    /// data never satisfies the next mount, so a remount always fetches
    /// again. Use [`SyncEngine::cached_testimonials`] for render-time
    /// reads between fetches.
    pub async fn approved_testimonials(&mut self) -> Result<Vec<Testimonial>> {
        self.refetch_approved().await
    }

    /// The cached testimonial list, fresh or stale, without fetching.
    pub fn cached_testimonials(&self) -> Vec<Testimonial> {
        self.cache
            .get(QueryKey::ApprovedTestimonials)
            .unwrap_or_default()
    }

    async fn refetch_approved(&mut self) -> Result<Vec<Testimonial>> {
        let mut list = self.client.get_approved_testimonials().await?;
        sort_newest_first(&mut list);
        self.cache.set(QueryKey::ApprovedTestimonials, &list)?;
        // A remount never trusts the previous fetch.
        self.cache.invalidate(QueryKey::ApprovedTestimonials);
        debug!(
            count = list.len(),
            key = QueryKey::ApprovedTestimonials.as_str(),
            "refetched testimonial list"
        );
        Ok(list)
    }

    /// Submit a contact form: validate, call, invalidate the listing.
    pub async fn submit_contact_form(&mut self, input: &ContactFormInput) -> Result<()> {
        self.begin(MutationKind::SubmitContactForm);
        let result = self.do_submit_contact_form(input).await;
        self.settle(MutationKind::SubmitContactForm, &result);
        result
    }

    async fn do_submit_contact_form(&mut self, input: &ContactFormInput) -> Result<()> {
        let input = validate::validate_contact_form(input)?;
        self.client.submit_contact_form(&input).await?;
        self.cache.invalidate(QueryKey::ContactForms);
        Ok(())
    }

    /// Request a callback: validate, call, invalidate the listing.
    pub async fn request_callback(&mut self, input: &CallbackInput) -> Result<()> {
        self.begin(MutationKind::RequestCallback);
        let result = self.do_request_callback(input).await;
        self.settle(MutationKind::RequestCallback, &result);
        result
    }

    async fn do_request_callback(&mut self, input: &CallbackInput) -> Result<()> {
        let input = validate::validate_callback(input)?;
        self.client.request_callback(&input).await?;
        self.cache.invalidate(QueryKey::CallbackRequests);
        Ok(())
    }

    /// Submit an insurance enquiry: validate, call, invalidate the listing.
    pub async fn submit_enquiry(&mut self, input: &EnquiryInput) -> Result<()> {
        self.begin(MutationKind::SubmitEnquiry);
        let result = self.do_submit_enquiry(input).await;
        self.settle(MutationKind::SubmitEnquiry, &result);
        result
    }

    async fn do_submit_enquiry(&mut self, input: &EnquiryInput) -> Result<()> {
        let input = validate::validate_enquiry(input)?;
        self.client.submit_enquiry(&input).await?;
        self.cache.invalidate(QueryKey::Enquiries);
        Ok(())
    }

    /// Submit a testimonial and splice the created record into the
    /// cached list so it is visible immediately.
    ///
    /// The splice replaces any cached entry sharing the new record's id
    /// and otherwise prepends, then restores newest-first order. A
    /// reconcile refetch follows; if it fails the spliced list stays in
    /// place, since the mutation itself already succeeded.
    pub async fn submit_testimonial(&mut self, input: &TestimonialInput) -> Result<Testimonial> {
        self.begin(MutationKind::SubmitTestimonial);
        let result = self.do_submit_testimonial(input).await;
        self.settle(MutationKind::SubmitTestimonial, &result);
        result
    }

    async fn do_submit_testimonial(&mut self, input: &TestimonialInput) -> Result<Testimonial> {
        let input = validate::validate_testimonial(input)?;
        let created = self.client.submit_testimonial(&input).await?;
        self.cache
            .patch_list::<Testimonial, _>(QueryKey::ApprovedTestimonials, |list| {
                upsert_newest_first(list, created.clone());
            })?;
        if let Err(e) = self.refetch_approved().await {
            warn!("reconcile refetch after testimonial submit failed: {}", e);
        }
        Ok(created)
    }

    /// Delete a testimonial: call, invalidate, forced refetch.
    ///
    /// No optimistic local removal. Deleting an id that is not in the
    /// cache still refetches, leaving the list consistent with the
    /// server either way.
    pub async fn delete_testimonial(&mut self, id: u64) -> Result<()> {
        self.begin(MutationKind::DeleteTestimonial);
        let result = self.do_delete_testimonial(id).await;
        self.settle(MutationKind::DeleteTestimonial, &result);
        result
    }

    async fn do_delete_testimonial(&mut self, id: u64) -> Result<()> {
        self.client.delete_testimonial(id).await?;
        self.cache.invalidate(QueryKey::ApprovedTestimonials);
        self.refetch_approved().await?;
        Ok(())
    }

    /// Whether the current caller is an admin.
    ///
    /// Never fails on an unready client: with no session to ask about,
    /// the answer is simply `false`. A fresh cached answer is served
    /// without a remote call.
    pub async fn is_caller_admin(&mut self) -> Result<bool> {
        // Cache first, readiness second: a cached answer belongs to the
        // current identity and stays valid across a disconnect. Nothing
        // can be cached before the first successful call.
        if let Some(value) = self.cache.get_fresh::<bool>(QueryKey::AdminFlag) {
            return Ok(value);
        }
        if !self.client.is_ready() {
            return Ok(false);
        }
        let value = self.client.is_caller_admin().await?;
        self.cache.set(QueryKey::AdminFlag, &value)?;
        Ok(value)
    }

    /// Average star rating across approved testimonials, cached.
    pub async fn average_rating(&mut self) -> Result<i64> {
        if let Some(value) = self.cache.get_fresh::<i64>(QueryKey::AverageRating) {
            return Ok(value);
        }
        let value = self.client.get_average_rating().await?;
        self.cache.set(QueryKey::AverageRating, &value)?;
        Ok(value)
    }

    /// Admin listing of every testimonial, cached until invalidated.
    pub async fn all_testimonials(&mut self) -> Result<Vec<Testimonial>> {
        if let Some(list) = self.cache.get_fresh(QueryKey::AllTestimonials) {
            return Ok(list);
        }
        let mut list = self.client.get_all_testimonials().await?;
        sort_newest_first(&mut list);
        self.cache.set(QueryKey::AllTestimonials, &list)?;
        Ok(list)
    }

    /// Admin listing of contact form submissions, cached until invalidated.
    pub async fn all_contact_forms(&mut self) -> Result<Vec<ContactForm>> {
        if let Some(list) = self.cache.get_fresh(QueryKey::ContactForms) {
            return Ok(list);
        }
        let list = self.client.get_all_contact_forms().await?;
        self.cache.set(QueryKey::ContactForms, &list)?;
        Ok(list)
    }

    /// Admin listing of callback requests, cached until invalidated.
    pub async fn all_callback_requests(&mut self) -> Result<Vec<CallbackRequest>> {
        if let Some(list) = self.cache.get_fresh(QueryKey::CallbackRequests) {
            return Ok(list);
        }
        let list = self.client.get_all_callback_requests().await?;
        self.cache.set(QueryKey::CallbackRequests, &list)?;
        Ok(list)
    }

    /// Admin listing of insurance enquiries, cached until invalidated.
    pub async fn all_enquiries(&mut self) -> Result<Vec<InsuranceEnquiry>> {
        if let Some(list) = self.cache.get_fresh(QueryKey::Enquiries) {
            return Ok(list);
        }
        let list = self.client.get_all_enquiries().await?;
        self.cache.set(QueryKey::Enquiries, &list)?;
        Ok(list)
    }
}
