// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Typed proxy over the remote data service.
//!
//! One method per backend operation. The client owns no domain state:
//! every method is a single request/response round trip. Failures
//! propagate unchanged to the caller; nothing is retried, queued, or
//! translated here. When the client is not ready every operation fails
//! fast with [`Error::ClientNotReady`].

use va_core::forms::{
    CallbackInput, CallbackRequest, ContactForm, ContactFormInput, EnquiryInput, InsuranceEnquiry,
};
use va_core::identity::{
    ApprovalStatus, Caller, Principal, UserApprovalInfo, UserProfile, UserRole,
};
use va_core::protocol::{CallEnvelope, ClientRequest, ServerReply};
use va_core::testimonial::{Testimonial, TestimonialInput};

use crate::error::{Error, Result};
use crate::transport::{Transport, WebSocketTransport};

/// Configuration for the remote client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the remote data service.
    pub url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: "ws://localhost:7410".to_string(),
        }
    }
}

/// Remote data client.
///
/// Holds the session identity and threads it into every call envelope,
/// so the service always knows which caller a request belongs to.
pub struct RemoteClient<T: Transport = WebSocketTransport> {
    /// Configuration.
    config: ClientConfig,
    /// Transport layer.
    transport: T,
    /// Session identity for all calls made through this client.
    caller: Caller,
    /// Whether `connect` has completed successfully.
    ready: bool,
}

impl RemoteClient<WebSocketTransport> {
    /// Create a new client with the default WebSocket transport.
    pub fn new(config: ClientConfig, caller: Caller) -> Self {
        RemoteClient {
            config,
            transport: WebSocketTransport::new(),
            caller,
            ready: false,
        }
    }
}

impl<T: Transport> RemoteClient<T> {
    /// Create a new client with a custom transport (for testing).
    pub fn with_transport(config: ClientConfig, transport: T, caller: Caller) -> Self {
        RemoteClient {
            config,
            transport,
            caller,
            ready: false,
        }
    }

    /// The session identity calls are made under.
    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    /// Replace the session identity (sign-in / sign-out).
    ///
    /// Cached query results keyed on the old identity are the
    /// synchronization layer's responsibility to drop.
    pub fn set_caller(&mut self, caller: Caller) {
        self.caller = caller;
    }

    /// True once `connect` has succeeded and the transport is up.
    pub fn is_ready(&self) -> bool {
        self.ready && self.transport.is_connected()
    }

    /// Connect to the remote service.
    pub async fn connect(&mut self) -> Result<()> {
        self.transport.connect(&self.config.url).await?;
        self.ready = true;
        Ok(())
    }

    /// Disconnect from the remote service.
    pub async fn disconnect(&mut self) -> Result<()> {
        self.transport.disconnect().await?;
        self.ready = false;
        Ok(())
    }

    /// Issue one call and surface the reply.
    ///
    /// Server-sent errors become [`Error::Remote`] with the message
    /// untouched. A transport failure marks the client not ready; there
    /// is no reconnect here.
    async fn call(&mut self, request: ClientRequest) -> Result<ServerReply> {
        if !self.is_ready() {
            return Err(Error::ClientNotReady);
        }
        let envelope = CallEnvelope::new(self.caller.clone(), request);
        match self.transport.call(envelope).await {
            Ok(ServerReply::Error { message }) => Err(Error::Remote(message)),
            Ok(reply) => Ok(reply),
            Err(e) => {
                self.ready = false;
                Err(e.into())
            }
        }
    }

    /// Expect an `Ack` reply.
    fn expect_ack(reply: ServerReply) -> Result<()> {
        match reply {
            ServerReply::Ack => Ok(()),
            _ => Err(Error::UnexpectedReply { expected: "ack" }),
        }
    }

    /// Expect a `Flag` reply.
    fn expect_flag(reply: ServerReply) -> Result<bool> {
        match reply {
            ServerReply::Flag { value } => Ok(value),
            _ => Err(Error::UnexpectedReply { expected: "flag" }),
        }
    }

    /// Submit a contact form. Create-only; the record is never read back
    /// by public pages.
    pub async fn submit_contact_form(&mut self, input: &ContactFormInput) -> Result<()> {
        let reply = self
            .call(ClientRequest::SubmitContactForm {
                full_name: input.full_name.clone(),
                phone: input.phone.clone(),
                email: input.email.clone(),
                message: input.message.clone(),
            })
            .await?;
        Self::expect_ack(reply)
    }

    /// Request a callback.
    pub async fn request_callback(&mut self, input: &CallbackInput) -> Result<()> {
        let reply = self
            .call(ClientRequest::RequestCallback {
                full_name: input.full_name.clone(),
                phone: input.phone.clone(),
                preferred_time: input.preferred_time.clone(),
                message: input.message.clone(),
            })
            .await?;
        Self::expect_ack(reply)
    }

    /// Submit an insurance enquiry.
    pub async fn submit_enquiry(&mut self, input: &EnquiryInput) -> Result<()> {
        let reply = self
            .call(ClientRequest::SubmitEnquiry {
                full_name: input.full_name.clone(),
                contact_method: input.contact_method.clone(),
                insurance_type: input.insurance_type.clone(),
                additional_info: input.additional_info.clone(),
            })
            .await?;
        Self::expect_ack(reply)
    }

    /// Submit a testimonial. The server assigns id, timestamp, and the
    /// initial approval flag, and returns the stored record.
    pub async fn submit_testimonial(&mut self, input: &TestimonialInput) -> Result<Testimonial> {
        let reply = self
            .call(ClientRequest::SubmitTestimonial {
                name: input.name.clone(),
                message: input.message.clone(),
                video_url: input.video_url.clone(),
                rating: input.rating,
            })
            .await?;
        match reply {
            ServerReply::Testimonial(testimonial) => Ok(testimonial),
            _ => Err(Error::UnexpectedReply {
                expected: "testimonial",
            }),
        }
    }

    /// List publicly visible testimonials.
    pub async fn get_approved_testimonials(&mut self) -> Result<Vec<Testimonial>> {
        match self.call(ClientRequest::GetApprovedTestimonials).await? {
            ServerReply::Testimonials { testimonials } => Ok(testimonials),
            _ => Err(Error::UnexpectedReply {
                expected: "testimonials",
            }),
        }
    }

    /// List every testimonial, approved or not. Admin only.
    pub async fn get_all_testimonials(&mut self) -> Result<Vec<Testimonial>> {
        match self.call(ClientRequest::GetAllTestimonials).await? {
            ServerReply::Testimonials { testimonials } => Ok(testimonials),
            _ => Err(Error::UnexpectedReply {
                expected: "testimonials",
            }),
        }
    }

    /// List all contact form submissions. Admin only.
    pub async fn get_all_contact_forms(&mut self) -> Result<Vec<ContactForm>> {
        match self.call(ClientRequest::GetAllContactForms).await? {
            ServerReply::ContactForms { forms } => Ok(forms),
            _ => Err(Error::UnexpectedReply {
                expected: "contact_forms",
            }),
        }
    }

    /// List all callback requests. Admin only.
    pub async fn get_all_callback_requests(&mut self) -> Result<Vec<CallbackRequest>> {
        match self.call(ClientRequest::GetAllCallbackRequests).await? {
            ServerReply::CallbackRequests { requests } => Ok(requests),
            _ => Err(Error::UnexpectedReply {
                expected: "callback_requests",
            }),
        }
    }

    /// List all insurance enquiries. Admin only.
    pub async fn get_all_enquiries(&mut self) -> Result<Vec<InsuranceEnquiry>> {
        match self.call(ClientRequest::GetAllEnquiries).await? {
            ServerReply::Enquiries { enquiries } => Ok(enquiries),
            _ => Err(Error::UnexpectedReply {
                expected: "enquiries",
            }),
        }
    }

    /// Average star rating across approved testimonials.
    pub async fn get_average_rating(&mut self) -> Result<i64> {
        match self.call(ClientRequest::GetAverageRating).await? {
            ServerReply::AverageRating { rating } => Ok(rating),
            _ => Err(Error::UnexpectedReply {
                expected: "average_rating",
            }),
        }
    }

    /// Delete a testimonial by id. Admin only; the server re-checks the
    /// role regardless of what this client believes.
    pub async fn delete_testimonial(&mut self, id: u64) -> Result<()> {
        let reply = self.call(ClientRequest::DeleteTestimonial { id }).await?;
        Self::expect_ack(reply)
    }

    /// Whether the calling identity holds the admin role.
    pub async fn is_caller_admin(&mut self) -> Result<bool> {
        let reply = self.call(ClientRequest::IsCallerAdmin).await?;
        Self::expect_flag(reply)
    }

    /// Whether the calling identity has been approved.
    pub async fn is_caller_approved(&mut self) -> Result<bool> {
        let reply = self.call(ClientRequest::IsCallerApproved).await?;
        Self::expect_flag(reply)
    }

    /// Request approval for the calling identity.
    pub async fn request_approval(&mut self) -> Result<()> {
        let reply = self.call(ClientRequest::RequestApproval).await?;
        Self::expect_ack(reply)
    }

    /// Set a user's approval status. Admin only.
    pub async fn set_approval(&mut self, user: Principal, status: ApprovalStatus) -> Result<()> {
        let reply = self.call(ClientRequest::SetApproval { user, status }).await?;
        Self::expect_ack(reply)
    }

    /// List all approval records. Admin only.
    pub async fn list_approvals(&mut self) -> Result<Vec<UserApprovalInfo>> {
        match self.call(ClientRequest::ListApprovals).await? {
            ServerReply::Approvals { approvals } => Ok(approvals),
            _ => Err(Error::UnexpectedReply {
                expected: "approvals",
            }),
        }
    }

    /// Assign a role to a user. Admin only.
    pub async fn assign_user_role(&mut self, user: Principal, role: UserRole) -> Result<()> {
        let reply = self.call(ClientRequest::AssignUserRole { user, role }).await?;
        Self::expect_ack(reply)
    }

    /// Fetch the calling identity's stored profile.
    pub async fn get_caller_profile(&mut self) -> Result<Option<UserProfile>> {
        match self.call(ClientRequest::GetCallerProfile).await? {
            ServerReply::Profile { profile } => Ok(profile),
            _ => Err(Error::UnexpectedReply { expected: "profile" }),
        }
    }

    /// Store the calling identity's profile.
    pub async fn save_caller_profile(&mut self, profile: UserProfile) -> Result<()> {
        let reply = self.call(ClientRequest::SaveCallerProfile { profile }).await?;
        Self::expect_ack(reply)
    }

    /// Send a ping to the service.
    pub async fn ping(&mut self, id: u64) -> Result<()> {
        match self.call(ClientRequest::Ping { id }).await? {
            ServerReply::Pong { id: echoed } if echoed == id => Ok(()),
            _ => Err(Error::UnexpectedReply { expected: "pong" }),
        }
    }
}
