// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Vinay Associates

//! Caller identity and access-control types.
//!
//! This module contains the types used to gate moderation operations:
//! Principal, Caller, UserRole, ApprovalStatus, and UserApprovalInfo.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Opaque identity of an authenticated user.
///
/// Principals are assigned by the identity provider and treated as opaque
/// text here; only basic shape checks are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Parse a principal from its textual form.
    pub fn from_text(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidPrincipal(text.to_string()));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::InvalidPrincipal(text.to_string()));
        }
        Ok(Principal(trimmed.to_string()))
    }

    /// Returns the textual form of the principal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Principal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Principal::from_text(s)
    }
}

/// The session identity threaded into every remote call.
///
/// Modeled as an explicit value rather than ambient state so callers can
/// see exactly which identity a request is made under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Caller {
    /// No authenticated session.
    Anonymous,
    /// An authenticated session for the given principal.
    Authenticated { principal: Principal },
}

impl Caller {
    /// Creates an authenticated caller for the given principal.
    pub fn authenticated(principal: Principal) -> Self {
        Caller::Authenticated { principal }
    }

    /// Returns true if this caller has an authenticated session.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Caller::Authenticated { .. })
    }

    /// Returns the principal for authenticated callers.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated { principal } => Some(principal),
        }
    }
}

/// Role assigned to a user by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access, including testimonial moderation.
    Admin,
    /// Approved user.
    User,
    /// Unauthenticated or unapproved visitor.
    Guest,
}

impl UserRole {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// Moderation state of a user's access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Requested but not yet reviewed.
    Pending,
    /// Granted access.
    Approved,
    /// Denied access.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(Error::InvalidApprovalStatus(s.to_string())),
        }
    }
}

/// A user's approval record as listed on the admin surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserApprovalInfo {
    /// The requesting principal.
    pub principal: Principal,
    /// Current approval status.
    pub status: ApprovalStatus,
}

/// Profile stored for an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
