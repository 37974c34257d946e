//! Permission decisions.
//!
//! A denial is data, never an error: callers must match on
//! [`PermissionDecision`] to get at the redirect, so it cannot be ignored.

use std::fmt;

/// Why access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// A login is required and nobody is logged in.
    LoginRequired,
    /// The account is banned.
    AccountBanned,
    /// The user lacks the required role, or a custom check failed.
    InsufficientPermission,
}

impl DenyReason {
    /// User-facing message for this reason.
    pub fn message(&self) -> &'static str {
        match self {
            Self::LoginRequired => "please log in first",
            Self::AccountBanned => "account is banned",
            Self::InsufficientPermission => "insufficient permission",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Details of a refused destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    /// Where to send the user instead.
    pub redirect_to: Option<String>,
    /// Why, for the user-facing warning.
    pub reason: Option<DenyReason>,
}

impl Denial {
    /// Denial with both a redirect and a reason.
    pub fn new(redirect_to: impl Into<String>, reason: DenyReason) -> Self {
        Self {
            redirect_to: Some(redirect_to.into()),
            reason: Some(reason),
        }
    }
}

/// Outcome of evaluating a requirement against the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionDecision {
    /// Access granted; there is never a redirect or reason.
    Allowed,
    /// Access refused.
    Denied(Denial),
}

impl PermissionDecision {
    /// Shorthand for a denial with redirect and reason.
    pub fn deny(redirect_to: impl Into<String>, reason: DenyReason) -> Self {
        Self::Denied(Denial::new(redirect_to, reason))
    }

    /// Returns `true` if access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Redirect target of a denial.
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Allowed => None,
            Self::Denied(denial) => denial.redirect_to.as_deref(),
        }
    }

    /// Reason of a denial.
    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allowed => None,
            Self::Denied(denial) => denial.reason,
        }
    }
}
