//! Declarative access requirements attached to destinations.

use std::fmt;
use std::sync::Arc;

use crate::role::{Role, User};

/// Predicate that replaces rule evaluation for a destination.
///
/// Cloning is cheap (the closure is shared).
#[derive(Clone)]
pub struct CustomCheck(Arc<dyn Fn(Option<&User>) -> bool + Send + Sync>);

impl CustomCheck {
    /// Wraps a predicate over the optional current user.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(Option<&User>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Evaluates the predicate.
    pub fn check(&self, user: Option<&User>) -> bool {
        (self.0)(user)
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCheck(..)")
    }
}

/// Access rule for a destination.
///
/// Equivalent to the record `{ requires_auth, required_role?, custom_check? }`
/// where a custom check, when present, overrides the other two.
///
/// # Example
///
/// ```
/// use portal_acl::{PermissionRequirement, Role};
///
/// let admin_page = PermissionRequirement::from_parts(true, Some(Role::Admin), None);
/// assert!(admin_page.requires_auth());
/// assert_eq!(admin_page.required_role(), Some(Role::Admin));
///
/// let open = PermissionRequirement::from_parts(false, None, None);
/// assert!(matches!(open, PermissionRequirement::AlwaysAllow));
/// ```
#[derive(Debug, Clone, Default)]
pub enum PermissionRequirement {
    /// No login and no role needed (banned users are still turned away).
    #[default]
    AlwaysAllow,
    /// Any logged-in user.
    RequireAuth,
    /// A specific role, optionally also demanding a login first.
    RequireRole {
        /// The role the user must satisfy.
        role: Role,
        /// Whether anonymous users are rejected before the role check.
        requires_auth: bool,
    },
    /// Opaque predicate; overrides all other rules.
    Custom(CustomCheck),
}

impl PermissionRequirement {
    /// Builds the variant matching a flat requirement record.
    pub fn from_parts(
        requires_auth: bool,
        required_role: Option<Role>,
        custom_check: Option<CustomCheck>,
    ) -> Self {
        match (custom_check, required_role) {
            (Some(check), _) => Self::Custom(check),
            (None, Some(role)) => Self::RequireRole {
                role,
                requires_auth,
            },
            (None, None) if requires_auth => Self::RequireAuth,
            (None, None) => Self::AlwaysAllow,
        }
    }

    /// Logged-in users with the given role.
    pub fn role(role: Role) -> Self {
        Self::RequireRole {
            role,
            requires_auth: true,
        }
    }

    /// Destination guarded by a predicate.
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(Option<&User>) -> bool + Send + Sync + 'static,
    {
        Self::Custom(CustomCheck::new(check))
    }

    /// Whether an authenticated user is required.
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::RequireAuth => true,
            Self::RequireRole { requires_auth, .. } => *requires_auth,
            Self::AlwaysAllow | Self::Custom(_) => false,
        }
    }

    /// The role a user must satisfy, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::RequireRole { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// The overriding predicate, if any.
    pub fn custom_check(&self) -> Option<&CustomCheck> {
        match self {
            Self::Custom(check) => Some(check),
            _ => None,
        }
    }
}
