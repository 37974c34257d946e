//! Roles, users, and role comparison.
//!
//! A user holds exactly one [`Role`]. The comparison helpers take
//! `Option<&User>` because "nobody is logged in" is an ordinary input, never
//! a placeholder user.

use std::fmt;
use std::str::FromStr;

use portal_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Coarse authorization level attached to a user.
///
/// Wire values are lowercase (`"user"`, `"admin"`, `"ban"`). Anything else
/// the API sends deserializes to [`Role::Unknown`], which no requirement
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular marketplace user.
    User,
    /// Administrator; may manage interface listings.
    Admin,
    /// Banned account.
    Ban,
    /// A role this client does not recognise.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Ban => "ban",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label shown on profile and admin pages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "Regular user",
            Self::Admin => "Administrator",
            Self::Ban => "Banned",
            Self::Unknown => "Unknown",
        }
    }

    /// Tag color used next to the label.
    pub fn tag_color(&self) -> &'static str {
        match self {
            Self::User => "blue",
            Self::Admin => "geekblue",
            Self::Ban => "red",
            Self::Unknown => "default",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "ban" => Ok(Self::Ban),
            other => Err(Error::invalid_data(format!("Unknown role: {other}"))),
        }
    }
}

/// The signed-in user as returned by the API.
///
/// Field names follow the API's camelCase JSON. `id == 0` and a missing
/// `user_role` both mark a malformed, partially populated payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Opaque identity.
    pub id: u64,
    /// Display name.
    pub user_name: Option<String>,
    /// Avatar URL.
    pub user_avatar: Option<String>,
    /// Free-form profile text.
    pub user_profile: Option<String>,
    /// Authorization level.
    pub user_role: Option<Role>,
    /// API access key used to sign interface calls.
    pub access_key: Option<String>,
    /// API secret key used to sign interface calls.
    pub secret_key: Option<String>,
    /// Remaining balance.
    pub balance: Option<f64>,
    /// Creation timestamp as sent by the API.
    pub create_time: Option<String>,
    /// Last update timestamp as sent by the API.
    pub update_time: Option<String>,
}

impl User {
    /// Creates a user with only identity and role set.
    pub fn new(id: u64, role: Role) -> Self {
        Self {
            id,
            user_role: Some(role),
            ..Default::default()
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// The user's role, if the payload carried one.
    pub fn role(&self) -> Option<Role> {
        self.user_role
    }
}

/// `true` iff a user is present with a non-zero id and a role.
pub fn is_logged_in(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.id != 0 && u.user_role.is_some())
}

/// `true` iff a user is present and is an administrator.
pub fn is_admin(user: Option<&User>) -> bool {
    user.and_then(User::role) == Some(Role::Admin)
}

/// `true` iff a user is present and banned.
pub fn is_banned(user: Option<&User>) -> bool {
    user.and_then(User::role) == Some(Role::Ban)
}

/// Whether `user` meets `required`.
///
/// Banned users fail every requirement, including none at all. Without a
/// required role any logged-in user passes. Roles other than `User` and
/// `Admin` are never satisfiable.
pub fn role_satisfies(user: Option<&User>, required: Option<Role>) -> bool {
    if is_banned(user) {
        return false;
    }
    match required {
        None | Some(Role::User) => is_logged_in(user),
        Some(Role::Admin) => is_admin(user),
        Some(Role::Ban | Role::Unknown) => false,
    }
}
