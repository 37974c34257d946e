//! Access control layer for the portal.
//!
//! This crate decides whether the current user may enter a destination:
//!
//! - [`role`]: roles, users, and the role comparison rules
//! - [`requirement`]: declarative per-destination requirements
//! - [`decision`]: allow/deny results with redirect and reason
//! - [`resolver`]: the ordered rule evaluation
//! - [`paths`]: well-known destinations the resolver redirects to
//!
//! Everything here is pure; sessions and navigation live in
//! `portal-session` and `portal-router`.

pub mod decision;
pub mod paths;
pub mod requirement;
pub mod resolver;
pub mod role;

pub use decision::{DenyReason, Denial, PermissionDecision};
pub use requirement::{CustomCheck, PermissionRequirement};
pub use resolver::resolve;
pub use role::{Role, User, is_admin, is_banned, is_logged_in, role_satisfies};
