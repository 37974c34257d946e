//! HTTP client for the API open platform backend.
//!
//! [`ApiClient`] wraps every backend endpoint the portal calls. Responses
//! arrive in a `{ code, data, message }` envelope; a non-zero code becomes
//! [`portal_core::Error::Api`].
//!
//! The client also implements [`portal_session::SessionProvider`], so a
//! `SessionStore` can be backed directly by the live API.

mod client;
mod files;
mod interfaces;
mod invocations;
pub mod models;
mod session;
mod users;

pub use client::{ApiClient, ApiResponse, DEFAULT_BASE_URL};
pub use files::BIZ_USER_AVATAR;
pub use models::{
    IdRequest, InterfaceInfo, InterfaceInfoRequest, InvokeInterfaceRequest, InvokeRecord,
    PageParams, PageResult, RegisterRequest, SortOrder, UpdateUserRequest, UserInterfaceInfo,
};
