//! Well-known destinations.

/// Application root (the interface marketplace).
pub const ROOT: &str = "/";

/// Login form.
pub const LOGIN: &str = "/user/login";

/// Registration form.
pub const REGISTER: &str = "/user/register";

/// Access-denied page.
pub const FORBIDDEN: &str = "/403";

/// Missing-page page.
pub const NOT_FOUND: &str = "/404";
