//! Input validation helpers used by the registration and profile forms.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("valid phone regex"));

/// Highest value [`password_strength`] reports.
pub const MAX_PASSWORD_STRENGTH: u8 = 3;

/// Returns `true` for `local@domain.tld` shaped addresses.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` for 11-digit mainland China mobile numbers.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Returns `true` when `url` parses as an absolute URL.
///
/// # Example
///
/// ```
/// use portal_core::util::validation::is_valid_url;
///
/// assert!(is_valid_url("https://api.example.com/weather?city=hz"));
/// assert!(is_valid_url("mailto:ops@example.com"));
/// assert!(!is_valid_url("https://"));
/// assert!(!is_valid_url("/relative/path"));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Scores a password from 0 to [`MAX_PASSWORD_STRENGTH`].
///
/// One point each for length >= 8, a lowercase letter, an uppercase letter,
/// a digit, and a symbol; the total is capped.
pub fn password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;
    score.min(MAX_PASSWORD_STRENGTH)
}
