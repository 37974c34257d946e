//! String helpers.
//!
//! All lengths are counted in characters, not bytes, so truncation never
//! splits a multi-byte code point.

/// Truncates `s` to at most `max_len` characters, ending with `suffix`.
///
/// Strings already within the limit are returned unchanged.
///
/// # Example
///
/// ```
/// use portal_core::util::strings::truncate;
///
/// assert_eq!(truncate("weather forecast", 10, "..."), "weather...");
/// assert_eq!(truncate("short", 10, "..."), "short");
/// ```
pub fn truncate(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Uppercases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `camelCase` to `kebab-case`.
///
/// Every ASCII uppercase letter becomes `-` plus its lowercase form, so a
/// leading capital produces a leading dash (`"Foo"` becomes `"-foo"`).
pub fn camel_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Converts `kebab-case` to `camelCase`.
///
/// Only a dash followed by an ASCII lowercase letter is folded; other dashes
/// are kept.
pub fn kebab_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_within_limit() {
        assert_eq!(truncate("abc", 3, "..."), "abc");
        assert_eq!(truncate("", 3, "..."), "");
    }

    #[test]
    fn test_truncate_over_limit() {
        assert_eq!(truncate("abcdefghij", 6, "..."), "abc...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("接口市场开放平台", 5, "…"), "接口市场…");
    }

    #[test]
    fn test_truncate_suffix_longer_than_limit() {
        assert_eq!(truncate("abcdef", 2, "..."), "...");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("interfaceInfoId"), "interface-info-id");
        assert_eq!(camel_to_kebab("plain"), "plain");
        assert_eq!(camel_to_kebab("Leading"), "-leading");
    }

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("interface-info-id"), "interfaceInfoId");
        assert_eq!(kebab_to_camel("trailing-"), "trailing-");
        assert_eq!(kebab_to_camel("a-1"), "a-1");
    }
}
