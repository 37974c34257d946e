//! Tag colors for list views.

/// Palette used for avatar and name badges.
pub const PALETTE: [&str; 10] = [
    "#1890ff", "#52c41a", "#722ed1", "#fa8c16", "#eb2f96", "#13c2c2", "#faad14", "#a0d911",
    "#fa541c", "#f759ab",
];

/// Fallback tag color.
pub const DEFAULT_COLOR: &str = "default";

/// Picks a stable palette color from the first character of `name`.
///
/// Empty names get the first palette entry.
pub fn color_for(name: &str) -> &'static str {
    match name.chars().next() {
        Some(c) => PALETTE[c as usize % PALETTE.len()],
        None => PALETTE[0],
    }
}

/// Tag color for an HTTP method (case-sensitive, upper case expected).
pub fn method_color(method: &str) -> &'static str {
    match method {
        "GET" => "green",
        "POST" => "blue",
        "PUT" => "orange",
        "DELETE" => "red",
        "PATCH" => "purple",
        _ => DEFAULT_COLOR,
    }
}

/// Tag color for an interface status: `1` is online.
pub fn status_color(status: i32) -> &'static str {
    if status == 1 { "success" } else { "error" }
}
