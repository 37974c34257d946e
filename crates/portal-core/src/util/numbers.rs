//! Number formatting helpers.

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a number with `,` thousands separators and at most three
/// fractional digits.
///
/// Non-finite input formats as `"0"`.
///
/// # Example
///
/// ```
/// use portal_core::util::numbers::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(-9876.54321), "-9,876.543");
/// ```
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return "0".to_string();
    }
    let fixed = trim_fraction(format!("{:.3}", num.abs()));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, c) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let is_zero = grouped == "0" && frac_part.is_none();
    let sign = if num < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a byte count with a binary unit, keeping up to two decimals.
///
/// # Example
///
/// ```
/// use portal_core::util::numbers::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_fraction(format!("{value:.2}")), SIZE_UNITS[unit])
}

/// Formats an amount with a currency symbol and exactly two decimals.
///
/// Non-finite input formats as zero.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{symbol}0.00");
    }
    format!("{symbol}{amount:.2}")
}

/// Drops trailing fractional zeros (and a bare trailing dot).
fn trim_fraction(fixed: String) -> String {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
