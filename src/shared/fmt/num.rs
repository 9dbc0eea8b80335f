//! Count formatting with thousands separators.

use crate::shared::units::parse_lossy;

/// Adds `,` thousands separators to a plain decimal string.
///
/// Keeps the sign and the fractional part exactly as given.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Render a numeric string with grouping separators, keeping the precision
/// the source carried (trailing fractional zeros are dropped).
pub fn format_count(raw: &str) -> String {
    group_thousands(&parse_lossy(raw).normalize().to_string())
}

/// Block heights are integers; any fractional part is truncated.
pub fn format_block_height(raw: &str) -> String {
    group_thousands(&parse_lossy(raw).trunc().normalize().to_string())
}
