//! Number display shared by cards, tables and chart tooltips: `en`
//! thousands separators, whole numbers without decimals, everything else
//! with two.

use num_format::{Locale, ToFormattedString};

pub fn format_count(value: i64) -> String {
    value.to_formatted_string(&Locale::en)
}

pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        return format_count(value as i64);
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, format_count(whole.parse().unwrap_or_default()), cents)
}

/// Blank while the value is unknown.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_default()
}
