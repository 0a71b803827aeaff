//! Number formatting for report tables.

use num_format::{Locale, ToFormattedString};

/// Integer with thousands separators, e.g. `1,234,567`
#[must_use]
pub fn pretty(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Length scaled to KB or MB with one decimal, e.g. `12.3 MB`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scaled(value: u64) -> String {
    if value > 999_999 {
        format!("{:.1} MB", value as f64 / 1_000_000.0)
    } else if value > 999 {
        format!("{:.1} KB", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Six-character bin size label such as `  5 kb` or `2.5 mb`.
///
/// `fractional` keeps one decimal for the 2.5/25/250 style floors so that 2,500
/// does not print as `2 kb`. Values under 1,000 are padded on the side chosen by
/// `right_justify`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bin_size(value: u64, fractional: bool, right_justify: bool) -> String {
    if value >= 1_000_000 {
        if fractional {
            format!("{:3.1} mb", value as f64 / 1_000_000.0)
        } else {
            format!("{:3} mb", value / 1_000_000)
        }
    } else if value >= 10_000 || (value >= 1_000 && !fractional) {
        format!("{:3} kb", value / 1_000)
    } else if value >= 1_000 {
        format!("{:3.1} kb", value as f64 / 1_000.0)
    } else if right_justify {
        format!("   {value:3}")
    } else {
        format!("{value:3}   ")
    }
}

/// Bin tables step 1, 2.5, 5 per decade; every third entry is the fractional one.
#[must_use]
pub fn is_fractional_bin(index: usize) -> bool {
    index % 3 == 2
}
