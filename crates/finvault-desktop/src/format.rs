//! Amount formatting helpers
//!
//! Indian-style digit grouping: the last three digits form a group, every
//! group above that has two digits (1,13,000).

use finvault_core::models::DisplaySettings;

/// Symbol for a supported currency code; unrecognized codes fall back to `₹`.
#[must_use]
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        _ => "₹",
    }
}

/// Format an amount per the display preferences: the configured currency
/// symbol, then either full digit grouping (`₹1,13,000`) or a compact
/// magnitude (`₹1.1L`) depending on the compact-numbers toggle.
#[must_use]
pub fn format_amount(display: &DisplaySettings, amount: i64) -> String {
    let symbol = currency_symbol(&display.currency);
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let digits = if display.compact_numbers {
        compact_magnitude(abs)
    } else {
        group_indian(abs)
    };
    format!("{sign}{symbol}{digits}")
}

/// Format a signed percentage with one decimal, e.g. `+12.5%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

#[allow(clippy::cast_precision_loss)]
fn compact_magnitude(abs: u64) -> String {
    if abs >= 10_000_000 {
        format!("{:.1}Cr", abs as f64 / 10_000_000.0)
    } else if abs >= 100_000 {
        format!("{:.1}L", abs as f64 / 100_000.0)
    } else if abs >= 1_000 {
        format!("{:.1}k", abs as f64 / 1_000.0)
    } else {
        abs.to_string()
    }
}

fn group_indian(mut value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }

    let tail = value % 1_000;
    value /= 1_000;

    let mut groups = vec![format!("{tail:03}")];
    while value >= 100 {
        groups.push(format!("{:02}", value % 100));
        value /= 100;
    }
    groups.push(value.to_string());

    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn display(currency: &str, compact: bool) -> DisplaySettings {
        DisplaySettings {
            currency: currency.to_string(),
            compact_numbers: compact,
        }
    }

    #[test]
    fn test_format_amount_grouping() {
        let inr = display("INR", false);
        assert_eq!(format_amount(&inr, 0), "₹0");
        assert_eq!(format_amount(&inr, 999), "₹999");
        assert_eq!(format_amount(&inr, 1_000), "₹1,000");
        assert_eq!(format_amount(&inr, 54_000), "₹54,000");
        assert_eq!(format_amount(&inr, 113_000), "₹1,13,000");
        assert_eq!(format_amount(&inr, 482_350), "₹4,82,350");
        assert_eq!(format_amount(&inr, 1_356_000), "₹13,56,000");
        assert_eq!(format_amount(&inr, 10_000_000), "₹1,00,00,000");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(&display("INR", false), -25_000), "-₹25,000");
    }

    #[test]
    fn test_format_amount_compact_toggle() {
        let full = display("INR", false);
        let compact = display("INR", true);
        assert_eq!(format_amount(&compact, 850), "₹850");
        assert_eq!(format_amount(&compact, 54_000), "₹54.0k");
        assert_eq!(format_amount(&compact, 113_000), "₹1.1L");
        assert_eq!(format_amount(&compact, -113_000), "-₹1.1L");
        assert_eq!(format_amount(&compact, 25_000_000), "₹2.5Cr");
        // Same amount, toggle off
        assert_eq!(format_amount(&full, 113_000), "₹1,13,000");
    }

    #[test]
    fn test_format_amount_currency_symbol() {
        assert_eq!(format_amount(&display("USD", false), 54_000), "$54,000");
        assert_eq!(format_amount(&display("EUR", true), 113_000), "€1.1L");
        // Unknown codes keep the rupee symbol
        assert_eq!(format_amount(&display("GBP", false), 100), "₹100");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "+12.5%");
        assert_eq!(format_percent(-3.1), "-3.1%");
    }
}
