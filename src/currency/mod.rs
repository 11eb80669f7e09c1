//! Rupee amount and percentage rendering used inside recommendation text.
//!
//! Output is fixed: `₹` symbol, comma grouping in threes, at most two fraction
//! digits with trailing zeros trimmed. No locale negotiation happens here.

pub const CURRENCY_SYMBOL: &str = "₹";
const GROUPING_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 2;

/// Formats a plain number with grouping, e.g. `70200` → `70,200`, `1234.5` → `1,234.5`.
pub fn format_number(value: f64) -> String {
    let body = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (body.as_str(), ""),
    };
    let mut rendered = group_digits(int_part, GROUPING_SEPARATOR);
    if !frac_part.is_empty() {
        rendered.push('.');
        rendered.push_str(frac_part);
    }
    if value < 0.0 && rendered.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        rendered.insert(0, '-');
    }
    rendered
}

/// Formats a rupee amount, e.g. `4800` → `₹4,800`.
pub fn format_amount(amount: f64) -> String {
    let number = format_number(amount);
    match number.strip_prefix('-') {
        Some(positive) => format!("-{CURRENCY_SYMBOL}{positive}"),
        None => format!("{CURRENCY_SYMBOL}{number}"),
    }
}

/// Formats a percentage value with one decimal and no sign, e.g. `93.6`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}")
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(800.0), "800");
        assert_eq!(format_number(4800.0), "4,800");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
    }

    #[test]
    fn trims_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(99.999), "100");
        assert_eq!(format_number(10.25), "10.25");
    }

    #[test]
    fn renders_negative_amounts_with_leading_sign() {
        assert_eq!(format_amount(-2500.0), "-₹2,500");
        assert_eq!(format_amount(-0.001), "₹0");
        assert_eq!(format_amount(75000.0), "₹75,000");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(93.6), "93.6");
        assert_eq!(format_percent(6.4), "6.4");
    }
}
