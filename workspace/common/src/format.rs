//! Number presentation helpers for the result panel, history list and charts.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency prefix used across the page.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format with thousands separators and at most two fraction digits, trailing zeros dropped.
///
/// Halves round away from zero on the shortest decimal form of `value`, so `165349.2` becomes
/// `165,349.2`, `1000` becomes `1,000` and `2.675` becomes `2.68`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = match Decimal::from_str(&value.to_string()) {
        Ok(amount) => amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .abs()
            .normalize()
            .to_string(),
        // Outside Decimal's range
        Err(_) => format!("{:.2}", value.abs()),
    };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Result panel text, e.g. `₹ 191,792.06`.
pub fn format_currency(value: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_amount(value))
}

/// Round half toward positive infinity, matching what charting code in the browser does.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_trims_fraction() {
        assert_eq!(format_amount(165349.2), "165,349.2");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(999.999), "1,000");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(1000.125), "1,000.13");
        assert_eq!(format_amount(2.675), "2.68");
        assert_eq!(format_amount(-2.675), "-2.68");
        assert_eq!(format_amount(0.005), "0.01");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_amount(-25000.75), "-25,000.75");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn currency_prefix() {
        assert_eq!(format_currency(191792.06), "₹ 191,792.06");
    }

    #[test]
    fn rounding_goes_up_on_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(149999.4), 149999.0);
    }
}
