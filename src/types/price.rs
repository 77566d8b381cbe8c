//! Decimal price utilities.
//!
//! ## Overview
//!
//! Prices enter the system as display text (`"$1.50"`) and are held as
//! [`Decimal`] values from then on. Nothing in the catalogue touches
//! floating point: averages are computed in decimal and rounded half-up to
//! two places.
//!
//! ## Examples
//!
//! ```
//! use flavor_catalog::types::price::{parse_price, format_price};
//!
//! let price = parse_price("$1.50").unwrap();
//! assert_eq!(format_price(price), "1.50");
//! ```

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol stripped from display prices and prepended when formatting.
pub const CURRENCY_SYMBOL: char = '$';

/// Number of decimal places kept for display and averages.
pub const PRICE_DP: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse display text into a price.
///
/// Surrounding whitespace and one leading [`CURRENCY_SYMBOL`] are removed
/// before parsing. Negative amounts are rejected.
///
/// # Returns
///
/// * `Some(Decimal)` - The parsed price
/// * `None` - If the text is empty, not a decimal, or negative
///
/// # Example
///
/// ```
/// use flavor_catalog::types::price::parse_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_price("$2.25"), Some(Decimal::new(225, 2)));
/// assert_eq!(parse_price(" 3 "), Some(Decimal::from(3)));
/// assert_eq!(parse_price("$-1.00"), None);
/// assert_eq!(parse_price("free"), None);
/// ```
pub fn parse_price(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(trimmed)
        .trim_start();

    let value = Decimal::from_str(digits).ok()?;
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    Some(value)
}

/// Round half-up (midpoint away from zero) to two decimal places.
///
/// ```
/// use flavor_catalog::types::price::round_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_price(Decimal::new(1005, 3)), Decimal::new(101, 2));
/// assert_eq!(round_price(Decimal::new(1004, 3)), Decimal::new(100, 2));
/// ```
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a price with exactly two decimal places, no currency symbol.
///
/// ```
/// use flavor_catalog::types::price::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::from(2)), "2.00");
/// assert_eq!(format_price(Decimal::new(15, 1)), "1.50");
/// ```
pub fn format_price(value: Decimal) -> String {
    let mut rounded = round_price(value);
    rounded.rescale(PRICE_DP);
    rounded.to_string()
}

/// Format a price for display, `$` included.
pub fn display_price(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_price(value))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_basic() {
        assert_eq!(parse_price("$1.00"), Some(Decimal::new(100, 2)));
        assert_eq!(parse_price("$0.75"), Some(Decimal::new(75, 2)));
        assert_eq!(parse_price("1.5"), Some(Decimal::new(15, 1)));
        assert_eq!(parse_price("  $ 4.10 "), Some(Decimal::new(410, 2)));
    }

    #[test]
    fn test_parse_price_edge_cases() {
        assert_eq!(parse_price("$0"), Some(Decimal::ZERO));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("$"), None);
        assert_eq!(parse_price("$$1.00"), None);
        assert_eq!(parse_price("-0.50"), None);
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_price(Decimal::new(2005, 3)), Decimal::new(201, 2));
        assert_eq!(round_price(Decimal::new(2004, 3)), Decimal::new(200, 2));
        assert_eq!(round_price(Decimal::new(1_666_667, 6)), Decimal::new(167, 2));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::ZERO), "0.00");
        assert_eq!(format_price(Decimal::new(3, 0)), "3.00");
        assert_eq!(format_price(Decimal::new(12345, 3)), "12.35");
        assert_eq!(display_price(Decimal::new(100, 2)), "$1.00");
    }
}
