//! Order inputs for the order processor.
//!
//! Both values on the order form are untrusted text. [`OrderAmount`] is
//! the only way to get a validated amount, and [`OrderRequest::flavor_id`]
//! is the only way to turn the selection into an id.

use std::fmt;
use std::str::FromStr;

use crate::error::OrderError;
use crate::types::FlavorId;

// ============================================================================
// OrderAmount
// ============================================================================

/// A validated, non-negative whole number of units.
///
/// ## Parsing rules
///
/// - Surrounding whitespace is ignored; one leading `+` is allowed.
/// - Empty, fractional or non-numeric text is [`OrderError::Malformed`].
/// - `-` followed by digits is [`OrderError::Negative`] (`-0` is zero).
/// - All-digit text too large for `u64` saturates, so it can never fit
///   any stock level.
///
/// ```
/// use flavor_catalog::types::OrderAmount;
///
/// assert_eq!(OrderAmount::parse(" 3 ").unwrap().get(), 3);
/// assert!(OrderAmount::parse("2.5").is_err());
/// assert!(OrderAmount::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OrderAmount(u64);

impl OrderAmount {
    pub const ZERO: OrderAmount = OrderAmount(0);

    #[inline]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Validate raw form text.
    pub fn parse(text: &str) -> Result<Self, OrderError> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderError::Malformed(text.to_string()));
        }

        if negative && digits.bytes().any(|b| b != b'0') {
            return Err(OrderError::Negative(text.to_string()));
        }

        // Only overflow can fail here
        Ok(Self(digits.parse::<u64>().unwrap_or(u64::MAX)))
    }
}

impl FromStr for OrderAmount {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OrderAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// OrderRequest
// ============================================================================

/// Raw order-form payload: the selected option value and the amount text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderRequest {
    pub selection: String,
    pub amount: String,
}

impl OrderRequest {
    pub fn new(selection: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            amount: amount.into(),
        }
    }

    /// Parse the selected option value into a flavor id.
    ///
    /// The id is not checked against the catalogue here.
    pub fn flavor_id(&self) -> Result<FlavorId, OrderError> {
        self.selection
            .trim()
            .parse::<usize>()
            .map(FlavorId::new)
            .map_err(|_| OrderError::UnknownFlavor(self.selection.clone()))
    }

    pub fn amount(&self) -> Result<OrderAmount, OrderError> {
        OrderAmount::parse(&self.amount)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parse_valid() {
        assert_eq!(OrderAmount::parse("0"), Ok(OrderAmount::ZERO));
        assert_eq!(OrderAmount::parse("7"), Ok(OrderAmount::new(7)));
        assert_eq!(OrderAmount::parse("+4"), Ok(OrderAmount::new(4)));
        assert_eq!(OrderAmount::parse("  12\n"), Ok(OrderAmount::new(12)));
        assert_eq!(OrderAmount::parse("-0"), Ok(OrderAmount::ZERO));
    }

    #[test]
    fn test_amount_parse_malformed() {
        for text in ["", "   ", "abc", "2.5", "1e3", "3 4", "-", "+", "--1", "0x10"] {
            assert_eq!(
                OrderAmount::parse(text),
                Err(OrderError::Malformed(text.to_string())),
                "expected {text:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_amount_parse_negative() {
        assert_eq!(
            OrderAmount::parse("-3"),
            Err(OrderError::Negative("-3".to_string()))
        );
    }

    #[test]
    fn test_amount_parse_overflow_saturates() {
        let amount = OrderAmount::parse("99999999999999999999999").unwrap();
        assert_eq!(amount.get(), u64::MAX);
    }

    #[test]
    fn test_request_flavor_id() {
        assert_eq!(OrderRequest::new("2", "1").flavor_id(), Ok(FlavorId::new(2)));
        assert_eq!(
            OrderRequest::new("vanilla", "1").flavor_id(),
            Err(OrderError::UnknownFlavor("vanilla".to_string()))
        );
        assert_eq!(
            OrderRequest::new("-1", "1").flavor_id(),
            Err(OrderError::UnknownFlavor("-1".to_string()))
        );
    }
}
