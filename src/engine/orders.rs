//! Order processor: the quantity state machine.
//!
//! ## Rules
//!
//! - An order is valid iff the amount is a whole number `>= 0` and does not
//!   exceed the record's stock.
//! - A valid order lowers stock by exactly the amount and re-renders the
//!   record's quantity. Zero-unit orders are valid and change nothing.
//! - An invalid order changes nothing and comes back as an [`OrderError`].
//!   Repeating it gives the same error; nothing is retried.
//!
//! Stock only goes down. There is no restock.

use crate::bridge::RenderSink;
use crate::error::OrderError;
use crate::types::{FlavorRecord, OrderAmount, OrderReceipt};

/// Applies orders to single records and keeps running totals.
///
/// ## Example
///
/// ```
/// use flavor_catalog::bridge::RecordingSink;
/// use flavor_catalog::engine::OrderProcessor;
/// use flavor_catalog::types::{DisplayRef, FlavorId, FlavorRecord, OrderAmount};
/// use rust_decimal::Decimal;
///
/// let mut record = FlavorRecord::new(
///     FlavorId::new(0), "Vanilla", "", Decimal::ONE, 5, DisplayRef::from_raw(1),
/// );
/// let mut sink = RecordingSink::default();
/// let mut orders = OrderProcessor::new();
///
/// let receipt = orders.place(&mut record, OrderAmount::new(3), &mut sink).unwrap();
/// assert_eq!(receipt.remaining, 2);
/// assert!(orders.place(&mut record, OrderAmount::new(10), &mut sink).is_err());
/// assert_eq!(record.quantity(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderProcessor {
    accepted: u64,
    rejected: u64,
    units_sold: u64,
}

impl OrderProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a validated amount to `record`.
    pub fn place<S>(
        &mut self,
        record: &mut FlavorRecord,
        amount: OrderAmount,
        sink: &mut S,
    ) -> Result<OrderReceipt, OrderError>
    where
        S: RenderSink + ?Sized,
    {
        let available = record.quantity();
        let Some(remaining) = record.take(amount.get()) else {
            return Err(self.reject(OrderError::InsufficientStock {
                name: record.name().to_string(),
                requested: amount.get(),
                available,
            }));
        };

        self.accepted += 1;
        self.units_sold += amount.get();
        sink.render_quantity(record.display(), remaining);

        log::debug!(
            "order accepted: {} x{} ({} -> {})",
            record.name(),
            amount,
            available,
            remaining
        );
        Ok(OrderReceipt::new(record.id(), amount.get(), remaining))
    }

    /// Validate raw amount text, then [`place`](Self::place) it.
    pub fn place_order<S>(
        &mut self,
        record: &mut FlavorRecord,
        amount: &str,
        sink: &mut S,
    ) -> Result<OrderReceipt, OrderError>
    where
        S: RenderSink + ?Sized,
    {
        match OrderAmount::parse(amount) {
            Ok(amount) => self.place(record, amount, sink),
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Count and log a rejection.
    pub(crate) fn reject(&mut self, err: OrderError) -> OrderError {
        self.rejected += 1;
        log::warn!("order rejected: {err}");
        err
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    #[inline]
    pub fn units_sold(&self) -> u64 {
        self.units_sold
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{RecordingSink, RenderUpdate};
    use crate::types::{DisplayRef, FlavorId};
    use rust_decimal::Decimal;

    fn vanilla(quantity: u32) -> FlavorRecord {
        FlavorRecord::new(
            FlavorId::new(0),
            "Vanilla",
            "Bean",
            Decimal::new(100, 2),
            quantity,
            DisplayRef::from_raw(9),
        )
    }

    #[test]
    fn test_valid_order_decrements_and_renders() {
        let mut record = vanilla(5);
        let mut sink = RecordingSink::default();
        let mut orders = OrderProcessor::new();

        let receipt = orders.place_order(&mut record, "3", &mut sink).unwrap();
        assert_eq!(receipt, OrderReceipt::new(FlavorId::new(0), 3, 2));
        assert_eq!(record.quantity(), 2);
        assert_eq!(
            sink.updates,
            vec![RenderUpdate::Quantity(DisplayRef::from_raw(9), 2)]
        );
        assert_eq!(orders.accepted(), 1);
        assert_eq!(orders.units_sold(), 3);
    }

    #[test]
    fn test_exact_stock_depletes() {
        let mut record = vanilla(4);
        let mut sink = RecordingSink::default();
        let receipt = OrderProcessor::new()
            .place(&mut record, OrderAmount::new(4), &mut sink)
            .unwrap();
        assert!(receipt.depleted());
        assert!(!record.is_available());
    }

    #[test]
    fn test_insufficient_stock_is_idempotent() {
        let mut record = vanilla(3);
        let mut sink = RecordingSink::default();
        let mut orders = OrderProcessor::new();

        let first = orders.place_order(&mut record, "10", &mut sink);
        let second = orders.place_order(&mut record, "10", &mut sink);

        let expected = Err(OrderError::InsufficientStock {
            name: "Vanilla".to_string(),
            requested: 10,
            available: 3,
        });
        assert_eq!(first, expected);
        assert_eq!(second, expected);
        assert_eq!(record.quantity(), 3);
        assert!(sink.updates.is_empty());
        assert_eq!(orders.rejected(), 2);
        assert_eq!(orders.accepted(), 0);
    }

    #[test]
    fn test_malformed_and_negative_amounts() {
        let mut record = vanilla(3);
        let mut sink = RecordingSink::default();
        let mut orders = OrderProcessor::new();

        for raw in ["", "two", "1.5"] {
            assert_eq!(
                orders.place_order(&mut record, raw, &mut sink),
                Err(OrderError::Malformed(raw.to_string()))
            );
        }
        assert_eq!(
            orders.place_order(&mut record, "-1", &mut sink),
            Err(OrderError::Negative("-1".to_string()))
        );
        assert_eq!(record.quantity(), 3);
        assert_eq!(orders.rejected(), 4);
        assert!(sink.updates.is_empty());
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let mut record = vanilla(3);
        let mut sink = RecordingSink::default();
        let mut orders = OrderProcessor::new();
        for _ in 0..3 {
            let receipt = orders.place(&mut record, OrderAmount::ZERO, &mut sink).unwrap();
            assert!(receipt.is_empty());
        }
        assert_eq!(record.quantity(), 3);
    }

    #[test]
    fn test_order_on_depleted_record() {
        let mut record = vanilla(0);
        let mut sink = RecordingSink::default();
        let mut orders = OrderProcessor::new();
        assert!(orders.place_order(&mut record, "1", &mut sink).is_err());
        assert!(orders.place_order(&mut record, "0", &mut sink).is_ok());
        assert_eq!(record.quantity(), 0);
    }

    #[test]
    fn test_oversized_amount() {
        let mut record = vanilla(3);
        let mut sink = RecordingSink::default();
        let result = OrderProcessor::new().place_order(&mut record, "99999999999999999999", &mut sink);
        assert!(matches!(result, Err(OrderError::InsufficientStock { requested: u64::MAX, .. })));
        assert_eq!(record.quantity(), 3);
    }
}
