//! Receipt for an accepted order.

use crate::types::FlavorId;

/// Summary of one accepted order.
///
/// ## Example
///
/// ```
/// use flavor_catalog::types::{FlavorId, OrderReceipt};
///
/// let receipt = OrderReceipt::new(FlavorId::new(0), 3, 2);
/// assert!(!receipt.depleted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Flavor the order was placed against
    pub flavor: FlavorId,

    /// Units taken from stock
    pub amount: u64,

    /// Units left after the order
    pub remaining: u32,
}

impl OrderReceipt {
    pub fn new(flavor: FlavorId, amount: u64, remaining: u32) -> Self {
        Self {
            flavor,
            amount,
            remaining,
        }
    }

    /// The order took the last unit(s).
    pub fn depleted(&self) -> bool {
        self.remaining == 0
    }

    /// A zero-unit order: accepted, changes nothing.
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}
