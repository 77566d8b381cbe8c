//! Flavor records: the canonical catalogue entity.
//!
//! A [`FlavorRecord`] is created once by the extractor and lives for the
//! whole session. Price, name and description never change after
//! extraction. `quantity` is only lowered by the order processor and
//! `highlighted` is only flipped by the favorite toggler, so both setters
//! are crate-private.

use std::fmt;

use rust_decimal::Decimal;

// ============================================================================
// Identifiers
// ============================================================================

/// Positional flavor identifier: the record's index in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlavorId(usize);

impl FlavorId {
    /// Wrap a positional index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The positional index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FlavorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to the display node that renders a flavor.
///
/// The core never inspects it; it is handed back to the render sink so the
/// display layer can route updates. Whatever surface issues the handle
/// decides what the raw value means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayRef(usize);

impl DisplayRef {
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }
}

// ============================================================================
// FlavorRecord
// ============================================================================

/// One sellable flavor in the catalogue snapshot.
///
/// ## Example
///
/// ```
/// use flavor_catalog::types::{DisplayRef, FlavorId, FlavorRecord};
/// use rust_decimal::Decimal;
///
/// let record = FlavorRecord::new(
///     FlavorId::new(0),
///     "Vanilla",
///     "Classic bean",
///     Decimal::new(100, 2),
///     5,
///     DisplayRef::from_raw(3),
/// );
/// assert!(record.is_available());
/// assert!(!record.is_highlighted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorRecord {
    id: FlavorId,
    name: String,
    description: String,
    price: Decimal,
    quantity: u32,
    highlighted: bool,
    display: DisplayRef,
}

impl FlavorRecord {
    /// Create a record. Highlight starts off.
    pub fn new(
        id: FlavorId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        quantity: u32,
        display: DisplayRef,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            highlighted: false,
            display,
        }
    }

    #[inline]
    pub fn id(&self) -> FlavorId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Units currently in stock.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[inline]
    pub fn display(&self) -> DisplayRef {
        self.display
    }

    /// `Available` while stock remains, `Depleted` at zero.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Remove `amount` units. Returns the new quantity, or `None` (and
    /// leaves the record untouched) if that would go below zero.
    pub(crate) fn take(&mut self, amount: u64) -> Option<u32> {
        let amount = u32::try_from(amount).ok()?;
        self.quantity = self.quantity.checked_sub(amount)?;
        Some(self.quantity)
    }

    /// Flip the favorite flag and return the new value.
    pub(crate) fn flip_highlight(&mut self) -> bool {
        self.highlighted = !self.highlighted;
        self.highlighted
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
