//! Catalogue snapshot and its read-only views.
//!
//! ## Components
//!
//! - [`Catalogue`]: owned, ordered set of [`FlavorRecord`]s
//! - [`extractor`]: builds a catalogue from a [`MarkupSource`](crate::bridge::MarkupSource)
//! - [`stats`]: average price and cheap-flavor listing
//!
//! ## Lifecycle
//!
//! The catalogue is built once, right after stock seeding. Records are
//! never added or removed afterwards and ids stay equal to positions.

pub mod extractor;
pub mod stats;

use std::fmt;

use rust_decimal::Decimal;

use crate::types::{DisplayRef, FlavorId, FlavorRecord};

pub use extractor::{extract_flavors, Extraction};
pub use stats::{average_price, cheap_flavors, CatalogueReport};

/// The four fields every product node must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorField {
    Name,
    Description,
    Price,
    Quantity,
}

impl FlavorField {
    pub fn name(self) -> &'static str {
        match self {
            FlavorField::Name => "name",
            FlavorField::Description => "description",
            FlavorField::Price => "price",
            FlavorField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for FlavorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Catalogue
// ============================================================================

/// Ordered flavor snapshot with positional ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    records: Vec<FlavorRecord>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; its id is the next position.
    ///
    /// ```
    /// use flavor_catalog::catalog::Catalogue;
    /// use flavor_catalog::types::{DisplayRef, FlavorId};
    /// use rust_decimal::Decimal;
    ///
    /// let mut catalogue = Catalogue::new();
    /// let id = catalogue.push("Mint", "Fresh", Decimal::new(125, 2), 4, DisplayRef::from_raw(0));
    /// assert_eq!(id, FlavorId::new(0));
    /// assert_eq!(catalogue.len(), 1);
    /// ```
    pub fn push(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        quantity: u32,
        display: DisplayRef,
    ) -> FlavorId {
        let id = FlavorId::new(self.records.len());
        self.records
            .push(FlavorRecord::new(id, name, description, price, quantity, display));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[FlavorRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlavorRecord> {
        self.records.iter()
    }

    #[inline]
    pub fn get(&self, id: FlavorId) -> Option<&FlavorRecord> {
        self.records.get(id.index())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: FlavorId) -> Option<&mut FlavorRecord> {
        self.records.get_mut(id.index())
    }

    /// Record rendered by `display`, if any.
    pub fn find_by_display(&self, display: DisplayRef) -> Option<FlavorId> {
        self.records
            .iter()
            .find(|record| record.display() == display)
            .map(FlavorRecord::id)
    }

    /// Units in stock across all flavors.
    pub fn total_stock(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.quantity())).sum()
    }

    /// Flavors currently highlighted as favorites.
    pub fn highlighted(&self) -> impl Iterator<Item = &FlavorRecord> {
        self.records.iter().filter(|r| r.is_highlighted())
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a FlavorRecord;
    type IntoIter = std::slice::Iter<'a, FlavorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
