//! Catalogue statistics.
//!
//! Pure functions over a slice of records, recomputed on every call since
//! stock changes underneath them. Neither function depends on quantity or
//! highlight state today, but callers should not cache results across
//! events.

use rust_decimal::Decimal;

use crate::error::StatsError;
use crate::types::price::{display_price, format_price, round_price, CURRENCY_SYMBOL, PRICE_DP};
use crate::types::FlavorRecord;

/// Mean price, rounded half-up to two decimal places.
///
/// # Errors
///
/// [`StatsError::EmptyCatalog`] if `records` is empty,
/// [`StatsError::Overflow`] if the prices sum past [`Decimal::MAX`].
///
/// ```
/// use flavor_catalog::catalog::{average_price, Catalogue};
/// use flavor_catalog::types::DisplayRef;
/// use rust_decimal::Decimal;
///
/// let mut catalogue = Catalogue::new();
/// for cents in [100, 200, 300] {
///     catalogue.push("f", "", Decimal::new(cents, 2), 1, DisplayRef::from_raw(0));
/// }
/// assert_eq!(average_price(catalogue.records()).unwrap(), Decimal::new(200, 2));
/// ```
pub fn average_price(records: &[FlavorRecord]) -> Result<Decimal, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyCatalog);
    }

    let sum = records
        .iter()
        .try_fold(Decimal::ZERO, |acc, record| acc.checked_add(record.price()))
        .ok_or(StatsError::Overflow)?;
    let mean = sum
        .checked_div(Decimal::from(records.len()))
        .ok_or(StatsError::Overflow)?;
    Ok(round_price(mean))
}

/// `"<name> costs $<price>"` for every record priced strictly below
/// `threshold`, in input order.
///
/// The comparison uses the exact price. The printed price keeps two
/// decimals when the markup had at most two, and is printed unrounded
/// otherwise, so `1.499` under a `1.50` threshold reads `"costs $1.499"`.
pub fn cheap_flavors(records: &[FlavorRecord], threshold: Decimal) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.price() < threshold)
        .map(|record| format!("{} costs {}", record.name(), listed_price(record.price())))
        .collect()
}

fn listed_price(price: Decimal) -> String {
    let exact = price.normalize();
    if exact.scale() > PRICE_DP {
        format!("{CURRENCY_SYMBOL}{exact}")
    } else {
        display_price(price)
    }
}

/// Point-in-time summary logged at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueReport {
    pub average_price: Decimal,
    pub cheap_flavors: Vec<String>,
}

impl CatalogueReport {
    pub fn compute(records: &[FlavorRecord], threshold: Decimal) -> Result<Self, StatsError> {
        Ok(Self {
            average_price: average_price(records)?,
            cheap_flavors: cheap_flavors(records, threshold),
        })
    }

    /// Average price as two-decimal text, e.g. `"2.00"`.
    pub fn average_price_text(&self) -> String {
        format_price(self.average_price)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
