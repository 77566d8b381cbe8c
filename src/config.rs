//! Session configuration.
//!
//! ```
//! use flavor_catalog::config::CatalogConfig;
//! use rust_decimal::Decimal;
//!
//! let config = CatalogConfig::default().with_cheap_price_threshold(Decimal::new(200, 2));
//! assert!(config.validate().is_ok());
//! ```

use rust_decimal::Decimal;

use crate::error::ConfigError;
use crate::page::PageLayout;

/// Price below which a flavor counts as cheap: 1.50
pub const DEFAULT_CHEAP_PRICE_THRESHOLD: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// Seeded stock is drawn from `[0, DEFAULT_STOCK_CEILING)`
pub const DEFAULT_STOCK_CEILING: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Strict upper bound for the cheap-flavor listing
    pub cheap_price_threshold: Decimal,

    /// Exclusive upper bound for seeded stock
    pub stock_ceiling: u32,

    /// Where the page keeps each field
    pub layout: PageLayout,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cheap_price_threshold: DEFAULT_CHEAP_PRICE_THRESHOLD,
            stock_ceiling: DEFAULT_STOCK_CEILING,
            layout: PageLayout::default(),
        }
    }
}

impl CatalogConfig {
    pub fn with_cheap_price_threshold(mut self, threshold: Decimal) -> Self {
        self.cheap_price_threshold = threshold;
        self
    }

    pub fn with_stock_ceiling(mut self, ceiling: u32) -> Self {
        self.stock_ceiling = ceiling;
        self
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check the limits and compile the layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_limits()?;
        self.layout.compile()?;
        Ok(())
    }

    /// Check the threshold and stock ceiling only. The layout is checked
    /// where a page is built from it ([`crate::page::Page::from_config`]).
    pub fn validate_limits(&self) -> Result<(), ConfigError> {
        if self.cheap_price_threshold.is_sign_negative() && !self.cheap_price_threshold.is_zero() {
            return Err(ConfigError::NegativeThreshold(self.cheap_price_threshold));
        }
        if self.stock_ceiling == 0 {
            return Err(ConfigError::ZeroStockCeiling);
        }
        Ok(())
    }
}
