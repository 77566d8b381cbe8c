//! Session: the single owner of the catalogue.
//!
//! Start-up order matters: stock is seeded first (seeding adds the
//! quantity elements), then the catalogue is extracted, statistics are
//! logged and the choice list is populated. After that the session only
//! reacts to events, one at a time.

use rand::RngCore;

use crate::bridge::PresentationBridge;
use crate::catalog::{extract_flavors, Catalogue, CatalogueReport, Extraction};
use crate::config::CatalogConfig;
use crate::engine::{FavoriteToggler, OrderProcessor};
use crate::error::{ConfigError, ExtractionError, OrderError, StatsError};
use crate::types::{DisplayRef, FlavorId, OrderReceipt};

/// Catalogue, display bridge and processors for one page session.
#[derive(Debug)]
pub struct Session<B> {
    config: CatalogConfig,
    bridge: B,
    catalogue: Catalogue,
    skipped: Vec<ExtractionError>,
    orders: OrderProcessor,
    favorites: FavoriteToggler,
}

impl<B: PresentationBridge> Session<B> {
    /// Seed stock, extract the catalogue, log statistics and fill the
    /// choice list.
    ///
    /// # Errors
    ///
    /// Only invalid limits in `config`. The layout belongs to the bridge,
    /// which was built from it already, so `config.layout` is not consulted
    /// here. Malformed product nodes and statistics failures are logged,
    /// not returned.
    pub fn start<R>(mut bridge: B, config: CatalogConfig, rng: &mut R) -> Result<Self, ConfigError>
    where
        R: RngCore,
    {
        config.validate_limits()?;

        bridge.seed_stock(rng, config.stock_ceiling);
        let Extraction { catalogue, skipped } = extract_flavors(&bridge);

        match CatalogueReport::compute(catalogue.records(), config.cheap_price_threshold) {
            Ok(report) => {
                log::info!("Average price: {}", report.average_price_text());
                log::info!("Cheap flavors: {:?}", report.cheap_flavors);
            }
            Err(err) => log::warn!("no statistics: {err}"),
        }

        bridge.populate_choices(catalogue.records());
        log::info!(
            "session started with {} flavors ({} skipped)",
            catalogue.len(),
            skipped.len()
        );

        Ok(Self {
            config,
            bridge,
            catalogue,
            skipped,
            orders: OrderProcessor::new(),
            favorites: FavoriteToggler::new(),
        })
    }

    /// Fresh statistics over current state.
    pub fn report(&self) -> Result<CatalogueReport, StatsError> {
        CatalogueReport::compute(self.catalogue.records(), self.config.cheap_price_threshold)
    }

    /// Read the order form and apply it.
    pub fn submit_order(&mut self) -> Result<OrderReceipt, OrderError> {
        let Some(request) = self.bridge.submit_order() else {
            return Err(self.orders.reject(OrderError::NoSubmission));
        };

        let id = match request.flavor_id() {
            Ok(id) => id,
            Err(err) => return Err(self.orders.reject(err)),
        };
        let Some(record) = self.catalogue.get_mut(id) else {
            return Err(self.orders.reject(OrderError::UnknownFlavor(request.selection)));
        };

        self.orders.place_order(record, &request.amount, &mut self.bridge)
    }

    /// Toggle the favorite enclosing `target`.
    ///
    /// Returns the flavor and its new flag, or `None` if the click landed
    /// outside every product node.
    pub fn click(&mut self, target: DisplayRef) -> Option<(FlavorId, bool)> {
        let id = self
            .bridge
            .enclosing(target)
            .into_iter()
            .find_map(|node| self.catalogue.find_by_display(node))?;
        let record = self.catalogue.get_mut(id)?;
        let highlighted = self.favorites.toggle_highlight(record, &mut self.bridge);
        Some((id, highlighted))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Product nodes dropped during extraction.
    #[inline]
    pub fn skipped(&self) -> &[ExtractionError] {
        &self.skipped
    }

    #[inline]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    #[inline]
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Mutable display access, e.g. to fill in the order form.
    #[inline]
    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    #[inline]
    pub fn orders(&self) -> &OrderProcessor {
        &self.orders
    }

    #[inline]
    pub fn favorites(&self) -> &FavoriteToggler {
        &self.favorites
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{FlavorMarkup, Page, ShopBuilder};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session(markup: Vec<FlavorMarkup>) -> Session<Page> {
        let config = CatalogConfig::default();
        let tree = ShopBuilder::new().flavors(markup).build().unwrap();
        let page = Page::from_config(tree, &config).unwrap();
        Session::start(page, config, &mut ChaCha8Rng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn test_start_extracts_and_populates() {
        let s = session(vec![
            FlavorMarkup::new("Vanilla", "Bean", "$1.00"),
            FlavorMarkup::new("Mint", "Leaf", "$2.00"),
        ]);
        assert_eq!(s.catalogue().len(), 2);
        assert!(s.skipped().is_empty());
        assert_eq!(s.bridge().choices().len(), 2);

        for record in s.catalogue() {
            assert!(record.quantity() < 20);
            assert_eq!(
                s.bridge().quantity_text(record.display()),
                Some(record.quantity().to_string())
            );
        }
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let tree = ShopBuilder::new().build().unwrap();
        let page = Page::new(tree, &Default::default()).unwrap();
        let config = CatalogConfig::default().with_stock_ceiling(0);
        let result = Session::start(page, config, &mut ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(result, Err(ConfigError::ZeroStockCeiling)));
    }

    #[test]
    fn test_start_uses_the_page_layout() {
        let tree = ShopBuilder::new()
            .flavor(FlavorMarkup::new("Vanilla", "Bean", "$1.00"))
            .build()
            .unwrap();
        let page = Page::new(tree, &Default::default()).unwrap();
        let unused = crate::page::PageLayout {
            flavor: String::new(),
            ..Default::default()
        };
        let config = CatalogConfig::default().with_layout(unused);
        let s = Session::start(page, config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(s.catalogue().len(), 1);
    }

    #[test]
    fn test_start_survives_price_overflow() {
        let huge = "$79228162514264337593543950335";
        let s = session(vec![
            FlavorMarkup::new("Gold", "Leaf", huge),
            FlavorMarkup::new("Platinum", "Dust", huge),
        ]);
        assert_eq!(s.catalogue().len(), 2);
        assert_eq!(s.report(), Err(StatsError::Overflow));
        assert_eq!(s.bridge().choices().len(), 2);
    }

    #[test]
    fn test_submit_unknown_selection() {
        let mut s = session(vec![FlavorMarkup::new("Vanilla", "Bean", "$1.00")]);
        s.bridge_mut().choose_flavor("5").unwrap();
        s.bridge_mut().enter_amount("1").unwrap();
        assert_eq!(
            s.submit_order(),
            Err(OrderError::UnknownFlavor("5".to_string()))
        );
        assert_eq!(s.orders().rejected(), 1);
    }

    #[test]
    fn test_empty_catalogue() {
        let mut s = session(Vec::new());
        assert_eq!(s.report(), Err(StatsError::EmptyCatalog));

        // No options to select
        s.bridge_mut().enter_amount("1").unwrap();
        assert_eq!(s.submit_order(), Err(OrderError::NoSubmission));
    }
}
