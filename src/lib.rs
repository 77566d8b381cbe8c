//! # Flavor Catalog
//!
//! In-memory flavor catalogue: snapshot extraction from display markup,
//! price statistics, quantity-limited orders and favorites.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (FlavorRecord, OrderAmount, OrderReceipt)
//! - **Catalog**: Owned snapshot, extractor, statistics
//! - **Engine**: Order processor, favorite toggler, session and event dispatch
//! - **Bridge**: Traits the display surface implements
//! - **Page**: In-memory display surface (slab-backed tree + selectors)
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: Prices are `rust_decimal::Decimal`, averages round half-up
//! 2. **Stock Never Negative**: An order either fits the stock or changes nothing
//! 3. **Recoverable Errors**: Bad nodes are skipped, bad orders rejected, nothing aborts
//! 4. **Display-Agnostic Core**: The catalogue only sees opaque display handles
//!
//! ## Example
//!
//! ```
//! use flavor_catalog::{CatalogConfig, Event, EventOutcome, Session};
//! use flavor_catalog::page::{FlavorMarkup, Page, ShopBuilder};
//! use rand::SeedableRng;
//!
//! let config = CatalogConfig::default();
//! let tree = ShopBuilder::new()
//!     .flavor(FlavorMarkup::new("Vanilla", "Classic bean", "$1.00"))
//!     .flavor(FlavorMarkup::new("Mint", "Garden mint", "$2.00"))
//!     .build()
//!     .unwrap();
//! let page = Page::from_config(tree, &config).unwrap();
//! let mut session = Session::start(page, config, &mut rand::rngs::StdRng::seed_from_u64(7)).unwrap();
//!
//! let report = session.report().unwrap();
//! assert_eq!(report.average_price_text(), "1.50");
//! assert_eq!(report.cheap_flavors, vec!["Vanilla costs $1.00"]);
//!
//! let vanilla = session.catalogue().records()[0].display();
//! assert!(matches!(
//!     session.dispatch(Event::Click(vanilla)),
//!     EventOutcome::Toggled { highlighted: true, .. }
//! ));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: FlavorRecord, OrderAmount, OrderReceipt, prices
pub mod types;

/// Catalogue snapshot, extraction and statistics
pub mod catalog;

/// Order processing, favorites, session and event dispatch
pub mod engine;

/// Presentation bridge traits
pub mod bridge;

/// In-memory display surface
pub mod page;

pub mod config;
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use bridge::{MarkupSource, PresentationBridge, RenderSink};
pub use catalog::{average_price, cheap_flavors, extract_flavors, Catalogue, CatalogueReport};
pub use config::CatalogConfig;
pub use engine::{Event, EventOutcome, FavoriteToggler, OrderProcessor, Session};
pub use error::{ConfigError, ExtractionError, OrderError, PageError, StatsError};
pub use types::{DisplayRef, FlavorId, FlavorRecord, OrderAmount, OrderReceipt};
