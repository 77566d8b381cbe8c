//! Behavior attached to the catalogue snapshot.
//!
//! ## Components
//!
//! - [`OrderProcessor`]: validates and applies quantity-lowering orders
//! - [`FavoriteToggler`]: flips the per-flavor favorite flag
//! - [`Session`]: owns the catalogue and the bridge, runs start-up
//! - [`Event`] / [`Session::dispatch`]: thin event layer over the two
//!   processors
//!
//! ## Ownership
//!
//! Only the order processor writes `quantity`; only the toggler writes
//! `highlighted`. Both take `&mut FlavorRecord`, so a session (or any other
//! caller) serializes access per record through the borrow checker. A
//! multi-threaded host must put the session behind a single lock or queue.
//!
//! ## Example
//!
//! ```
//! use flavor_catalog::config::CatalogConfig;
//! use flavor_catalog::engine::{Event, EventOutcome, Session};
//! use flavor_catalog::page::{FlavorMarkup, Page, ShopBuilder};
//! use rand::SeedableRng;
//!
//! let config = CatalogConfig::default();
//! let tree = ShopBuilder::new()
//!     .flavor(FlavorMarkup::new("Vanilla", "Classic bean", "$1.00"))
//!     .build()
//!     .unwrap();
//! let page = Page::from_config(tree, &config).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut session = Session::start(page, config, &mut rng).unwrap();
//!
//! session.bridge_mut().enter_amount("0").unwrap();
//! assert!(matches!(session.dispatch(Event::SubmitOrder), EventOutcome::Ordered(_)));
//! ```

pub mod dispatch;
pub mod favorites;
pub mod orders;
pub mod session;

pub use dispatch::{Event, EventOutcome};
pub use favorites::FavoriteToggler;
pub use orders::OrderProcessor;
pub use session::Session;
