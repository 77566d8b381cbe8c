//! In-memory display surface.
//!
//! ## Architecture
//!
//! - [`Node`]: one element (tag, classes, attributes, text)
//! - [`PageTree`]: slab arena of nodes; slab keys are the
//!   [`DisplayRef`](crate::types::DisplayRef) handles the core carries
//! - [`Selector`]: descendant-combinator CSS subset used to locate fields
//! - [`PageLayout`]: configurable selectors and class names
//! - [`Page`]: tree + compiled layout, implements
//!   [`PresentationBridge`](crate::bridge::PresentationBridge)
//! - [`ShopBuilder`]: emits the default shop markup
//!
//! The catalogue core never imports this module; it only talks to the
//! bridge traits.

pub mod builder;
pub mod layout;
pub mod node;
pub mod selector;
pub mod surface;
pub mod tree;

pub use builder::{FlavorMarkup, ShopBuilder};
pub use layout::{CompiledLayout, PageLayout};
pub use node::Node;
pub use selector::Selector;
pub use surface::Page;
pub use tree::PageTree;
