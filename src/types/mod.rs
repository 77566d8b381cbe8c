//! Core data types for the flavor catalogue
//!
//! ## Types
//!
//! - [`FlavorRecord`]: One flavor in the catalogue snapshot
//! - [`FlavorId`]: Positional identifier in extraction order
//! - [`DisplayRef`]: Opaque handle to the display node of a flavor
//! - [`OrderAmount`]: Validated whole-unit order amount
//! - [`OrderRequest`]: Raw order-form payload
//! - [`OrderReceipt`]: Result of an accepted order
//!
//! ## Prices
//!
//! Prices are [`rust_decimal::Decimal`] values. See [`price`] for parsing,
//! half-up rounding and two-decimal formatting.

mod flavor;
mod order;
mod receipt;
pub mod price;

pub use flavor::{DisplayRef, FlavorId, FlavorRecord};
pub use order::{OrderAmount, OrderRequest};
pub use receipt::OrderReceipt;
