//! Error types for the flavor catalogue.
//!
//! Every failure here is recoverable. Extraction errors drop one node,
//! order errors reject one order, statistics errors ask the caller to guard
//! against an empty catalogue. Nothing ends the session.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::FlavorField;
use crate::types::DisplayRef;

/// A product node could not be turned into a [`FlavorRecord`](crate::types::FlavorRecord).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("node {} has no {field} field", .node.raw())]
    MissingField { node: DisplayRef, field: FlavorField },

    #[error("node {} has {count} {field} fields, expected exactly one", .node.raw())]
    AmbiguousField {
        node: DisplayRef,
        field: FlavorField,
        count: usize,
    },

    #[error("node {} has an empty name", .node.raw())]
    EmptyName { node: DisplayRef },

    #[error("node {} has unparsable price {text:?}", .node.raw())]
    InvalidPrice { node: DisplayRef, text: String },

    #[error("node {} has unparsable quantity {text:?}", .node.raw())]
    InvalidQuantity { node: DisplayRef, text: String },
}

impl ExtractionError {
    /// The display node that was skipped.
    pub fn node(&self) -> DisplayRef {
        match self {
            ExtractionError::MissingField { node, .. }
            | ExtractionError::AmbiguousField { node, .. }
            | ExtractionError::EmptyName { node }
            | ExtractionError::InvalidPrice { node, .. }
            | ExtractionError::InvalidQuantity { node, .. } => *node,
        }
    }
}

/// An order was rejected. The record it targeted is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("amount {0:?} is not a whole number")]
    Malformed(String),

    #[error("amount {0:?} is negative")]
    Negative(String),

    #[error("insufficient stock for {name}: requested {requested}, {available} left")]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u32,
    },

    #[error("no flavor matches selection {0:?}")]
    UnknownFlavor(String),

    #[error("order form has no selection or amount")]
    NoSubmission,
}

/// Statistics were requested over zero records.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("statistics requested over an empty catalogue")]
    EmptyCatalog,

    #[error("prices sum past the representable range")]
    Overflow,
}

/// Display-surface failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        selector: String,
        reason: &'static str,
    },

    #[error("no display node {}", .0.raw())]
    UnknownNode(DisplayRef),
}

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cheap price threshold must not be negative, got {0}")]
    NegativeThreshold(Decimal),

    #[error("stock ceiling must be at least 1")]
    ZeroStockCeiling,

    #[error(transparent)]
    Layout(#[from] PageError),
}
