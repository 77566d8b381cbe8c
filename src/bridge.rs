//! Presentation bridge: the boundary between the catalogue core and
//! whatever surface displays it.
//!
//! ## Capabilities
//!
//! - [`MarkupSource`]: read-only access to product nodes, consumed once by
//!   the extractor
//! - [`RenderSink`]: write-only display updates, driven by the order
//!   processor and the favorite toggler
//! - [`PresentationBridge`]: the full surface a [`Session`](crate::engine::Session)
//!   runs against (stock seeding, choice list, order form)
//!
//! The core only ever sees [`DisplayRef`] handles; what they point at is the
//! surface's business.

use rand::RngCore;

use crate::catalog::FlavorField;
use crate::types::{DisplayRef, FlavorRecord, OrderRequest};

/// Read access to the product nodes of the current display.
pub trait MarkupSource {
    /// Product nodes in document order.
    fn flavor_nodes(&self) -> Vec<DisplayRef>;

    /// Text of every element matching `field` inside `node`, in document
    /// order. Callers decide what zero or several matches mean.
    fn field_texts(&self, node: DisplayRef, field: FlavorField) -> Vec<String>;
}

/// Display updates for a single node.
pub trait RenderSink {
    /// Show a new stock count for `display`.
    fn render_quantity(&mut self, display: DisplayRef, quantity: u32);

    /// Add or remove the highlight marker on `display`.
    fn render_highlight(&mut self, display: DisplayRef, highlighted: bool);
}

/// Everything a session needs from its display surface.
pub trait PresentationBridge: MarkupSource + RenderSink {
    /// Give every product node a random stock count in `[0, ceiling)`.
    /// Runs once, before extraction.
    fn seed_stock(&mut self, rng: &mut dyn RngCore, ceiling: u32);

    /// Build the selectable list: one `{label: name, value: id}` per record,
    /// in input order.
    fn populate_choices(&mut self, records: &[FlavorRecord]);

    /// Read the order form when the submit event fires.
    ///
    /// `None` when the form has no selectable flavor or no amount field.
    fn submit_order(&self) -> Option<OrderRequest>;

    /// `target` followed by the nodes enclosing it, innermost first. Lets a
    /// click on a child element resolve to its product node.
    fn enclosing(&self, target: DisplayRef) -> Vec<DisplayRef> {
        vec![target]
    }
}

/// Sink that drops every update. Handy when driving the processors
/// without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render_quantity(&mut self, _display: DisplayRef, _quantity: u32) {}

    fn render_highlight(&mut self, _display: DisplayRef, _highlighted: bool) {}
}

/// Sink that records every update in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub updates: Vec<RenderUpdate>,
}

/// One recorded display update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderUpdate {
    Quantity(DisplayRef, u32),
    Highlight(DisplayRef, bool),
}

impl RenderSink for RecordingSink {
    fn render_quantity(&mut self, display: DisplayRef, quantity: u32) {
        self.updates.push(RenderUpdate::Quantity(display, quantity));
    }

    fn render_highlight(&mut self, display: DisplayRef, highlighted: bool) {
        self.updates.push(RenderUpdate::Highlight(display, highlighted));
    }
}
