//! In-memory display surface implementing the presentation bridge.

use rand::{Rng, RngCore};

use crate::bridge::{MarkupSource, PresentationBridge, RenderSink};
use crate::catalog::FlavorField;
use crate::config::CatalogConfig;
use crate::error::{ConfigError, PageError};
use crate::page::{CompiledLayout, Node, PageLayout, PageTree};
use crate::types::{DisplayRef, FlavorRecord, OrderRequest};

/// A [`PageTree`] plus the layout used to find things in it.
///
/// ## Example
///
/// ```
/// use flavor_catalog::page::{FlavorMarkup, Page, PageLayout, ShopBuilder};
///
/// let tree = ShopBuilder::new()
///     .flavor(FlavorMarkup::new("Vanilla", "Bean", "$1.00"))
///     .build()
///     .unwrap();
/// let page = Page::new(tree, &PageLayout::default()).unwrap();
/// assert_eq!(page.product_nodes().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    tree: PageTree,
    layout: CompiledLayout,
}

impl Page {
    pub fn new(tree: PageTree, layout: &PageLayout) -> Result<Self, PageError> {
        Ok(Self {
            tree,
            layout: layout.compile()?,
        })
    }

    /// Page over `tree` using the layout in `config`.
    pub fn from_config(tree: PageTree, config: &CatalogConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(tree, &config.layout)?)
    }

    #[inline]
    pub fn tree(&self) -> &PageTree {
        &self.tree
    }

    #[inline]
    pub fn layout(&self) -> &CompiledLayout {
        &self.layout
    }

    /// Product nodes in document order.
    pub fn product_nodes(&self) -> Vec<DisplayRef> {
        match self.tree.select_first(self.tree.root(), &self.layout.container) {
            Some(container) => self.tree.select_all(container, &self.layout.flavor),
            None => Vec::new(),
        }
    }

    fn choice_list(&self) -> Option<DisplayRef> {
        self.tree.select_first(self.tree.root(), &self.layout.choice_list)
    }

    fn amount_input(&self) -> Option<DisplayRef> {
        self.tree.select_first(self.tree.root(), &self.layout.amount_input)
    }

    // ========================================================================
    // What the user sees
    // ========================================================================

    /// Displayed stock text for a product node.
    pub fn quantity_text(&self, display: DisplayRef) -> Option<String> {
        self.tree
            .select_first(display, &self.layout.quantity)
            .map(|node| self.tree.text_content(node))
    }

    pub fn is_highlighted(&self, display: DisplayRef) -> bool {
        self.tree.has_class(display, &self.layout.highlight_class)
    }

    /// `(label, value)` of every option in the choice list.
    pub fn choices(&self) -> Vec<(String, String)> {
        let Some(list) = self.choice_list() else {
            return Vec::new();
        };
        self.tree
            .children(list)
            .into_iter()
            .filter_map(|option| self.tree.get(option))
            .filter(|node| node.tag == "option")
            .map(|node| (node.text.clone(), node.attr("value").unwrap_or_default().to_string()))
            .collect()
    }

    // ========================================================================
    // What the user does
    // ========================================================================

    /// Select an option value in the choice list.
    pub fn choose_flavor(&mut self, value: impl Into<String>) -> Result<(), PageError> {
        let list = self.choice_list().ok_or_else(|| missing(&self.layout.choice_list))?;
        self.tree.set_attr(list, "value", value)
    }

    /// Type into the amount input.
    pub fn enter_amount(&mut self, text: impl Into<String>) -> Result<(), PageError> {
        let input = self.amount_input().ok_or_else(|| missing(&self.layout.amount_input))?;
        self.tree.set_attr(input, "value", text)
    }
}

fn missing(selector: &crate::page::Selector) -> PageError {
    PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: "matches nothing on this page",
    }
}

// ============================================================================
// Bridge
// ============================================================================

impl MarkupSource for Page {
    fn flavor_nodes(&self) -> Vec<DisplayRef> {
        self.product_nodes()
    }

    fn field_texts(&self, node: DisplayRef, field: FlavorField) -> Vec<String> {
        self.tree
            .select_all(node, self.layout.field(field))
            .into_iter()
            .map(|n| self.tree.text_content(n))
            .collect()
    }
}

impl RenderSink for Page {
    fn render_quantity(&mut self, display: DisplayRef, quantity: u32) {
        let Some(node) = self.tree.select_first(display, &self.layout.quantity) else {
            log::warn!("no quantity element under node {}", display.raw());
            return;
        };
        if let Err(err) = self.tree.set_text(node, quantity.to_string()) {
            log::warn!("quantity not rendered: {err}");
        }
    }

    fn render_highlight(&mut self, display: DisplayRef, highlighted: bool) {
        let class = &self.layout.highlight_class;
        let result = if highlighted {
            self.tree.add_class(display, class)
        } else {
            self.tree.remove_class(display, class)
        };
        if let Err(err) = result {
            log::warn!("highlight not rendered: {err}");
        }
    }
}

impl PresentationBridge for Page {
    fn seed_stock(&mut self, rng: &mut dyn RngCore, ceiling: u32) {
        for node in self.product_nodes() {
            let stock = if ceiling == 0 { 0 } else { rng.gen_range(0..ceiling) };
            let host = self
                .tree
                .select_first(node, &self.layout.quantity_host)
                .unwrap_or(node);
            let span = Node::new("span")
                .with_class(self.layout.quantity_class.clone())
                .with_text(stock.to_string());
            if let Err(err) = self.tree.prepend(host, span) {
                log::warn!("stock not seeded for node {}: {err}", node.raw());
            }
        }
    }

    fn populate_choices(&mut self, records: &[FlavorRecord]) {
        let Some(list) = self.choice_list() else {
            log::warn!("no choice list matching {}", self.layout.choice_list);
            return;
        };
        for record in records {
            let option = Node::new("option")
                .with_attr("value", record.id().to_string())
                .with_text(record.name());
            if let Err(err) = self.tree.append(list, option) {
                log::warn!("choice not added for {}: {err}", record.name());
            }
        }
    }

    fn submit_order(&self) -> Option<OrderRequest> {
        let list = self.choice_list()?;
        let input = self.tree.get(self.amount_input()?)?;

        // An untouched select submits its first option
        let selection = match self.tree.get(list)?.attr("value") {
            Some(value) => value.to_string(),
            None => {
                let first = self.tree.children(list).into_iter().next()?;
                self.tree.get(first)?.attr("value")?.to_string()
            }
        };
        let amount = input.attr("value").unwrap_or_default().to_string();

        Some(OrderRequest::new(selection, amount))
    }

    fn enclosing(&self, target: DisplayRef) -> Vec<DisplayRef> {
        self.tree.ancestors_inclusive(target)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
