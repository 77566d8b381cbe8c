//! Builds shop markup in the default [`PageLayout`](crate::page::PageLayout) shape.
//!
//! Used by the demo binary, tests and benchmarks in place of a real
//! document. Fields left out of a [`FlavorMarkup`] are simply not emitted,
//! which is how malformed product nodes are produced.

use crate::catalog::FlavorField;
use crate::error::PageError;
use crate::page::{Node, PageTree};

/// Markup for one product node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorMarkup {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

impl FlavorMarkup {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price.into()),
        }
    }

    /// Drop one field. Quantity is added by stock seeding, so dropping it
    /// here does nothing.
    pub fn without(mut self, field: FlavorField) -> Self {
        match field {
            FlavorField::Name => self.name = None,
            FlavorField::Description => self.description = None,
            FlavorField::Price => self.price = None,
            FlavorField::Quantity => {}
        }
        self
    }
}

/// Collects flavors, then emits the container and the order form.
#[derive(Debug, Clone, Default)]
pub struct ShopBuilder {
    flavors: Vec<FlavorMarkup>,
}

impl ShopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flavor(mut self, markup: FlavorMarkup) -> Self {
        self.flavors.push(markup);
        self
    }

    pub fn flavors(mut self, markup: impl IntoIterator<Item = FlavorMarkup>) -> Self {
        self.flavors.extend(markup);
        self
    }

    pub fn build(self) -> Result<PageTree, PageError> {
        // container + 5 per flavor + footer/form/select/2 inputs
        let mut tree = PageTree::with_capacity(self.flavors.len() * 5 + 6);
        let root = tree.root();

        let container = tree.append(root, Node::new("div").with_id("container"))?;
        for markup in self.flavors {
            let flavor = tree.append(container, Node::new("div").with_class("flavor"))?;

            let meta = tree.append(flavor, Node::new("div").with_class("meta"))?;
            if let Some(price) = markup.price {
                tree.append(meta, Node::new("span").with_class("price").with_text(price))?;
            }

            let description = tree.append(flavor, Node::new("div").with_class("description"))?;
            if let Some(name) = markup.name {
                tree.append(description, Node::new("h2").with_text(name))?;
            }
            if let Some(text) = markup.description {
                tree.append(description, Node::new("p").with_text(text))?;
            }
        }

        let footer = tree.append(root, Node::new("div").with_id("footer"))?;
        let form = tree.append(footer, Node::new("form"))?;
        tree.append(form, Node::new("select").with_attr("name", "flavor"))?;
        tree.append(
            form,
            Node::new("input")
                .with_attr("name", "amount")
                .with_attr("type", "number"),
        )?;
        tree.append(form, Node::new("input").with_attr("type", "submit"))?;

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Selector;

    #[test]
    fn test_build_shape() {
        let tree = ShopBuilder::new()
            .flavor(FlavorMarkup::new("Vanilla", "Bean", "$1.00"))
            .flavor(FlavorMarkup::new("Mint", "Leaf", "$2.00").without(FlavorField::Price))
            .build()
            .unwrap();

        let flavors = tree.select_all(tree.root(), &Selector::parse("#container .flavor").unwrap());
        assert_eq!(flavors.len(), 2);

        let price = Selector::parse(".meta .price").unwrap();
        assert_eq!(tree.select_all(flavors[0], &price).len(), 1);
        assert!(tree.select_all(flavors[1], &price).is_empty());

        let amount = Selector::parse("#footer input[name=\"amount\"]").unwrap();
        assert!(tree.select_first(tree.root(), &amount).is_some());
    }

    #[test]
    fn test_without_quantity_is_noop() {
        let markup = FlavorMarkup::new("a", "b", "$1");
        assert_eq!(markup.clone().without(FlavorField::Quantity), markup);
    }
}
