//! Where things live in the flavor markup.
//!
//! [`PageLayout`] is the configurable, string form. [`CompiledLayout`] is
//! the parsed form a [`Page`](crate::page::Page) queries with. Defaults
//! follow the shop markup:
//!
//! ```text
//! div#container
//!   div.flavor
//!     div.meta > span.numLeft (seeded), span.price
//!     div.description > h2, p
//! div#footer
//!   select[name="flavor"], input[name="amount"]
//! ```

use crate::catalog::FlavorField;
use crate::error::PageError;
use crate::page::Selector;

/// Selector strings and class names used by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Element holding all product nodes
    pub container: String,
    /// One product node, matched inside the container
    pub flavor: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    /// Element inside a product node that receives the seeded quantity
    pub quantity_host: String,
    /// Class given to seeded quantity elements
    pub quantity_class: String,
    /// Class toggled on favorite product nodes
    pub highlight_class: String,
    /// Flavor choice list on the order form
    pub choice_list: String,
    /// Amount input on the order form
    pub amount_input: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            container: "#container".to_string(),
            flavor: ".flavor".to_string(),
            name: ".description h2".to_string(),
            description: ".description p".to_string(),
            price: ".meta .price".to_string(),
            quantity: ".meta .numLeft".to_string(),
            quantity_host: "div".to_string(),
            quantity_class: "numLeft".to_string(),
            highlight_class: "highlighted".to_string(),
            choice_list: "#footer select[name=\"flavor\"]".to_string(),
            amount_input: "#footer input[name=\"amount\"]".to_string(),
        }
    }
}

impl PageLayout {
    /// Parse every selector.
    pub fn compile(&self) -> Result<CompiledLayout, PageError> {
        Ok(CompiledLayout {
            container: Selector::parse(&self.container)?,
            flavor: Selector::parse(&self.flavor)?,
            name: Selector::parse(&self.name)?,
            description: Selector::parse(&self.description)?,
            price: Selector::parse(&self.price)?,
            quantity: Selector::parse(&self.quantity)?,
            quantity_host: Selector::parse(&self.quantity_host)?,
            quantity_class: class_name(&self.quantity_class)?,
            highlight_class: class_name(&self.highlight_class)?,
            choice_list: Selector::parse(&self.choice_list)?,
            amount_input: Selector::parse(&self.amount_input)?,
        })
    }
}

fn class_name(class: &str) -> Result<String, PageError> {
    let valid = !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(class.to_string())
    } else {
        Err(PageError::InvalidSelector {
            selector: class.to_string(),
            reason: "class names are letters, digits, '-' and '_'",
        })
    }
}

/// Parsed [`PageLayout`].
#[derive(Debug, Clone)]
pub struct CompiledLayout {
    pub container: Selector,
    pub flavor: Selector,
    pub name: Selector,
    pub description: Selector,
    pub price: Selector,
    pub quantity: Selector,
    pub quantity_host: Selector,
    pub quantity_class: String,
    pub highlight_class: String,
    pub choice_list: Selector,
    pub amount_input: Selector,
}

impl CompiledLayout {
    pub fn field(&self, field: FlavorField) -> &Selector {
        match field {
            FlavorField::Name => &self.name,
            FlavorField::Description => &self.description,
            FlavorField::Price => &self.price,
            FlavorField::Quantity => &self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_compiles() {
        let layout = PageLayout::default().compile().unwrap();
        assert_eq!(layout.field(FlavorField::Price).as_str(), ".meta .price");
        assert_eq!(layout.quantity_class, "numLeft");
    }

    #[test]
    fn test_bad_layout() {
        let layout = PageLayout {
            price: ".meta >".to_string(),
            ..PageLayout::default()
        };
        assert!(layout.compile().is_err());

        let layout = PageLayout {
            highlight_class: "fav orite".to_string(),
            ..PageLayout::default()
        };
        assert!(layout.compile().is_err());
    }
}
