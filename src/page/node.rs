//! Display node for slab-based storage.
//!
//! ## Slab Integration
//!
//! Per the slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - O(1) insert and lookup
//!
//! Parent and child links are slab keys, not references. The same keys are
//! handed out as [`DisplayRef`](crate::types::DisplayRef) handles.

use std::collections::BTreeMap;

/// One element of the display tree.
///
/// ## Example
///
/// ```
/// use flavor_catalog::page::Node;
///
/// let node = Node::new("span").with_class("price").with_text("$1.00");
/// assert!(node.has_class("price"));
/// assert_eq!(node.text, "$1.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Lower-case tag name
    pub tag: String,

    /// Class list, no duplicates
    pub classes: Vec<String>,

    /// Attributes (`id`, `name`, `value`, `type`, ...)
    pub attrs: BTreeMap<String, String>,

    /// Text directly inside this node, before any children
    pub text: String,

    /// Parent slab key, None for the root
    pub(crate) parent: Option<usize>,

    /// Child slab keys in document order
    pub(crate) children: Vec<usize>,
}

impl Node {
    /// Create a detached element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[inline]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    #[inline]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}
