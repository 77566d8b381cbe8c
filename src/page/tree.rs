//! Slab-backed display tree.
//!
//! ## Memory Model
//!
//! Nodes live in a [`Slab`]; a node's slab key is its [`DisplayRef`].
//! Nodes are never removed, so handles stay valid for the life of the tree.
//!
//! ## Example
//!
//! ```
//! use flavor_catalog::page::{Node, PageTree, Selector};
//!
//! let mut tree = PageTree::new();
//! let root = tree.root();
//! let meta = tree.append(root, Node::new("div").with_class("meta")).unwrap();
//! tree.append(meta, Node::new("span").with_class("price").with_text("$1.00")).unwrap();
//!
//! let price = Selector::parse(".meta .price").unwrap();
//! let found = tree.select_first(root, &price).unwrap();
//! assert_eq!(tree.text_content(found), "$1.00");
//! ```

use slab::Slab;

use crate::error::PageError;
use crate::page::{Node, Selector};
use crate::types::DisplayRef;

/// Display tree with a `body` root.
#[derive(Debug, Clone)]
pub struct PageTree {
    nodes: Slab<Node>,
    root: usize,
}

impl Default for PageTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTree {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a tree with room for `capacity` nodes besides the root.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity + 1);
        let root = nodes.insert(Node::new("body"));
        Self { nodes, root }
    }

    #[inline]
    pub fn root(&self) -> DisplayRef {
        DisplayRef::from_raw(self.root)
    }

    /// Total nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is never removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: DisplayRef) -> bool {
        self.nodes.contains(node.raw())
    }

    #[inline]
    pub fn get(&self, node: DisplayRef) -> Option<&Node> {
        self.nodes.get(node.raw())
    }

    #[inline]
    pub fn get_mut(&mut self, node: DisplayRef) -> Option<&mut Node> {
        self.nodes.get_mut(node.raw())
    }

    fn require(&self, node: DisplayRef) -> Result<&Node, PageError> {
        self.get(node).ok_or(PageError::UnknownNode(node))
    }

    fn require_mut(&mut self, node: DisplayRef) -> Result<&mut Node, PageError> {
        self.get_mut(node).ok_or(PageError::UnknownNode(node))
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// Attach `node` as the last child of `parent`.
    pub fn append(&mut self, parent: DisplayRef, node: Node) -> Result<DisplayRef, PageError> {
        self.insert_child(parent, node, None)
    }

    /// Attach `node` as the first child of `parent`.
    pub fn prepend(&mut self, parent: DisplayRef, node: Node) -> Result<DisplayRef, PageError> {
        self.insert_child(parent, node, Some(0))
    }

    fn insert_child(
        &mut self,
        parent: DisplayRef,
        mut node: Node,
        position: Option<usize>,
    ) -> Result<DisplayRef, PageError> {
        self.require(parent)?;

        node.parent = Some(parent.raw());
        node.children.clear();
        let key = self.nodes.insert(node);

        let children = &mut self.require_mut(parent)?.children;
        match position {
            Some(index) => children.insert(index.min(children.len()), key),
            None => children.push(key),
        }
        Ok(DisplayRef::from_raw(key))
    }

    pub fn parent(&self, node: DisplayRef) -> Option<DisplayRef> {
        self.get(node)?.parent.map(DisplayRef::from_raw)
    }

    pub fn children(&self, node: DisplayRef) -> Vec<DisplayRef> {
        self.get(node)
            .map(|n| n.children.iter().copied().map(DisplayRef::from_raw).collect())
            .unwrap_or_default()
    }

    /// `node` followed by its ancestors, innermost first, up to the root.
    pub fn ancestors_inclusive(&self, node: DisplayRef) -> Vec<DisplayRef> {
        let mut chain = Vec::new();
        let mut current = self.contains(node).then_some(node);
        while let Some(n) = current {
            chain.push(n);
            current = self.parent(n);
        }
        chain
    }

    /// Descendants of `scope` in document order, `scope` excluded.
    pub fn descendants(&self, scope: DisplayRef) -> Vec<DisplayRef> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = match self.get(scope) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(key) = stack.pop() {
            out.push(DisplayRef::from_raw(key));
            if let Some(node) = self.nodes.get(key) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Every descendant of `scope` matching `selector`, in document order.
    ///
    /// Ancestor steps of the selector only match nodes strictly inside
    /// `scope`.
    pub fn select_all(&self, scope: DisplayRef, selector: &Selector) -> Vec<DisplayRef> {
        self.descendants(scope)
            .into_iter()
            .filter(|&candidate| {
                let chain: Vec<&Node> = self
                    .ancestors_inclusive(candidate)
                    .into_iter()
                    .take_while(|&n| n != scope)
                    .filter_map(|n| self.get(n))
                    .collect();
                selector.matches_chain(&chain)
            })
            .collect()
    }

    pub fn select_first(&self, scope: DisplayRef, selector: &Selector) -> Option<DisplayRef> {
        self.select_all(scope, selector).into_iter().next()
    }

    /// First node anywhere in the tree whose `id` attribute is `id`.
    pub fn find_by_id(&self, id: &str) -> Option<DisplayRef> {
        self.descendants(self.root())
            .into_iter()
            .find(|&n| self.get(n).and_then(Node::id) == Some(id))
    }

    /// Own text plus all descendant text, in document order.
    pub fn text_content(&self, node: DisplayRef) -> String {
        let mut text = match self.get(node) {
            Some(n) => n.text.clone(),
            None => return String::new(),
        };
        for descendant in self.descendants(node) {
            if let Some(n) = self.get(descendant) {
                text.push_str(&n.text);
            }
        }
        text
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn set_text(&mut self, node: DisplayRef, text: impl Into<String>) -> Result<(), PageError> {
        self.require_mut(node)?.text = text.into();
        Ok(())
    }

    pub fn set_attr(
        &mut self,
        node: DisplayRef,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), PageError> {
        self.require_mut(node)?.attrs.insert(name.into(), value.into());
        Ok(())
    }

    pub fn add_class(&mut self, node: DisplayRef, class: &str) -> Result<bool, PageError> {
        Ok(self.require_mut(node)?.add_class(class))
    }

    pub fn remove_class(&mut self, node: DisplayRef, class: &str) -> Result<bool, PageError> {
        Ok(self.require_mut(node)?.remove_class(class))
    }

    pub fn has_class(&self, node: DisplayRef, class: &str) -> bool {
        self.get(node).is_some_and(|n| n.has_class(class))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// body > div#container > (div.flavor > div.meta > span.price) x2
    fn two_flavors() -> (PageTree, Vec<DisplayRef>) {
        let mut tree = PageTree::new();
        let container = tree
            .append(tree.root(), Node::new("div").with_id("container"))
            .unwrap();
        let mut flavors = Vec::new();
        for price in ["$1.00", "$2.00"] {
            let flavor = tree.append(container, Node::new("div").with_class("flavor")).unwrap();
            let meta = tree.append(flavor, Node::new("div").with_class("meta")).unwrap();
            tree.append(meta, Node::new("span").with_class("price").with_text(price))
                .unwrap();
            flavors.push(flavor);
        }
        (tree, flavors)
    }

    #[test]
    fn test_append_and_prepend_order() {
        let mut tree = PageTree::new();
        let root = tree.root();
        let b = tree.append(root, Node::new("b")).unwrap();
        let c = tree.append(root, Node::new("c")).unwrap();
        let a = tree.prepend(root, Node::new("a")).unwrap();
        assert_eq!(tree.children(root), vec![a, b, c]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_append_to_unknown_parent() {
        let mut tree = PageTree::new();
        let ghost = DisplayRef::from_raw(42);
        assert_eq!(
            tree.append(ghost, Node::new("div")),
            Err(PageError::UnknownNode(ghost))
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_descendants_document_order() {
        let (tree, flavors) = two_flavors();
        let tags: Vec<_> = tree
            .descendants(flavors[0])
            .into_iter()
            .map(|n| tree.get(n).unwrap().tag.clone())
            .collect();
        assert_eq!(tags, vec!["div", "span"]);
    }

    #[test]
    fn test_select_all_scoped() {
        let (tree, flavors) = two_flavors();
        let price = Selector::parse(".meta .price").unwrap();

        let all = tree.select_all(tree.root(), &price);
        assert_eq!(all.len(), 2);

        let scoped = tree.select_all(flavors[1], &price);
        assert_eq!(scoped.len(), 1);
        assert_eq!(tree.text_content(scoped[0]), "$2.00");

        // `.flavor` is the scope itself, so it cannot satisfy an ancestor step
        let through_scope = Selector::parse(".flavor .price").unwrap();
        assert!(tree.select_all(flavors[0], &through_scope).is_empty());
        assert_eq!(tree.select_all(tree.root(), &through_scope).len(), 2);
    }

    #[test]
    fn test_text_content_concatenates() {
        let (mut tree, flavors) = two_flavors();
        tree.set_text(flavors[0], "Flavor: ").unwrap();
        assert_eq!(tree.text_content(flavors[0]), "Flavor: $1.00");
    }

    #[test]
    fn test_find_by_id_and_ancestors() {
        let (tree, flavors) = two_flavors();
        let container = tree.find_by_id("container").unwrap();
        assert_eq!(tree.parent(flavors[0]), Some(container));

        let span = tree.descendants(flavors[0])[1];
        assert_eq!(
            tree.ancestors_inclusive(span)[..3],
            [span, tree.descendants(flavors[0])[0], flavors[0]]
        );
        assert!(tree.ancestors_inclusive(DisplayRef::from_raw(999)).is_empty());
    }

    #[test]
    fn test_class_mutation() {
        let (mut tree, flavors) = two_flavors();
        assert!(tree.add_class(flavors[0], "highlighted").unwrap());
        assert!(tree.has_class(flavors[0], "highlighted"));
        assert!(tree.remove_class(flavors[0], "highlighted").unwrap());
        assert!(!tree.has_class(flavors[0], "highlighted"));
    }
}
