//! Document - High-level document API

use std::collections::BTreeSet;

use crate::{DomTree, LayoutBox, NodeId, TransparencySupport};

/// Document-level listener slots a helper can install while it needs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    KeyPress,
}

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Viewport scroll offset
    scroll: (f64, f64),
    /// Transparency mechanism the host understands
    transparency: TransparencySupport,
    /// Installed document-level listeners
    listeners: BTreeSet<ListenerKind>,
}

impl Document {
    /// Create a document with `<html>` and `<body>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html);
        tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            body_element: body,
            scroll: (0.0, 0.0),
            transparency: TransparencySupport::default(),
            listeners: BTreeSet::new(),
        }
    }

    /// Use a different transparency mechanism
    pub fn with_transparency(mut self, support: TransparencySupport) -> Self {
        self.transparency = support;
        self
    }

    pub fn transparency(&self) -> TransparencySupport {
        self.transparency
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Create an element, give it an id and layout, and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, id: Option<&str>, layout: LayoutBox) -> NodeId {
        let node = self.tree.create_element(tag);
        if let Some(elem) = self.tree.element_mut(node) {
            elem.id = id.map(str::to_string);
            elem.layout = layout;
        }
        self.tree.append_child(parent, node);
        node
    }

    /// Get element by ID (first match in tree order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element_with_id(self.tree.root(), id)
    }

    fn find_element_with_id(&self, start: NodeId, target_id: &str) -> Option<NodeId> {
        for (node_id, node) in self.tree.children(start) {
            if let Some(elem) = node.as_element() {
                if elem.id.as_deref() == Some(target_id) {
                    return Some(node_id);
                }
            }
            if let Some(found) = self.find_element_with_id(node_id, target_id) {
                return Some(found);
            }
        }
        None
    }

    /// Viewport scroll offset `(x, y)`
    pub fn scroll_offset(&self) -> (f64, f64) {
        self.scroll
    }

    /// Scroll the viewport; negative offsets clamp to zero
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll = (x.max(0.0), y.max(0.0));
    }

    /// Install a document-level listener
    pub fn add_listener(&mut self, kind: ListenerKind) {
        if self.listeners.insert(kind) {
            tracing::trace!(?kind, "document listener installed");
        }
    }

    /// Remove a document-level listener (no-op if absent)
    pub fn remove_listener(&mut self, kind: ListenerKind) {
        if self.listeners.remove(&kind) {
            tracing::trace!(?kind, "document listener removed");
        }
    }

    pub fn has_listener(&self, kind: ListenerKind) -> bool {
        self.listeners.contains(&kind)
    }

    /// Number of installed document-level listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let doc = Document::new();
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
    }

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::new();
        let body = doc.body();
        let list = doc.append_element(body, "ul", Some("list"), LayoutBox::default());
        let item = doc.append_element(list, "li", Some("item"), LayoutBox::default());

        assert_eq!(doc.get_element_by_id("list"), Some(list));
        assert_eq!(doc.get_element_by_id("item"), Some(item));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_detached_elements_are_not_found() {
        let mut doc = Document::new();
        let body = doc.body();
        let node = doc.append_element(body, "div", Some("gone"), LayoutBox::default());
        doc.tree_mut().detach(node);

        assert_eq!(doc.get_element_by_id("gone"), None);
    }

    #[test]
    fn test_listeners() {
        let mut doc = Document::new();
        doc.add_listener(ListenerKind::PointerMove);
        doc.add_listener(ListenerKind::PointerMove);
        assert_eq!(doc.listener_count(), 1);

        doc.remove_listener(ListenerKind::PointerMove);
        doc.remove_listener(ListenerKind::KeyPress);
        assert!(!doc.has_listener(ListenerKind::PointerMove));
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut doc = Document::new();
        doc.scroll_to(-5.0, 40.0);
        assert_eq!(doc.scroll_offset(), (0.0, 40.0));
    }
}
