//! DOM Tree (arena-based allocation)

use crate::{ElementData, Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data, if `id` is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Mutable element data, if `id` is an element
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Unlink a node from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Iterate ancestors, nearest first, excluding `id` itself
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Deep-copy a subtree; the copy is detached and its id attributes are
    /// kept as-is, mirroring `cloneNode(true)`
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let Some(node) = self.get(id) else { return NodeId::NONE };
        let mut copy = node.clone();
        copy.parent = NodeId::NONE;
        copy.first_child = NodeId::NONE;
        copy.last_child = NodeId::NONE;
        copy.prev_sibling = NodeId::NONE;
        copy.next_sibling = NodeId::NONE;

        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        let copy_id = self.push(copy);
        for child in children {
            let child_copy = self.clone_subtree(child);
            self.append_child(copy_id, child_copy);
        }
        copy_id
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("span");
        let b = tree.create_text("hi");

        tree.append_child(tree.root(), div);
        tree.append_child(div, a);
        tree.append_child(div, b);

        let kids: Vec<_> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(tree.parent(a), Some(div));
    }

    #[test]
    fn test_reparent_detaches() {
        let mut tree = DomTree::new();
        let first = tree.create_element("div");
        let second = tree.create_element("div");
        let child = tree.create_element("p");

        tree.append_child(first, child);
        tree.append_child(second, child);

        assert_eq!(tree.children(first).count(), 0);
        assert_eq!(tree.parent(child), Some(second));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        let leaf = tree.create_element("span");
        tree.append_child(tree.root(), outer);
        tree.append_child(outer, inner);
        tree.append_child(inner, leaf);

        let chain: Vec<_> = tree.ancestors(leaf).collect();
        assert_eq!(chain, vec![inner, outer, tree.root()]);
    }

    #[test]
    fn test_clone_subtree_is_deep_and_detached() {
        let mut tree = DomTree::new();
        let card = tree.create_element("div");
        let label = tree.create_text("card");
        tree.append_child(tree.root(), card);
        tree.append_child(card, label);

        let copy = tree.clone_subtree(card);

        assert_ne!(copy, card);
        assert_eq!(tree.parent(copy), None);
        let (copied_label, node) = tree.children(copy).next().unwrap();
        assert_ne!(copied_label, label);
        assert_eq!(node.as_text(), Some("card"));
    }
}
