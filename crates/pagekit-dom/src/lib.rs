//! pagekit DOM - Document Object Model
//!
//! Arena-backed element tree with just enough layout, style and event
//! state to drive page-side helpers without a rendering engine.

mod node;
mod style;
mod tree;
mod document;
pub mod geometry;
pub mod events;
pub mod helper;

pub use node::{Node, NodeData, ElementData, LayoutBox};
pub use style::{InlineStyle, Position, Visibility, TransparencySupport};
pub use tree::DomTree;
pub use document::{Document, ListenerKind};
pub use geometry::{DOMRect, PagePoint};
pub use events::{DomEvent, EventKind, Key};
pub use helper::DomHelper;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
