//! Drag session state

use std::rc::Rc;

use pagekit_dom::NodeId;

use crate::DragConfig;

/// Per-controller session counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Grab point inside the drag object
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Escape, or released away from every droppable
    Aborted,
    /// Released with no droppables configured
    Dropped,
    /// Released over the droppable with this identifier
    Target(String),
}

impl Resolution {
    pub fn is_dropped(&self) -> bool {
        !matches!(self, Self::Aborted)
    }

    /// Identifier of the droppable that matched
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Target(id) => Some(id),
            _ => None,
        }
    }
}

/// One in-progress drag
#[derive(Debug, Clone)]
pub struct DragSession {
    pub id: SessionId,
    /// Element being moved (source or its clone)
    pub drag_object: NodeId,
    /// Element the pointer went down on
    pub drag_source: NodeId,
    pub offset: Offset,
    pub(crate) config: Rc<DragConfig>,
}

impl DragSession {
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Whether the drag object is a clone of the source
    pub fn is_clone(&self) -> bool {
        self.drag_object != self.drag_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution() {
        assert!(!Resolution::Aborted.is_dropped());
        assert!(Resolution::Dropped.is_dropped());
        assert!(Resolution::Target("bin".into()).is_dropped());

        assert_eq!(Resolution::Target("bin".into()).target_id(), Some("bin"));
        assert_eq!(Resolution::Dropped.target_id(), None);
    }
}
