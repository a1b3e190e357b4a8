//! DOM helper
//!
//! Small shared routines for event handlers: page coordinates, target
//! resolution and default-action suppression.

use crate::geometry::{self, PagePoint};
use crate::{Document, DomEvent, NodeId};

/// Stateless DOM helper
pub struct DomHelper;

impl DomHelper {
    /// Page coordinates of an element
    pub fn page_coords(doc: &Document, id: NodeId) -> PagePoint {
        geometry::page_position(doc, id)
    }

    /// Resolve the element an event originated from.
    ///
    /// Text nodes resolve to their parent element; unknown or missing
    /// targets resolve to `None`.
    pub fn resolve_target(doc: &Document, event: &DomEvent) -> Option<NodeId> {
        let target = event.target.filter(|t| t.is_valid())?;
        let node = doc.tree().get(target)?;
        if node.is_element() {
            return Some(target);
        }
        if node.is_text() {
            return doc.tree().parent(target).filter(|p| doc.tree().element(*p).is_some());
        }
        None
    }

    /// Suppress the default action and stop propagation
    pub fn stop_event(event: &mut DomEvent) {
        event.prevent_default();
        event.stop_propagation();
    }
}
