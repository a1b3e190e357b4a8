//! Effective box measurement
//!
//! Layout sometimes reports a zero width or height for an element that is
//! visibly sized by its container (inline wrappers, floats without a
//! clearfix). Drop targets are measured through a [`BoxMeasure`] so the
//! fallback can be swapped or disabled.

use pagekit_dom::{geometry, Document, NodeId};

/// Strategy for the size used when hit-testing a droppable
pub trait BoxMeasure {
    /// `(width, height)` of `element`
    fn effective_size(&self, doc: &Document, element: NodeId) -> (f64, f64);
}

impl<F> BoxMeasure for F
where
    F: Fn(&Document, NodeId) -> (f64, f64),
{
    fn effective_size(&self, doc: &Document, element: NodeId) -> (f64, f64) {
        self(doc, element)
    }
}

/// Rendered size, with each zero dimension taken from the nearest ancestor
/// that has a non-zero one. The walk ends at the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct AncestorFallback;

impl BoxMeasure for AncestorFallback {
    fn effective_size(&self, doc: &Document, element: NodeId) -> (f64, f64) {
        let (mut width, mut height) = geometry::rendered_size(doc, element);
        if element == doc.body() {
            return (width, height);
        }

        for ancestor in doc.tree().ancestors(element) {
            if width != 0.0 && height != 0.0 {
                break;
            }
            let (w, h) = geometry::rendered_size(doc, ancestor);
            if width == 0.0 {
                width = w;
            }
            if height == 0.0 {
                height = h;
            }
            if ancestor == doc.body() {
                break;
            }
        }
        (width, height)
    }
}

/// Rendered size only
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderedSize;

impl BoxMeasure for RenderedSize {
    fn effective_size(&self, doc: &Document, element: NodeId) -> (f64, f64) {
        geometry::rendered_size(doc, element)
    }
}
