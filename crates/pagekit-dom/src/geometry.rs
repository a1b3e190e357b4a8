//! Geometry APIs
//!
//! DOMRect and page-coordinate lookups over the layout boxes.

use crate::{Document, NodeId, Position};

/// A point in page (document) coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    pub const ORIGIN: PagePoint = PagePoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Check if point is inside (edges inclusive)
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Grow the left and top edges outward; right and bottom stay put
    pub fn expand_leading(&self, dx: f64, dy: f64) -> DOMRect {
        DOMRect::from_xywh(self.x - dx, self.y - dy, self.width + dx, self.height + dy)
    }
}

/// Page position of an element.
///
/// Absolutely positioned elements report their inline `left`/`top`;
/// everything else sums layout offsets up the parent chain. Non-elements
/// sit at the origin.
pub fn page_position(doc: &Document, id: NodeId) -> PagePoint {
    let tree = doc.tree();
    let Some(elem) = tree.element(id) else {
        return PagePoint::ORIGIN;
    };

    if elem.style.position == Position::Absolute {
        if let (Some(left), Some(top)) = (elem.style.left, elem.style.top) {
            return PagePoint::new(left, top);
        }
    }

    let parent = tree
        .parent(id)
        .map(|p| page_position(doc, p))
        .unwrap_or(PagePoint::ORIGIN);
    PagePoint::new(parent.x + elem.layout.offset_left, parent.y + elem.layout.offset_top)
}

/// Rendered `(width, height)`, zero for non-elements
pub fn rendered_size(doc: &Document, id: NodeId) -> (f64, f64) {
    doc.tree()
        .element(id)
        .map(|e| (e.rendered_width(), e.rendered_height()))
        .unwrap_or((0.0, 0.0))
}

/// Page-space bounding rect from the element's own rendered size
pub fn bounding_rect(doc: &Document, id: NodeId) -> DOMRect {
    let pos = page_position(doc, id);
    let (width, height) = rendered_size(doc, id);
    DOMRect::from_xywh(pos.x, pos.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutBox;

    #[test]
    fn test_dom_rect() {
        let rect = DOMRect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.left(), 10.0);
    }

    #[test]
    fn test_contains_point_inclusive() {
        let rect = DOMRect::from_xywh(0.0, 0.0, 100.0, 100.0);

        assert!(rect.contains_point(50.0, 50.0));
        assert!(rect.contains_point(100.0, 0.0));
        assert!(!rect.contains_point(150.0, 50.0));
    }

    #[test]
    fn test_expand_leading() {
        let rect = DOMRect::from_xywh(100.0, 100.0, 50.0, 40.0).expand_leading(20.0, 10.0);
        assert_eq!(rect, DOMRect::from_xywh(80.0, 90.0, 70.0, 50.0));
        assert_eq!(rect.right(), 150.0);
        assert_eq!(rect.bottom(), 140.0);
    }

    #[test]
    fn test_page_position_sums_offsets() {
        let mut doc = Document::new();
        let body = doc.body();
        let panel = doc.append_element(body, "div", None, LayoutBox::new(10.0, 20.0, 300.0, 200.0));
        let item = doc.append_element(panel, "div", None, LayoutBox::new(5.0, 7.0, 50.0, 50.0));

        assert_eq!(page_position(&doc, item), PagePoint::new(15.0, 27.0));
    }

    #[test]
    fn test_page_position_absolute() {
        let mut doc = Document::new();
        let body = doc.body();
        let panel = doc.append_element(body, "div", None, LayoutBox::new(10.0, 20.0, 300.0, 200.0));
        let item = doc.append_element(panel, "div", None, LayoutBox::new(5.0, 7.0, 50.0, 50.0));
        doc.tree_mut().element_mut(item).unwrap().style.place_absolute(200.0, 150.0);

        assert_eq!(page_position(&doc, item), PagePoint::new(200.0, 150.0));
        assert_eq!(bounding_rect(&doc, item), DOMRect::from_xywh(200.0, 150.0, 50.0, 50.0));
    }
}
