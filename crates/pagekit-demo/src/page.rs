//! Demo page and its breakpoint inspector

use pagekit_devtools::{ConsoleValue, DevToolsError};
use pagekit_dnd::{DragController, DragState};
use pagekit_dom::{geometry, Document, LayoutBox, Position};

/// Body with a draggable card, a bin, and a zero-sized tray inside a shelf
pub fn build() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    if let Some(elem) = doc.tree_mut().element_mut(body) {
        elem.layout = LayoutBox::new(0.0, 0.0, 1024.0, 768.0);
    }

    doc.append_element(body, "div", Some("src"), LayoutBox::new(20.0, 20.0, 60.0, 40.0));
    doc.append_element(body, "div", Some("bin"), LayoutBox::new(200.0, 200.0, 120.0, 120.0));
    let shelf = doc.append_element(body, "div", Some("shelf"), LayoutBox::new(400.0, 40.0, 200.0, 60.0));
    doc.append_element(shelf, "span", Some("tray"), LayoutBox::new(0.0, 0.0, 0.0, 0.0));
    doc
}

/// Evaluate an inspector expression against the paused page.
///
/// `#id` describes an element, `scroll` the viewport offset and `state` the
/// controller.
pub fn inspect(doc: &Document, controller: &DragController, expr: &str) -> Result<ConsoleValue, DevToolsError> {
    if let Some(id) = expr.strip_prefix('#') {
        let node = doc
            .get_element_by_id(id)
            .ok_or_else(|| DevToolsError::UnknownElement(id.to_string()))?;
        let elem = doc
            .tree()
            .element(node)
            .ok_or_else(|| DevToolsError::UnknownElement(id.to_string()))?;
        let rect = geometry::bounding_rect(doc, node);
        return Ok(ConsoleValue::object([
            ("tag", ConsoleValue::from(elem.tag.as_str())),
            ("x", rect.x.into()),
            ("y", rect.y.into()),
            ("width", rect.width.into()),
            ("height", rect.height.into()),
            ("absolute", (elem.style.position == Position::Absolute).into()),
            ("hidden", elem.style.is_hidden().into()),
            ("zIndex", elem.style.z_index.map(f64::from).into()),
        ]));
    }

    match expr {
        "scroll" => {
            let (x, y) = doc.scroll_offset();
            Ok(ConsoleValue::Array(vec![x.into(), y.into()]))
        }
        "state" => Ok(ConsoleValue::from(match controller.state() {
            DragState::Idle => "idle",
            DragState::Dragging => "dragging",
        })),
        _ => Err(DevToolsError::EvaluationFailed(format!("{expr} is not defined"))),
    }
}
