//! Drag options
//!
//! The plain-data half of a draggable registration. Keys use the camelCase
//! names page scripts already pass around, so an options object can be
//! loaded straight from JSON.

use pagekit_dom::{Document, NodeId};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Stacking order used when `zIndex` is not given
pub const DEFAULT_Z_INDEX: i32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DragOptions {
    /// Element to drag instead of the event target
    pub drag_source_id: Option<String>,
    /// Drag a deep clone instead of the source itself
    pub drag_source_clone: bool,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    /// Element whose page position seeds the grab offset
    pub origin_id: Option<String>,
    pub z_index: i32,
    /// Transparency fraction while dragging
    pub opacity: Option<f64>,
    pub drag_source_visible: bool,
    /// Drop targets, tested in order
    pub droppable_ids: Option<Vec<String>>,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            drag_source_id: None,
            drag_source_clone: false,
            offset_x: None,
            offset_y: None,
            origin_id: None,
            z_index: DEFAULT_Z_INDEX,
            opacity: None,
            drag_source_visible: true,
            droppable_ids: None,
        }
    }
}

impl DragOptions {
    /// Parse and validate an options object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: DragOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values no drag could use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(opacity) = self.opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigError::InvalidOpacity(opacity));
            }
        }
        for (axis, value) in [('x', self.offset_x), ('y', self.offset_y)] {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(ConfigError::InvalidOffset { axis, value });
            }
        }
        Ok(())
    }
}

/// Look up an element by identifier; a leading `#` is accepted
pub(crate) fn lookup(doc: &Document, ident: &str) -> Option<NodeId> {
    doc.get_element_by_id(ident.strip_prefix('#').unwrap_or(ident))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DragOptions::from_json("{}").unwrap();
        assert_eq!(options, DragOptions::default());
        assert_eq!(options.z_index, 1000);
        assert!(options.drag_source_visible);
        assert!(!options.drag_source_clone);
        assert!(options.droppable_ids.is_none());
    }

    #[test]
    fn test_camel_case_keys() {
        let options = DragOptions::from_json(
            r##"{
                "dragSourceId": "handle",
                "dragSourceClone": true,
                "offsetX": 4,
                "offsetY": 6.5,
                "originId": "frame",
                "zIndex": 20,
                "opacity": 0.4,
                "dragSourceVisible": false,
                "droppableIds": ["#bin", "tray"]
            }"##,
        )
        .unwrap();

        assert_eq!(options.drag_source_id.as_deref(), Some("handle"));
        assert!(options.drag_source_clone);
        assert_eq!(options.offset_x, Some(4.0));
        assert_eq!(options.offset_y, Some(6.5));
        assert_eq!(options.origin_id.as_deref(), Some("frame"));
        assert_eq!(options.z_index, 20);
        assert_eq!(options.opacity, Some(0.4));
        assert!(!options.drag_source_visible);
        assert_eq!(options.droppable_ids, Some(vec!["#bin".to_string(), "tray".to_string()]));
    }

    #[test]
    fn test_rejects_bad_opacity() {
        let err = DragOptions::from_json(r#"{"opacity": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOpacity(v) if v == 1.5));
    }

    #[test]
    fn test_rejects_non_finite_offset() {
        let options = DragOptions { offset_y: Some(f64::NAN), ..DragOptions::default() };
        assert!(matches!(options.validate(), Err(ConfigError::InvalidOffset { axis: 'y', .. })));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(DragOptions::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_lookup_accepts_hash_prefix() {
        let mut doc = Document::new();
        let body = doc.body();
        let bin = doc.append_element(body, "div", Some("bin"), Default::default());

        assert_eq!(lookup(&doc, "bin"), Some(bin));
        assert_eq!(lookup(&doc, "#bin"), Some(bin));
        assert_eq!(lookup(&doc, "#nope"), None);
    }
}
