//! Inline style
//!
//! The handful of style properties script writes directly on an element.

/// CSS `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}

/// CSS `visibility`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// How the host expresses partial transparency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransparencySupport {
    /// Standard `opacity` property
    #[default]
    Opacity,
    /// Legacy `filter: alpha(opacity=N)` with N in 0..=100
    AlphaFilter,
}

/// Inline style declarations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub position: Position,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub z_index: Option<i32>,
    pub opacity: Option<f64>,
    pub filter: Option<String>,
    pub visibility: Visibility,
}

impl InlineStyle {
    /// Place the element at absolute page coordinates
    pub fn place_absolute(&mut self, left: f64, top: f64) {
        self.position = Position::Absolute;
        self.left = Some(left);
        self.top = Some(top);
    }

    /// Apply a transparency fraction using whichever mechanism the host has
    pub fn apply_opacity(&mut self, opacity: f64, support: TransparencySupport) {
        let opacity = opacity.clamp(0.0, 1.0);
        match support {
            TransparencySupport::Opacity => self.opacity = Some(opacity),
            TransparencySupport::AlphaFilter => {
                self.filter = Some(format!("alpha(opacity={})", (opacity * 100.0).round() as u32));
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_absolute() {
        let mut style = InlineStyle::default();
        style.place_absolute(12.0, 34.0);

        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.left, Some(12.0));
        assert_eq!(style.top, Some(34.0));
    }

    #[test]
    fn test_opacity_mechanisms() {
        let mut modern = InlineStyle::default();
        modern.apply_opacity(0.5, TransparencySupport::Opacity);
        assert_eq!(modern.opacity, Some(0.5));
        assert!(modern.filter.is_none());

        let mut legacy = InlineStyle::default();
        legacy.apply_opacity(0.35, TransparencySupport::AlphaFilter);
        assert_eq!(legacy.filter.as_deref(), Some("alpha(opacity=35)"));
        assert!(legacy.opacity.is_none());
    }
}
