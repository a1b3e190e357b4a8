/// Drag options could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Opacity must be within 0..=1, got {0}")]
    InvalidOpacity(f64),

    #[error("Offset {axis} must be finite, got {value}")]
    InvalidOffset { axis: char, value: f64 },
}
