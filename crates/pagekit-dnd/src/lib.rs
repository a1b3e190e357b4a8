//! pagekit drag and drop
//!
//! Simulated dragging over the pagekit DOM: a pointer-down on a registered
//! element starts a session, moves reposition the drag object, and a
//! release or Escape resolves it against the configured drop targets.
//!
//! # Example
//! ```rust,ignore
//! use pagekit_dnd::{DragConfig, DragController, DragOptions};
//!
//! let mut controller = DragController::new();
//! let options = DragOptions::from_json(r#"{"droppableIds": ["bin"]}"#)?;
//! controller.make_draggable(&[card], DragConfig::new(options).on_drop(|_, _, _, _, res| {
//!     println!("dropped on {:?}", res.target_id());
//! }));
//! controller.dispatch(&mut doc, &mut event);
//! ```

mod error;
mod options;
mod config;
mod session;
pub mod measure;
mod controller;

pub use error::ConfigError;
pub use options::{DragOptions, DEFAULT_Z_INDEX};
pub use config::{DragConfig, LifecycleCallback, DropCallback};
pub use session::{DragSession, DragState, Offset, Resolution, SessionId};
pub use measure::{BoxMeasure, AncestorFallback, RenderedSize};
pub use controller::{DragController, EventResult};
