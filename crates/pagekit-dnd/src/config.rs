//! Draggable registration: options plus lifecycle callbacks

use std::fmt;

use pagekit_dom::{Document, DomEvent, NodeId};

use crate::{ConfigError, DragOptions, DragSession, Resolution};

/// `onStart`, `onAbort` and `onEnd` signature
pub type LifecycleCallback = Box<dyn Fn(&mut Document, &DragSession, &DomEvent, Option<NodeId>)>;

/// `onDrop` signature; the resolution carries the matched droppable, if any
pub type DropCallback = Box<dyn Fn(&mut Document, &DragSession, &DomEvent, Option<NodeId>, &Resolution)>;

/// Configuration shared by every element registered together
#[derive(Default)]
pub struct DragConfig {
    pub options: DragOptions,
    on_start: Option<LifecycleCallback>,
    on_drop: Option<DropCallback>,
    on_abort: Option<LifecycleCallback>,
    on_end: Option<LifecycleCallback>,
}

impl DragConfig {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse options from JSON; callbacks are attached afterwards
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        DragOptions::from_json(json).map(Self::new)
    }

    pub fn on_start(mut self, f: impl Fn(&mut Document, &DragSession, &DomEvent, Option<NodeId>) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_drop(
        mut self,
        f: impl Fn(&mut Document, &DragSession, &DomEvent, Option<NodeId>, &Resolution) + 'static,
    ) -> Self {
        self.on_drop = Some(Box::new(f));
        self
    }

    pub fn on_abort(mut self, f: impl Fn(&mut Document, &DragSession, &DomEvent, Option<NodeId>) + 'static) -> Self {
        self.on_abort = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl Fn(&mut Document, &DragSession, &DomEvent, Option<NodeId>) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    pub(crate) fn fire_start(&self, doc: &mut Document, session: &DragSession, event: &DomEvent, target: Option<NodeId>) {
        if let Some(cb) = &self.on_start {
            cb(doc, session, event, target);
        }
    }

    pub(crate) fn fire_drop(
        &self,
        doc: &mut Document,
        session: &DragSession,
        event: &DomEvent,
        target: Option<NodeId>,
        resolution: &Resolution,
    ) {
        if let Some(cb) = &self.on_drop {
            cb(doc, session, event, target, resolution);
        }
    }

    pub(crate) fn fire_abort(&self, doc: &mut Document, session: &DragSession, event: &DomEvent, target: Option<NodeId>) {
        if let Some(cb) = &self.on_abort {
            cb(doc, session, event, target);
        }
    }

    pub(crate) fn fire_end(&self, doc: &mut Document, session: &DragSession, event: &DomEvent, target: Option<NodeId>) {
        if let Some(cb) = &self.on_end {
            cb(doc, session, event, target);
        }
    }
}

impl fmt::Debug for DragConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfig")
            .field("options", &self.options)
            .field("on_start", &self.on_start.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .field("on_abort", &self.on_abort.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}
