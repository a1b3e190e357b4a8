//! Drag controller
//!
//! Holds the single session slot. States are `Idle` and `Dragging`:
//!
//! - `Idle --pointer-down--> Dragging` when the target resolves
//! - `Dragging --pointer-move--> Dragging`, position only
//! - `Dragging --pointer-up--> Idle` after hit-testing
//! - `Dragging --Escape--> Idle` as an abort
//!
//! A pointer-down while dragging is ignored and left to propagate.

use std::iter;
use std::rc::Rc;

use pagekit_dom::{geometry, Document, DomEvent, DomHelper, EventKind, ListenerKind, NodeId, Visibility};

use crate::hit_test::find_drop_target;
use crate::options::lookup;
use crate::{AncestorFallback, BoxMeasure, DragConfig, DragSession, DragState, Offset, Resolution, SessionId};

const SESSION_LISTENERS: [ListenerKind; 3] = [ListenerKind::PointerMove, ListenerKind::PointerUp, ListenerKind::KeyPress];

/// Whether a handler acted on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

struct Registration {
    element: NodeId,
    config: Rc<DragConfig>,
}

/// Drag and drop controller, one per document
pub struct DragController {
    session: Option<DragSession>,
    registrations: Vec<Registration>,
    measure: Box<dyn BoxMeasure>,
    next_session: u64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::with_measure(AncestorFallback)
    }

    /// Use a custom droppable measurement strategy
    pub fn with_measure(measure: impl BoxMeasure + 'static) -> Self {
        Self {
            session: None,
            registrations: Vec::new(),
            measure: Box::new(measure),
            next_session: 1,
        }
    }

    /// Attach a pointer-down handler bound to `config` to each element.
    ///
    /// Registering the same element twice adds a second handler.
    pub fn make_draggable(&mut self, elements: &[NodeId], config: DragConfig) {
        let config = Rc::new(config);
        for &element in elements {
            self.registrations.push(Registration {
                element,
                config: Rc::clone(&config),
            });
        }
        tracing::debug!(count = elements.len(), "registered draggables");
    }

    /// Number of pointer-down handlers attached to `element`
    pub fn handler_count(&self, element: NodeId) -> usize {
        self.registrations.iter().filter(|r| r.element == element).count()
    }

    pub fn state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Deliver a host event.
    ///
    /// Pointer-down bubbles from the resolved target through its ancestors
    /// until a handler stops propagation. The other kinds only arrive while
    /// their document-level listener is installed.
    pub fn dispatch(&mut self, doc: &mut Document, event: &mut DomEvent) -> EventResult {
        match event.kind {
            EventKind::PointerDown => self.bubble_pointer_down(doc, event),
            EventKind::PointerMove if doc.has_listener(ListenerKind::PointerMove) => self.pointer_move(doc, event),
            EventKind::PointerUp if doc.has_listener(ListenerKind::PointerUp) => self.pointer_up(doc, event),
            EventKind::KeyPress if doc.has_listener(ListenerKind::KeyPress) => self.key_press(doc, event),
            _ => EventResult::Ignored,
        }
    }

    fn bubble_pointer_down(&mut self, doc: &mut Document, event: &mut DomEvent) -> EventResult {
        let Some(start) = DomHelper::resolve_target(doc, event) else {
            return EventResult::Ignored;
        };
        let path: Vec<NodeId> = iter::once(start).chain(doc.tree().ancestors(start)).collect();

        let mut result = EventResult::Ignored;
        for node in path {
            let handlers: Vec<Rc<DragConfig>> = self
                .registrations
                .iter()
                .filter(|r| r.element == node)
                .map(|r| Rc::clone(&r.config))
                .collect();
            for config in handlers {
                if self.pointer_down(doc, event, &config) == EventResult::Consumed {
                    result = EventResult::Consumed;
                }
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        result
    }

    /// Start a session for `config`, unless one is already running
    pub fn pointer_down(&mut self, doc: &mut Document, event: &mut DomEvent, config: &Rc<DragConfig>) -> EventResult {
        if self.session.is_some() {
            return EventResult::Ignored;
        }

        let options = &config.options;
        let target = match options.drag_source_id.as_deref() {
            Some(id) => lookup(doc, id),
            None => DomHelper::resolve_target(doc, event),
        };
        let Some(target) = target else {
            return EventResult::Ignored;
        };

        let drag_object = if options.drag_source_clone {
            doc.tree_mut().clone_subtree(target)
        } else {
            target
        };

        let origin = options
            .origin_id
            .as_deref()
            .and_then(|id| lookup(doc, id))
            .map(|o| DomHelper::page_coords(doc, o));
        let offset = Offset {
            x: options.offset_x.or(event.offset_x).or(origin.map(|p| p.x)).unwrap_or(0.0),
            y: options.offset_y.or(event.offset_y).or(origin.map(|p| p.y)).unwrap_or(0.0),
        };

        let (source_width, _) = geometry::rendered_size(doc, target);
        place(doc, drag_object, offset, event);
        let transparency = doc.transparency();
        if let Some(elem) = doc.tree_mut().element_mut(drag_object) {
            elem.style.width = Some(source_width);
            elem.style.z_index = Some(options.z_index);
            if let Some(opacity) = options.opacity {
                elem.style.apply_opacity(opacity, transparency);
            }
        }
        if options.drag_source_clone {
            let body = doc.body();
            doc.tree_mut().append_child(body, drag_object);
        }
        if !options.drag_source_visible {
            if let Some(elem) = doc.tree_mut().element_mut(target) {
                elem.style.visibility = Visibility::Hidden;
            }
        }

        for kind in SESSION_LISTENERS {
            doc.add_listener(kind);
        }

        let id = SessionId(self.next_session);
        self.next_session += 1;
        tracing::debug!(session = id.0, source = ?target, ?drag_object, x = offset.x, y = offset.y, "drag started");

        let session = self.session.insert(DragSession {
            id,
            drag_object,
            drag_source: target,
            offset,
            config: Rc::clone(config),
        });
        config.fire_start(doc, session, event, Some(target));

        DomHelper::stop_event(event);
        EventResult::Consumed
    }

    /// Keep the drag object under the pointer
    pub fn pointer_move(&mut self, doc: &mut Document, event: &mut DomEvent) -> EventResult {
        let Some(session) = &self.session else {
            return EventResult::Ignored;
        };
        place(doc, session.drag_object, session.offset, event);
        tracing::trace!(session = session.id.0, x = event.client_x, y = event.client_y, "drag moved");

        DomHelper::stop_event(event);
        EventResult::Consumed
    }

    /// Resolve the session against the configured droppables
    pub fn pointer_up(&mut self, doc: &mut Document, event: &mut DomEvent) -> EventResult {
        let Some(session) = &self.session else {
            return EventResult::Ignored;
        };
        let resolution = match &session.config.options.droppable_ids {
            Some(ids) => find_drop_target(doc, session.drag_object, ids, self.measure.as_ref()),
            None => Resolution::Dropped,
        };

        DomHelper::stop_event(event);
        let target = DomHelper::resolve_target(doc, event);
        self.end_drag(doc, event, target, resolution);
        EventResult::Consumed
    }

    /// Escape aborts the session; other keys are swallowed while dragging
    pub fn key_press(&mut self, doc: &mut Document, event: &mut DomEvent) -> EventResult {
        if self.session.is_none() {
            return EventResult::Ignored;
        }

        DomHelper::stop_event(event);
        if event.is_escape() {
            let target = DomHelper::resolve_target(doc, event);
            self.end_drag(doc, event, target, Resolution::Aborted);
        }
        EventResult::Consumed
    }

    fn end_drag(&mut self, doc: &mut Document, event: &DomEvent, target: Option<NodeId>, resolution: Resolution) {
        for kind in SESSION_LISTENERS {
            doc.remove_listener(kind);
        }

        let Some(session) = self.session.take() else {
            return;
        };
        let config = Rc::clone(&session.config);
        if resolution.is_dropped() {
            tracing::debug!(session = session.id.0, droppable = resolution.target_id(), "drag dropped");
            config.fire_drop(doc, &session, event, target, &resolution);
        } else {
            tracing::debug!(session = session.id.0, "drag aborted");
            config.fire_abort(doc, &session, event, target);
        }
        config.fire_end(doc, &session, event, target);
    }
}

/// Absolute page position tracking the pointer, anchored to the scroll offset
fn place(doc: &mut Document, drag_object: NodeId, offset: Offset, event: &DomEvent) {
    let (scroll_x, scroll_y) = doc.scroll_offset();
    let left = event.client_x - offset.x + scroll_x;
    let top = event.client_y - offset.y + scroll_y;
    if let Some(elem) = doc.tree_mut().element_mut(drag_object) {
        elem.style.place_absolute(left, top);
    }
}
