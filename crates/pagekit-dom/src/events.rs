//! DOM Events
//!
//! Pointer and keyboard events as delivered by the host.

use crate::NodeId;

/// Event types the helpers listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    KeyPress,
}

/// Keyboard key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a `KeyboardEvent.key`-style name
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other(name.to_string()),
                }
            }
        }
    }

    /// Legacy `keyCode` (27 is Escape)
    pub fn from_key_code(code: u32) -> Self {
        match code {
            27 => Self::Escape,
            13 => Self::Enter,
            _ => char::from_u32(code)
                .filter(|c| !c.is_control())
                .map(Self::Character)
                .unwrap_or_else(|| Self::Other(code.to_string())),
        }
    }
}

/// Pointer or keyboard event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub kind: EventKind,
    /// Node the host delivered the event to (may be a text node)
    pub target: Option<NodeId>,
    // Viewport coordinates
    pub client_x: f64,
    pub client_y: f64,
    // Target-relative coordinates, when the host provides them
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub key: Option<Key>,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    fn new(kind: EventKind, target: Option<NodeId>, x: f64, y: f64) -> Self {
        Self {
            kind,
            target,
            client_x: x,
            client_y: y,
            offset_x: None,
            offset_y: None,
            key: None,
            cancelable: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Pointer pressed on `target`
    pub fn pointer_down(target: NodeId, x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerDown, Some(target), x, y)
    }

    /// Pointer moved
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerMove, None, x, y)
    }

    /// Pointer released
    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerUp, None, x, y)
    }

    /// Key pressed
    pub fn key_press(key: Key) -> Self {
        let mut event = Self::new(EventKind::KeyPress, None, 0.0, 0.0);
        event.key = Some(key);
        event
    }

    /// Set the target node
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach native target-relative coordinates
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = Some(x);
        self.offset_y = Some(y);
        self
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_escape(&self) -> bool {
        self.key == Some(Key::Escape)
    }
}
