//! Browser-like keyboard event model fed in by the host.
//!
//! The core never touches raw scan codes: the host hands it events that
//! already carry a logical key name (`"a"`, `"Escape"`, `"Control"`) plus
//! modifier flags and a description of the element that had focus when the
//! key went down.

use serde::{Deserialize, Serialize};

/// Opaque handle to a host-side element (editor pane, input field, ...).
///
/// The core only stores and returns these; resolving one back to a real
/// element is the host's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// What kind of element the event was dispatched to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    /// The host's rich-text editor surface.
    RichEditor,
    /// A plain input or textarea.
    Input,
    /// A generic contenteditable region.
    ContentEditable,
    /// Anything else (buttons, panes, the document body).
    #[default]
    Other,
}

impl TargetKind {
    /// Input/textarea/contenteditable, excluding the rich editor.
    pub fn is_plain_editable(&self) -> bool {
        matches!(self, TargetKind::Input | TargetKind::ContentEditable)
    }

    /// Any surface that consumes ordinary keystrokes, rich editor included.
    pub fn is_editable_surface(&self) -> bool {
        !matches!(self, TargetKind::Other)
    }
}

/// The element the event targeted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventTarget {
    pub kind: TargetKind,
    pub element: Option<ElementId>,
}

/// A single keydown/keyup as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key name, e.g. `"a"`, `"Escape"`, `"ArrowUp"`, `"Control"`.
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    pub target: EventTarget,
}

impl KeyEvent {
    /// A plain key press with no modifiers, targeting nothing editable.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            target: EventTarget::default(),
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_target(mut self, kind: TargetKind, element: Option<ElementId>) -> Self {
        self.target = EventTarget { kind, element };
        self
    }
}
