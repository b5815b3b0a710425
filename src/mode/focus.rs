//! Tracking of the last-focused editable element.
//!
//! Whenever focus lands on one of the three recognized surfaces, a
//! [`FocusSnapshot`] is recorded (always replaced whole, never patched)
//! so that leaving shortcut mode can put the cursor back where the user
//! was. Whether a snapshotted element is still attached when restoration
//! happens is the focus sink's concern, not tracked here.

use serde::{Deserialize, Serialize};

use crate::keyboard::event::{ElementId, KeyEvent, TargetKind};

/// Kind of element a snapshot points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusKind {
    Editor,
    Input,
    ContentEditable,
}

/// Cursor position inside the rich editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

/// Where focus should go back to, captured at the moment it was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSnapshot {
    pub kind: FocusKind,
    pub element: ElementId,
    /// Only meaningful for the editor kind.
    pub position: Option<CursorPosition>,
}

/// Holder of the current snapshot.
#[derive(Debug, Default)]
pub struct FocusState {
    current: Option<FocusSnapshot>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_editor_focus(&mut self, element: ElementId, position: Option<CursorPosition>) {
        self.current = Some(FocusSnapshot {
            kind: FocusKind::Editor,
            element,
            position,
        });
    }

    pub fn set_input_focus(&mut self, element: ElementId) {
        self.current = Some(FocusSnapshot {
            kind: FocusKind::Input,
            element,
            position: None,
        });
    }

    pub fn set_content_editable_focus(&mut self, element: ElementId) {
        self.current = Some(FocusSnapshot {
            kind: FocusKind::ContentEditable,
            element,
            position: None,
        });
    }

    /// Derive a snapshot from the event that is about to put us in
    /// shortcut mode, so focus can come back here afterwards. Editor
    /// targets are handled separately through the blur path, which also
    /// knows the cursor position.
    pub fn prepare_for_capture(&mut self, event: &KeyEvent) {
        let Some(element) = event.target.element else {
            return;
        };
        match event.target.kind {
            TargetKind::Input => self.set_input_focus(element),
            TargetKind::ContentEditable => self.set_content_editable_focus(element),
            TargetKind::RichEditor | TargetKind::Other => {}
        }
    }

    /// Replace the snapshot wholesale (used by the editor blur path).
    pub fn replace(&mut self, snapshot: FocusSnapshot) {
        self.current = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<&FocusSnapshot> {
        self.current.as_ref()
    }

    pub fn current_kind(&self) -> Option<FocusKind> {
        self.current.map(|s| s.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_replaced_atomically() {
        let mut state = FocusState::new();
        state.set_editor_focus(ElementId(1), Some(CursorPosition { line: 3, column: 9 }));
        state.set_input_focus(ElementId(2));

        let snap = state.snapshot().unwrap();
        assert_eq!(snap.kind, FocusKind::Input);
        assert_eq!(snap.element, ElementId(2));
        assert_eq!(snap.position, None);
    }

    #[test]
    fn prepare_for_capture_records_input_target() {
        let mut state = FocusState::new();
        let event =
            KeyEvent::plain("Escape").with_target(TargetKind::Input, Some(ElementId(7)));
        state.prepare_for_capture(&event);
        assert_eq!(state.current_kind(), Some(FocusKind::Input));
    }

    #[test]
    fn prepare_for_capture_ignores_plain_targets() {
        let mut state = FocusState::new();
        state.prepare_for_capture(&KeyEvent::plain("Escape"));
        assert!(state.snapshot().is_none());
    }
}
