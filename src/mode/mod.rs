//! Mode state machine - the controller and its focus bookkeeping.
//!
//! # Module structure
//!
//! - `focus` - snapshots of the last-focused editable element
//! - `controller` - the shortcut-mode state machine driving everything

pub mod controller;
pub mod focus;

pub use controller::ModeController;
pub use focus::{CursorPosition, FocusKind, FocusSnapshot, FocusState};
