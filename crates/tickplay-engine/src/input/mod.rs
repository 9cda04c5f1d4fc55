//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their own key events into
//! [`KeyEvent`]s and resolve them through [`KeyBindings`].

mod bindings;
mod types;

pub use bindings::{Binding, Control, KeyBindings};
pub use types::{Key, KeyEvent, Modifiers};
