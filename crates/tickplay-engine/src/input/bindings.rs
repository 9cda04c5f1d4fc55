use std::collections::HashMap;

use crate::command::Command;
use crate::time::SPEED_INCREMENT;

use super::types::{Key, KeyEvent};

/// On-screen control associated with a binding.
///
/// UIs use it to give keyboard-triggered actions the same visual feedback as
/// a click on the control.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Control {
    PlayPause,
    StepForward,
    StepBackward,
    SkipStart,
    SkipEnd,
    SpeedUp,
    SpeedDown,
}

/// What a key does.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Binding {
    pub command: Command,
    pub control: Option<Control>,
}

impl Binding {
    pub fn new(command: Command, control: Control) -> Self {
        Self {
            command,
            control: Some(control),
        }
    }
}

/// Key → binding table.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    map: HashMap<Key, Binding>,
}

impl KeyBindings {
    /// Table with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard viewer bindings.
    ///
    /// | Key | Command |
    /// |-----|---------|
    /// | Space | toggle play |
    /// | R, S | seek to start |
    /// | E | seek to end |
    /// | ArrowRight / ArrowLeft | step forward / backward |
    /// | ArrowUp / ArrowDown | adjust speed by ±0.5 |
    pub fn standard() -> Self {
        let mut b = Self::empty();
        b.bind(Key::Space, Binding::new(Command::TogglePlay, Control::PlayPause));
        b.bind(Key::R, Binding::new(Command::SeekToStart, Control::SkipStart));
        b.bind(Key::S, Binding::new(Command::SeekToStart, Control::SkipStart));
        b.bind(Key::E, Binding::new(Command::SeekToEnd, Control::SkipEnd));
        b.bind(Key::ArrowRight, Binding::new(Command::StepForward, Control::StepForward));
        b.bind(Key::ArrowLeft, Binding::new(Command::StepBackward, Control::StepBackward));
        b.bind(
            Key::ArrowUp,
            Binding::new(Command::AdjustSpeed(SPEED_INCREMENT), Control::SpeedUp),
        );
        b.bind(
            Key::ArrowDown,
            Binding::new(Command::AdjustSpeed(-SPEED_INCREMENT), Control::SpeedDown),
        );
        b
    }

    /// Binds `key`, returning the binding it replaced.
    pub fn bind(&mut self, key: Key, binding: Binding) -> Option<Binding> {
        self.map.insert(key, binding)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Binding> {
        self.map.remove(&key)
    }

    pub fn get(&self, key: Key) -> Option<&Binding> {
        self.map.get(&key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolves a key press.
    ///
    /// Presses with Ctrl, Alt or Meta held, and presses while a text field
    /// has focus, never resolve so browser/OS shortcuts and typing pass through.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Binding> {
        if event.modifiers.any_command() || event.text_focus {
            return None;
        }
        self.map.get(&event.key).copied()
    }
}
