/// Keyboard key identifier.
///
/// Covers the keys a playback viewer binds. Hosts map platform keycodes into
/// these variants where possible and use `Key::Unknown(u32)` otherwise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl Key {
    /// Maps a DOM-style `KeyboardEvent.key` value (`" "`, `"ArrowLeft"`, `"r"`).
    ///
    /// Letters are case-insensitive. Returns `None` for anything else.
    pub fn from_key_name(name: &str) -> Option<Key> {
        let key = match name {
            " " | "Space" | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            "Home" => Key::Home,
            "End" => Key::End,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => {
                let mut chars = name.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                return Key::from_letter(c);
            }
        };
        Some(key)
    }

    fn from_letter(c: char) -> Option<Key> {
        const LETTERS: [Key; 26] = [
            Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
            Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
            Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
        ];
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() {
            Some(LETTERS[(c as u8 - b'a') as usize])
        } else {
            None
        }
    }
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl, Alt or Meta held. Shift alone does not count: it only changes
    /// letter case.
    pub fn any_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Key press delivered by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// A text-entry control (input, textarea, select) has focus.
    pub text_focus: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            text_focus: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn in_text_field(mut self) -> Self {
        self.text_focus = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_key_names() {
        assert_eq!(Key::from_key_name(" "), Some(Key::Space));
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_key_name("r"), Some(Key::R));
        assert_eq!(Key::from_key_name("E"), Some(Key::E));
        assert_eq!(Key::from_key_name("z"), Some(Key::Z));
        assert_eq!(Key::from_key_name("7"), None);
        assert_eq!(Key::from_key_name("Shift"), None);
        assert_eq!(Key::from_key_name(""), None);
    }

    #[test]
    fn shift_is_not_a_command_modifier() {
        let m = Modifiers { shift: true, ..Modifiers::default() };
        assert!(!m.any_command());
        assert!(Modifiers { alt: true, ..Modifiers::default() }.any_command());
    }
}
