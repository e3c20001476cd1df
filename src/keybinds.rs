//! Key combinations and their textual form.
//!
//! Widgets consume [`KeyCombo`]s rather than raw terminal events so that
//! callers can feed them from crossterm (via the `From` impl), from tests, or
//! from user-configurable binding strings (via [`KeyCombo::parse`]).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::events::Modifiers;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Delete
    Delete,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Parse a combo from its textual form, e.g. `"ctrl+u"` or `"shift+tab"`.
    ///
    /// Tokens are separated by `+`; modifier tokens (`ctrl`, `shift`, `alt`)
    /// may appear in any order before the final key token.
    pub fn parse(s: &str) -> Result<Self, KeybindError> {
        let mut modifiers = Modifiers::NONE;
        let mut key = None;

        for token in s.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                other => {
                    if key.is_some() {
                        return Err(KeybindError::Parse(s.to_string()));
                    }
                    key = Some(
                        parse_key(other)
                            .ok_or_else(|| KeybindError::UnknownKey(other.to_string()))?,
                    );
                }
            }
        }

        match key {
            Some(key) => Ok(Self { key, modifiers }),
            None => Err(KeybindError::Parse(s.to_string())),
        }
    }
}

fn parse_key(token: &str) -> Option<Key> {
    let key = match token {
        "enter" | "return" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "insert" => Key::Insert,
        "delete" | "del" => Key::Delete,
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some('f'), Some(_)) => {
                    let n: u8 = token[1..].parse().ok()?;
                    if (1..=12).contains(&n) {
                        Key::F(n)
                    } else {
                        return None;
                    }
                }
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
    };
    Some(key)
}

/// Errors produced when parsing keybind strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeybindError {
    /// The combo string was empty or structurally invalid.
    #[error("invalid key combo `{0}`")]
    Parse(String),
    /// A key token was not recognized.
    #[error("unknown key token `{0}`")]
    UnknownKey(String),
}

impl From<KeyEvent> for KeyCombo {
    fn from(event: KeyEvent) -> Self {
        let modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        };

        let key = match event.code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::F(n) => Key::F(n),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::Delete => Key::Delete,
            // Remaining codes (media keys, etc.) have no widget behavior;
            // Escape is inert for every widget in this crate.
            _ => Key::Escape,
        };

        Self { key, modifiers }
    }
}
