//! Shared event types for widget interaction.

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// Position in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Column (0-indexed)
    pub x: u16,
    /// Row (0-indexed)
    pub y: u16,
}

impl Position {
    /// Create a new position
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A mouse click, in screen coordinates.
///
/// Widgets translate the position into their own area inside
/// `handle_click`; clicks outside the widget's area are ignored.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// Position where the click occurred
    pub position: Position,
    /// Modifier keys held during the click
    pub modifiers: Modifiers,
}

impl ClickEvent {
    /// Create a click event without modifiers.
    pub fn at(x: u16, y: u16) -> Self {
        Self {
            position: Position::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a click event with modifiers.
    pub fn with_modifiers(x: u16, y: u16, modifiers: Modifiers) -> Self {
        Self {
            position: Position::new(x, y),
            modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_any() {
        assert!(!Modifiers::NONE.any());
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert!(ctrl.any());
    }
}
