//! Input field state.

use std::fmt;

use throbber_widgets_tui::ThrobberState;

/// Local state for an [`InputField`](super::InputField).
///
/// The text value itself is owned by the caller; this only holds the
/// password-visibility flag, the edit cursor (a byte offset into the
/// caller's value, clamped on every use) and the spinner frame.
#[derive(Clone, Default)]
pub struct InputFieldState {
    /// Whether a password field currently renders as plain text.
    pub password_visible: bool,
    /// Cursor position as a byte offset into the caller's value.
    pub cursor: usize,
    /// Spinner state for the inline loading indicator.
    pub(crate) spinner: ThrobberState,
}

impl InputFieldState {
    /// Fresh state: password concealed, cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the password-visibility flag.
    ///
    /// Rendering-only: the underlying value is never touched.
    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Advance the loading spinner one frame.
    pub fn tick(&mut self) {
        self.spinner.calc_next();
    }
}

impl fmt::Debug for InputFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputFieldState")
            .field("password_visible", &self.password_visible)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
