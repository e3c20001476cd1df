//! Input field widget - a labeled text/password input.
//!
//! The field is a controlled component: the text value is owned by the
//! caller and passed in by reference every frame. The widget never stores
//! the value; editing keys produce [`InputEvent::Changed`] with the value
//! the caller should adopt. The only local state is the password-visibility
//! flag plus a cursor offset ([`InputFieldState`]).
//!
//! # Example
//!
//! ```
//! use formgrid::keybinds::{Key, KeyCombo};
//! use formgrid::widgets::{InputEvent, InputField, InputFieldState, InputKind};
//!
//! let mut value = String::from("secre");
//! let mut state = InputFieldState::new();
//!
//! let field = InputField::new(&value)
//!     .label("Password")
//!     .kind(InputKind::Password)
//!     .clearable(true);
//!
//! field.handle_key(&KeyCombo::key(Key::End), &mut state);
//! if let Some(InputEvent::Changed(next)) = field.handle_key(&KeyCombo::key(Key::Char('t')), &mut state) {
//!     value = next;
//! }
//! assert_eq!(value, "secret");
//! ```

pub mod events;
pub mod render;
mod state;

pub use state::InputFieldState;

use crate::theme::Theme;

/// Visual variant of the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Filled background.
    Filled,
    /// Underlined control (the terminal stand-in for an outline).
    #[default]
    Outlined,
    /// No decoration.
    Ghost,
}

/// Size of the input field; affects horizontal padding inside the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Horizontal padding inside the control row.
    pub(super) fn padding(self) -> u16 {
        match self {
            Size::Sm => 0,
            Size::Md => 1,
            Size::Lg => 2,
        }
    }
}

/// Declared input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
}

/// Kind of message shown under the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Helper,
}

/// Event produced by an input field interaction.
///
/// There is exactly one externally visible effect: a change intent carrying
/// the value the caller should adopt. The clear action is a change to the
/// empty string; the reveal toggle is purely local and produces no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user edited (or cleared) the field.
    Changed(String),
}

/// A labeled text/password input.
///
/// Built fresh every frame from its props; the caller owns the value and
/// the [`InputFieldState`].
#[derive(Debug, Clone)]
pub struct InputField<'a> {
    value: &'a str,
    label: Option<&'a str>,
    placeholder: &'a str,
    helper_text: Option<&'a str>,
    error_message: Option<&'a str>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    focused: bool,
    clearable: bool,
    variant: Variant,
    size: Size,
    kind: InputKind,
    theme: Theme,
}

impl<'a> InputField<'a> {
    /// Create an input field over the caller-owned value.
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            label: None,
            placeholder: "",
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            focused: false,
            clearable: false,
            variant: Variant::default(),
            size: Size::default(),
            kind: InputKind::default(),
            theme: Theme::dark(),
        }
    }

    /// Label rendered above the control.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Placeholder shown while the value is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Helper message shown under the control when the field is not invalid.
    pub fn helper_text(mut self, text: &'a str) -> Self {
        self.helper_text = Some(text);
        self
    }

    /// Error message shown under the control when the field is invalid.
    pub fn error_message(mut self, message: &'a str) -> Self {
        self.error_message = Some(message);
        self
    }

    /// Explicitly disable the field.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the field invalid (error styling plus error message precedence).
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Show the inline loading spinner; a loading field is also disabled.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether the field currently has focus (cursor rendering).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show a clear action while the value is non-empty.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Visual variant (defaults to [`Variant::Outlined`]).
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Control size (defaults to [`Size::Md`]).
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Declared input kind (defaults to [`InputKind::Text`]).
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Use a specific theme (defaults to [`Theme::dark`]).
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether the field rejects edits: explicitly disabled or loading.
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// The kind actually used for rendering: a password field renders as
    /// plain text while the visibility flag is set.
    pub fn effective_kind(&self, state: &InputFieldState) -> InputKind {
        if state.password_visible {
            InputKind::Text
        } else {
            self.kind
        }
    }

    /// Whether the clear action is currently offered.
    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty() && !self.is_disabled()
    }

    /// Whether the reveal-password toggle is currently offered.
    pub fn shows_toggle(&self) -> bool {
        self.kind == InputKind::Password && !self.loading
    }

    /// The message line under the control, if any.
    ///
    /// An error message (when invalid) takes precedence over helper text,
    /// even if both are present.
    pub fn message(&self) -> Option<(MessageKind, &'a str)> {
        if self.invalid && let Some(error) = self.error_message {
            return Some((MessageKind::Error, error));
        }
        self.helper_text.map(|text| (MessageKind::Helper, text))
    }

    /// Total height in rows: label line, control row, message line.
    pub fn height(&self) -> u16 {
        1 + u16::from(self.label.is_some()) + u16::from(self.message().is_some())
    }
}
