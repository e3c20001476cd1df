//! Event handling for the input field.
//!
//! Every edit is expressed as a change intent: the handler computes the next
//! value from the caller's current value and returns it in
//! [`InputEvent::Changed`]. The widget never mutates or stores the text.

use ratatui::layout::Rect;

use crate::events::ClickEvent;
use crate::keybinds::{Key, KeyCombo};

use super::render::ActionLayout;
use super::state::InputFieldState;
use super::{InputEvent, InputField};

impl InputField<'_> {
    /// Handle a key press while the field is focused.
    ///
    /// Printable keys, Backspace and Delete produce [`InputEvent::Changed`];
    /// arrows and Home/End move the cursor. Ctrl+U activates the clear
    /// action, Ctrl+R the reveal toggle. Edits are rejected while the field
    /// is disabled or loading.
    pub fn handle_key(&self, key: &KeyCombo, state: &mut InputFieldState) -> Option<InputEvent> {
        if key.modifiers.ctrl {
            return match key.key {
                Key::Char('u') => self.activate_clear(state),
                Key::Char('r') => {
                    self.activate_toggle(state);
                    None
                }
                _ => None,
            };
        }
        if key.modifiers.alt || self.is_disabled() {
            return None;
        }

        self.clamp_cursor(state);
        let value = self.value;

        match key.key {
            Key::Char(c) => Some(self.insert(state, c)),
            Key::Space => Some(self.insert(state, ' ')),
            Key::Backspace if state.cursor > 0 => {
                let start = prev_boundary(value, state.cursor);
                let mut next = value.to_string();
                next.remove(start);
                state.cursor = start;
                Some(InputEvent::Changed(next))
            }
            Key::Delete if state.cursor < value.len() => {
                let mut next = value.to_string();
                next.remove(state.cursor);
                Some(InputEvent::Changed(next))
            }
            Key::Left => {
                state.cursor = prev_boundary(value, state.cursor);
                None
            }
            Key::Right => {
                state.cursor = next_boundary(value, state.cursor);
                None
            }
            Key::Home => {
                state.cursor = 0;
                None
            }
            Key::End => {
                state.cursor = value.len();
                None
            }
            _ => None,
        }
    }

    /// Handle a mouse click, given the area the field was rendered into.
    ///
    /// Clicks on the inline action cells activate them; any other click on
    /// the control row moves the cursor to the end of the value.
    pub fn handle_click(
        &self,
        click: &ClickEvent,
        area: Rect,
        state: &mut InputFieldState,
    ) -> Option<InputEvent> {
        let pos = click.position;
        if !area.contains(ratatui::layout::Position::new(pos.x, pos.y)) {
            return None;
        }
        let control_y = area.y + u16::from(self.label.is_some());
        if pos.y != control_y {
            return None;
        }

        let local_x = pos.x - area.x;
        let actions = ActionLayout::of(self, area.width);
        if actions.clear_x == Some(local_x) {
            return self.activate_clear(state);
        }
        if actions.toggle_x == Some(local_x) {
            self.activate_toggle(state);
            return None;
        }
        if !self.is_disabled() {
            state.cursor = self.value.len();
        }
        None
    }

    /// Activate the clear action: a change to the empty string.
    ///
    /// Emits exactly one event per activation; a no-op when the clear action
    /// is not currently shown.
    fn activate_clear(&self, state: &mut InputFieldState) -> Option<InputEvent> {
        if !self.shows_clear() {
            return None;
        }
        state.cursor = 0;
        log::debug!("input field cleared");
        Some(InputEvent::Changed(String::new()))
    }

    /// Activate the reveal toggle. Rendering-only; no event.
    fn activate_toggle(&self, state: &mut InputFieldState) {
        if self.shows_toggle() {
            state.toggle_visibility();
        }
    }

    fn insert(&self, state: &mut InputFieldState, c: char) -> InputEvent {
        let mut next = self.value.to_string();
        next.insert(state.cursor, c);
        state.cursor += c.len_utf8();
        InputEvent::Changed(next)
    }

    /// Snap the cursor back onto a char boundary of the current value.
    ///
    /// The caller owns the value and may have replaced it since the last
    /// interaction, so the stored offset can be stale.
    fn clamp_cursor(&self, state: &mut InputFieldState) {
        let value = self.value;
        if state.cursor > value.len() || !value.is_char_boundary(state.cursor) {
            state.cursor = value.len();
        }
    }
}

fn prev_boundary(value: &str, cursor: usize) -> usize {
    value[..cursor]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(value: &str, cursor: usize) -> usize {
    value[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(value.len())
}
