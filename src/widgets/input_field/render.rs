//! Input field rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::StatefulWidget;
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::state::InputFieldState;
use super::{InputField, InputKind, MessageKind, Variant};

/// Glyphs for the inline actions.
const CLEAR_GLYPH: &str = "✕";
const REVEAL_GLYPH: &str = "◉";
const CONCEAL_GLYPH: &str = "○";
const MASK_CHAR: char = '•';

/// Local x positions of the inline action cells within the control row.
///
/// Computed identically by the renderer and the click handler so hits line
/// up with what is on screen. Actions stack from the right edge inward:
/// the spinner replaces both actions while loading, otherwise the reveal
/// toggle sits rightmost with the clear action to its left.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct ActionLayout {
    pub clear_x: Option<u16>,
    pub toggle_x: Option<u16>,
    pub spinner_x: Option<u16>,
}

impl ActionLayout {
    pub(super) fn of(field: &InputField<'_>, width: u16) -> Self {
        let mut layout = Self::default();
        if width < 4 {
            return layout;
        }
        let mut next = width - 2;

        if field.loading {
            layout.spinner_x = Some(next);
            return layout;
        }
        if field.shows_toggle() {
            layout.toggle_x = Some(next);
            next = next.saturating_sub(2);
        }
        if field.shows_clear() && next >= 1 {
            layout.clear_x = Some(next);
        }
        layout
    }

    /// Leftmost cell taken by an action, used to limit the text width.
    fn text_end(&self, width: u16) -> u16 {
        [self.clear_x, self.toggle_x, self.spinner_x]
            .into_iter()
            .flatten()
            .min()
            .map_or(width, |x| x.saturating_sub(1))
    }
}

impl StatefulWidget for InputField<'_> {
    type State = InputFieldState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut y = area.y;

        if let Some(label) = self.label {
            let style = Style::default().fg(self.theme.text.secondary);
            buf.set_stringn(area.x, y, label, area.width as usize, style);
            y += 1;
        }
        if y >= area.y + area.height {
            return;
        }

        self.render_control(Rect { y, height: 1, ..area }, buf, state);
        y += 1;

        if y < area.y + area.height
            && let Some((kind, text)) = self.message()
        {
            let color = match kind {
                MessageKind::Error => self.theme.error,
                MessageKind::Helper => self.theme.text.muted,
            };
            buf.set_stringn(area.x, y, text, area.width as usize, Style::default().fg(color));
        }
    }
}

impl InputField<'_> {
    fn render_control(&self, row: Rect, buf: &mut Buffer, state: &mut InputFieldState) {
        let mut style = Style::default().fg(if self.is_disabled() {
            self.theme.text.disabled
        } else {
            self.theme.text.primary
        });
        match self.variant {
            Variant::Filled => style = style.bg(self.theme.input.background),
            Variant::Outlined => style = style.add_modifier(Modifier::UNDERLINED),
            Variant::Ghost => {}
        }
        if self.invalid {
            style = style.fg(self.theme.error);
        }
        buf.set_style(row, style);

        let actions = ActionLayout::of(self, row.width);
        let pad = self.size.padding();
        let text_start = row.x + pad.min(row.width.saturating_sub(1));
        let text_end = row.x + actions.text_end(row.width);
        if text_start >= text_end {
            return;
        }
        let text_width = (text_end - text_start) as usize;

        // Value (masked for a concealed password field) or placeholder.
        let masked;
        let display: &str = if self.value.is_empty() {
            self.placeholder
        } else if self.effective_kind(state) == InputKind::Password {
            masked = MASK_CHAR.to_string().repeat(self.value.chars().count());
            &masked
        } else {
            self.value
        };
        let text_style = if self.value.is_empty() {
            Style::default().fg(self.theme.input.placeholder)
        } else {
            style
        };
        buf.set_stringn(text_start, row.y, display, text_width, text_style);

        if self.focused && !self.is_disabled() {
            self.render_cursor(buf, state, text_start, text_end, row.y);
        }

        let action_style = Style::default().fg(self.theme.input.action);
        if let Some(x) = actions.clear_x {
            buf.set_stringn(row.x + x, row.y, CLEAR_GLYPH, 1, action_style);
        }
        if let Some(x) = actions.toggle_x {
            let glyph = if state.password_visible {
                REVEAL_GLYPH
            } else {
                CONCEAL_GLYPH
            };
            buf.set_stringn(row.x + x, row.y, glyph, 1, action_style);
        }
        if let Some(x) = actions.spinner_x {
            let spinner = Throbber::default().throbber_style(action_style);
            let span = spinner.to_symbol_span(&state.spinner);
            buf.set_stringn(row.x + x, row.y, span.content.as_ref(), 2, action_style);
        }
    }

    /// Reverse the cell under the cursor.
    fn render_cursor(
        &self,
        buf: &mut Buffer,
        state: &InputFieldState,
        text_start: u16,
        text_end: u16,
        y: u16,
    ) {
        let cursor = state.cursor.min(self.value.len());
        let prefix_width = if self.value.is_char_boundary(cursor) {
            match self.effective_kind(state) {
                // Mask glyphs are all one cell wide.
                InputKind::Password => self.value[..cursor].chars().count(),
                InputKind::Text => self.value[..cursor].width(),
            }
        } else {
            self.value.width()
        };
        let x = text_start + prefix_width as u16;
        if x < text_end {
            buf.set_style(
                Rect {
                    x,
                    y,
                    width: 1,
                    height: 1,
                },
                Style::default().add_modifier(Modifier::REVERSED),
            );
        }
    }
}
