//! Data table rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

use super::events::CHECKBOX_WIDTH;
use super::item::{Alignment, Column};
use super::state::{DataTableState, SortState, TableMode};
use super::{DataTable, TableRow};

impl<T: TableRow> StatefulWidget for DataTable<'_, T> {
    type State = DataTableState<T::Id>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.mode() {
            TableMode::Loading => render_loading(buf, area, &self.theme, state),
            TableMode::Empty => render_empty(buf, area, &self.theme, self.empty_text),
            TableMode::Populated => self.render_populated(area, buf, state),
        }
    }
}

impl<T: TableRow> DataTable<'_, T> {
    fn render_populated(&self, area: Rect, buf: &mut Buffer, state: &mut DataTableState<T::Id>) {
        let checkbox_offset = if self.selectable { CHECKBOX_WIDTH } else { 0 };

        render_header(
            buf,
            Rect { height: 1, ..area },
            self.columns,
            state.sort.as_ref(),
            checkbox_offset,
            &self.theme,
        );

        let order = self.view_order(state);
        let data_height = (area.height - 1) as usize;

        for (view_index, &row_index) in order.iter().take(data_height).enumerate() {
            let row = &self.rows[row_index];
            let y = area.y + 1 + view_index as u16;

            let mut style = Style::default().fg(self.theme.text.primary);
            let selected = state.selection.is_selected(&row.id());
            if selected {
                style = style.bg(self.theme.table.selected_bg);
            }
            if state.cursor == Some(view_index) {
                style = style.bg(self.theme.table.cursor_bg);
            }
            buf.set_style(
                Rect {
                    y,
                    height: 1,
                    ..area
                },
                style,
            );

            if self.selectable {
                let checkbox = if selected { "■ " } else { "□ " };
                buf.set_stringn(area.x, y, checkbox, area.width as usize, style);
            }

            let mut x = area.x + checkbox_offset;
            for column in self.columns {
                if x >= area.x + area.width {
                    break;
                }
                let text = fit(&row.cell(&column.data_index), column.width, column.align);
                let max = (area.x + area.width - x) as usize;
                buf.set_stringn(x, y, &text, max, style);
                x += column.width;
            }
        }
    }
}

/// Render the header row with sort indicators.
fn render_header(
    buf: &mut Buffer,
    area: Rect,
    columns: &[Column],
    sort: Option<&SortState>,
    checkbox_offset: u16,
    theme: &Theme,
) {
    let style = Style::default()
        .fg(theme.table.header_fg)
        .bg(theme.table.header_bg)
        .add_modifier(Modifier::BOLD);
    buf.set_style(area, style);

    let mut x = area.x + checkbox_offset;
    for column in columns {
        if x >= area.x + area.width {
            break;
        }

        // Indicator placement depends on alignment to avoid shifting text
        let title = match sort {
            Some(sort) if sort.data_index == column.data_index => {
                let indicator = if sort.ascending { "▲" } else { "▼" };
                match column.align {
                    Alignment::Right => format!("{} {}", indicator, column.title),
                    _ => format!("{} {}", column.title, indicator),
                }
            }
            _ => column.title.clone(),
        };

        let text = fit(&title, column.width, column.align);
        let max = (area.x + area.width - x) as usize;
        buf.set_stringn(x, area.y, &text, max, style);
        x += column.width;
    }
}

/// Render the loading placeholder: a spinner plus label, centered.
fn render_loading<Id: Clone + Eq + std::hash::Hash>(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    state: &mut DataTableState<Id>,
) {
    let style = Style::default().fg(theme.text.muted);
    let spinner = Throbber::default().style(style).throbber_style(style);
    let line = Line::from(vec![
        spinner.to_symbol_span(&state.spinner),
        Span::styled("Loading", style),
    ]);
    let (x, y) = center(area, line.width() as u16);
    buf.set_line(x, y, &line, area.width);
}

/// Render the empty-state placeholder.
fn render_empty(buf: &mut Buffer, area: Rect, theme: &Theme, text: &str) {
    let style = Style::default().fg(theme.text.muted);
    let (x, y) = center(area, text.width() as u16);
    buf.set_stringn(x, y, text, area.width as usize, style);
}

/// Top-left corner for a centered single-line string of `width` cells.
fn center(area: Rect, width: u16) -> (u16, u16) {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height / 2;
    (x, y)
}

/// Truncate and pad `text` to the column width, leaving a one-cell gap to the
/// next column. Truncation is by display width.
pub(crate) fn fit(text: &str, width: u16, align: Alignment) -> String {
    let content_width = (width as usize).saturating_sub(1);
    if content_width == 0 {
        return " ".repeat(width as usize);
    }

    let mut content = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > content_width {
            break;
        }
        content.push(c);
        used += w;
    }

    let pad = content_width - used;
    let mut out = match align {
        Alignment::Left => format!("{content}{}", " ".repeat(pad)),
        Alignment::Right => format!("{}{content}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{content}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    };
    out.push(' ');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_truncates_and_pads() {
        assert_eq!(fit("abcdef", 4, Alignment::Left), "abc ");
        assert_eq!(fit("ab", 5, Alignment::Right), "  ab ");
        assert_eq!(fit("ab", 6, Alignment::Center), " ab   ");
    }
}
