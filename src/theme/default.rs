//! Built-in dark and light themes.

use ratatui::style::Color;

/// General text colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub disabled: Color,
}

/// Colors for the input field widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputColors {
    pub background: Color,
    pub placeholder: Color,
    /// Inline action glyphs (clear, reveal).
    pub action: Color,
}

/// Colors for the data table widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColors {
    pub header_fg: Color,
    pub header_bg: Color,
    pub selected_bg: Color,
    pub cursor_bg: Color,
}

/// A formgrid color theme.
///
/// Widgets take a theme by value (themes are a handful of colors and cheap to
/// clone) and fall back to [`Theme::dark`] when none is supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Semantic colors
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Component groups
    pub text: TextColors,
    pub input: InputColors,
    pub table: TableColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            text: TextColors {
                primary: Color::White,
                secondary: Color::Gray,
                muted: Color::DarkGray,
                disabled: Color::DarkGray,
            },
            input: InputColors {
                background: Color::Rgb(30, 30, 46),
                placeholder: Color::DarkGray,
                action: Color::Gray,
            },
            table: TableColors {
                header_fg: Color::White,
                header_bg: Color::Rgb(30, 30, 46),
                selected_bg: Color::Rgb(49, 50, 68),
                cursor_bg: Color::Rgb(69, 71, 90),
            },
        }
    }

    /// A light theme variant.
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            text: TextColors {
                primary: Color::Black,
                secondary: Color::DarkGray,
                muted: Color::Gray,
                disabled: Color::Gray,
            },
            input: InputColors {
                background: Color::Rgb(230, 233, 239),
                placeholder: Color::Gray,
                action: Color::DarkGray,
            },
            table: TableColors {
                header_fg: Color::Black,
                header_bg: Color::Rgb(220, 224, 232),
                selected_bg: Color::Rgb(204, 208, 218),
                cursor_bg: Color::Rgb(188, 192, 204),
            },
        }
    }
}
