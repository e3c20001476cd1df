//! Theming for formgrid widgets.

mod default;

pub use default::{InputColors, TableColors, TextColors, Theme};
