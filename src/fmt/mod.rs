//! Terminal styling for the optional decorated output path.

mod color;
mod styler;

pub use color::{Color, Style, strip_ansi};
pub use styler::{LevelStyle, Styler, default_styler, style, styled_prefix};
