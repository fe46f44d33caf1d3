//! 24-bit ANSI colors and the small set of text attributes the styler needs.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Foreground escape (`SGR 38`).
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Background escape (`SGR 48`).
    #[must_use]
    pub fn bg_ansi(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }

    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn black() -> Self {
        Self::new(40, 42, 54)
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::new(248, 248, 242)
    }

    #[must_use]
    pub const fn grey() -> Self {
        Self::new(98, 114, 164)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(80, 250, 123)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }
}

/// Foreground, optional background badge, optional bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    /// Dark text on a colored background.
    #[must_use]
    pub const fn badge(bg: Color) -> Self {
        Self {
            fg: Some(Color::black()),
            bg: Some(bg),
            bold: true,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Wraps `text` in the escapes for this style and a trailing reset.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        if self.fg.is_none() && self.bg.is_none() && !self.bold {
            return text.to_string();
        }

        let mut out = String::new();
        if self.bold {
            out.push_str("\x1b[1m");
        }
        if let Some(fg) = self.fg {
            out.push_str(&fg.fg_ansi());
        }
        if let Some(bg) = self.bg {
            out.push_str(&bg.bg_ansi());
        }
        out.push_str(text);
        out.push_str(Color::RESET);
        out
    }
}

/// Removes SGR escape sequences, for tests and width calculations.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_carry_the_rgb_triplet() {
        let color = Color::new(1, 2, 3);
        assert_eq!(color.fg_ansi(), "\x1b[38;2;1;2;3m");
        assert_eq!(color.bg_ansi(), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn empty_style_leaves_text_alone() {
        assert_eq!(Style::default().paint("plain"), "plain");
    }

    #[test]
    fn badge_paints_bold_dark_on_color() {
        let painted = Style::badge(Color::red()).paint("ERROR");
        assert!(painted.starts_with("\x1b[1m"));
        assert!(painted.contains(&Color::black().fg_ansi()));
        assert!(painted.contains(&Color::red().bg_ansi()));
        assert!(painted.ends_with(Color::RESET));
        assert_eq!(strip_ansi(&painted), "ERROR");
    }
}
