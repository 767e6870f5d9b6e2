//! Theme configuration for the viewer and CLI
//!
//! Centralizes color and style definitions. Provides both ratatui styles
//! (for the viewer) and ANSI escape codes (for CLI listings).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (captions, usernames)
    pub text_primary: Color,
    /// Secondary/dimmed text color (timestamps, hints, empty segments)
    pub text_secondary: Color,
    /// Accent color (filled segments, key hints)
    pub accent: Color,
    /// Color of the paused indicator
    pub paused: Color,
    /// Background of text stories without their own color
    pub story_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::LightMagenta,
            paused: Color::Yellow,
            story_background: Color::Rgb(0x1f, 0x1b, 0x2e),
        }
    }
}

impl Theme {
    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold usernames and key hints.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the paused badge.
    pub fn paused_style(&self) -> Style {
        Style::default()
            .fg(self.paused)
            .add_modifier(Modifier::BOLD)
    }

    /// Background for a text story, honoring its own `#RRGGBB` color.
    pub fn story_background(&self, color: Option<&str>) -> Color {
        color
            .and_then(parse_hex_color)
            .unwrap_or(self.story_background)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }
}

/// Parse `#RRGGBB` or `#RGB` into an RGB color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightMagenta => "\x1b[95m",
        Color::White => "\x1b[97m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

/// Theme used by the viewer and CLI.
pub fn current_theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex_color("#1e90ff"), Some(Color::Rgb(0x1e, 0x90, 0xff)));
        assert_eq!(parse_hex_color(" #FFF "), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#0a0"), Some(Color::Rgb(0, 170, 0)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_color("1e90ff"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn story_background_falls_back_to_theme() {
        let theme = Theme::default();
        assert_eq!(theme.story_background(None), theme.story_background);
        assert_eq!(theme.story_background(Some("nope")), theme.story_background);
        assert_eq!(
            theme.story_background(Some("#000000")),
            Color::Rgb(0, 0, 0)
        );
    }

    #[test]
    fn ansi_helpers_wrap_text() {
        let theme = Theme::default();
        assert_eq!(theme.accent_text("hi"), "\x1b[95mhi\x1b[0m");
        assert_eq!(theme.secondary_text("x"), "\x1b[90mx\x1b[0m");
    }
}
