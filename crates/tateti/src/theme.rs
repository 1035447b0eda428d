//! Accent color preference.

use std::str::FromStr;

use ratatui::style::Color;
use tracing::{debug, instrument};

/// Accent used when no usable preference is stored.
pub const DEFAULT_ACCENT: Color = Color::Cyan;

/// Colors offered when cycling the accent from the keyboard.
pub const PALETTE: [&str; 6] = ["#1e90ff", "magenta", "green", "yellow", "#ff8c00", "red"];

/// Parses an accent color (`"#1e90ff"`, `"cyan"`, `"light-blue"`, ...).
#[instrument]
pub fn parse_accent(value: &str) -> Option<Color> {
    let color = Color::from_str(value.trim()).ok();
    if color.is_none() {
        debug!("Unrecognized accent color");
    }
    color
}

/// Resolves a stored preference to a color, falling back to the default.
pub fn accent_or_default(value: Option<&str>) -> Color {
    value.and_then(parse_accent).unwrap_or(DEFAULT_ACCENT)
}

/// The palette entry after `current`; the first entry when `current` is
/// unset or not part of the palette.
pub fn next_accent(current: Option<&str>) -> &'static str {
    let next = current
        .and_then(|c| PALETTE.iter().position(|p| p.eq_ignore_ascii_case(c)))
        .map_or(0, |i| (i + 1) % PALETTE.len());
    PALETTE[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_names() {
        assert_eq!(parse_accent("#1e90ff"), Some(Color::Rgb(0x1e, 0x90, 0xff)));
        assert_eq!(parse_accent(" magenta "), Some(Color::Magenta));
        assert_eq!(parse_accent("not a color"), None);
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(accent_or_default(None), DEFAULT_ACCENT);
        assert_eq!(accent_or_default(Some("???")), DEFAULT_ACCENT);
        assert_eq!(accent_or_default(Some("green")), Color::Green);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(next_accent(None), PALETTE[0]);
        assert_eq!(next_accent(Some("#ABCDEF")), PALETTE[0]);
        assert_eq!(next_accent(Some(PALETTE[0])), PALETTE[1]);
        assert_eq!(next_accent(Some(PALETTE[PALETTE.len() - 1])), PALETTE[0]);
    }

    #[test]
    fn test_palette_entries_parse() {
        for entry in PALETTE {
            assert!(parse_accent(entry).is_some(), "{entry} should parse");
        }
    }
}
