use ratatui::style::Color;

use crate::config::ThemeConfig;
use crate::notify::Kind;

pub const SUCCESS: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const ERROR: Color = Color::Rgb(0xf4, 0x43, 0x36);
pub const INFO: Color = Color::Rgb(0x21, 0x96, 0xf3);
pub const WARNING: Color = Color::Rgb(0xff, 0x98, 0x00);
pub const TOAST_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HINT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

/// Kind-to-color mapping for toast backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: SUCCESS,
            error: ERROR,
            info: INFO,
            warning: WARNING,
        }
    }
}

impl Theme {
    /// Builds a theme from configured hex colors.
    ///
    /// Colors that fail to parse fall back to the stock palette; config
    /// validation normally rejects them before this point.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            success: parse_hex(&config.success).unwrap_or(SUCCESS),
            error: parse_hex(&config.error).unwrap_or(ERROR),
            info: parse_hex(&config.info).unwrap_or(INFO),
            warning: parse_hex(&config.warning).unwrap_or(WARNING),
        }
    }

    pub fn color_for(&self, kind: Kind) -> Color {
        match kind {
            Kind::Success => self.success,
            Kind::Error => self.error,
            Kind::Info => self.info,
            Kind::Warning => self.warning,
        }
    }
}

/// Parses a `#rrggbb` hex color.
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_stock_palette() {
        let theme = Theme::default();
        assert_eq!(theme.color_for(Kind::Success), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(theme.color_for(Kind::Error), Color::Rgb(0xf4, 0x43, 0x36));
        assert_eq!(theme.color_for(Kind::Info), Color::Rgb(0x21, 0x96, 0xf3));
        assert_eq!(theme.color_for(Kind::Warning), Color::Rgb(0xff, 0x98, 0x00));
    }

    #[test]
    fn parse_hex_accepts_rrggbb() {
        assert_eq!(parse_hex("#4caf50"), Some(Color::Rgb(0x4c, 0xaf, 0x50)));
        assert_eq!(parse_hex("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn parse_hex_rejects_malformed_values() {
        assert_eq!(parse_hex("4caf50"), None); // missing '#'
        assert_eq!(parse_hex("#4caf5"), None); // too short
        assert_eq!(parse_hex("#4caf500"), None); // too long
        assert_eq!(parse_hex("#zzzzzz"), None); // not hex
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn from_config_parses_overrides() {
        let config = ThemeConfig {
            success: "#112233".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.success, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.info, INFO);
    }
}
