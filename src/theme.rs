//! Light and dark palettes.

use std::env;

use crossterm::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

/// Palette preference from settings or flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ThemeChoice::Auto),
            "light" => Some(ThemeChoice::Light),
            "dark" => Some(ThemeChoice::Dark),
            _ => None,
        }
    }

    /// Resolve against the terminal's reported appearance.
    pub fn resolve(self) -> Appearance {
        match self {
            ThemeChoice::Light => Appearance::Light,
            ThemeChoice::Dark => Appearance::Dark,
            ThemeChoice::Auto => from_colorfgbg(env::var("COLORFGBG").ok().as_deref()),
        }
    }
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"). Background 7 or 15 is light.
fn from_colorfgbg(value: Option<&str>) -> Appearance {
    let bg = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match bg {
        Some(7) | Some(15) => Appearance::Light,
        _ => Appearance::Dark,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub input_border: Color,
    pub input_background: Color,
    pub placeholder: Color,
    pub checkbox: Color,
    pub password: Color,
    pub error: Color,
    pub button: Color,
    pub reset_button: Color,
    pub button_text: Color,
}

const BLUE: Color = rgb(0x3B82F6);
const RED: Color = rgb(0xEF4444);

pub const LIGHT: Palette = Palette {
    background: rgb(0xFFFFFF),
    text: rgb(0x000000),
    input_border: rgb(0x999999),
    input_background: rgb(0xF3F4F6),
    placeholder: rgb(0x666666),
    checkbox: BLUE,
    password: rgb(0x10B981),
    error: Color::Red,
    button: BLUE,
    reset_button: RED,
    button_text: rgb(0xFFFFFF),
};

pub const DARK: Palette = Palette {
    background: rgb(0x121212),
    text: rgb(0xFFFFFF),
    input_border: rgb(0x666666),
    input_background: rgb(0x1E1E1E),
    placeholder: rgb(0x999999),
    checkbox: BLUE,
    password: rgb(0x34D399),
    error: Color::Red,
    button: BLUE,
    reset_button: RED,
    button_text: rgb(0xFFFFFF),
};

impl Palette {
    pub fn for_appearance(appearance: Appearance) -> &'static Palette {
        match appearance {
            Appearance::Light => &LIGHT,
            Appearance::Dark => &DARK,
        }
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_detection() {
        assert_eq!(from_colorfgbg(Some("0;15")), Appearance::Light);
        assert_eq!(from_colorfgbg(Some("0;7")), Appearance::Light);
        assert_eq!(from_colorfgbg(Some("0;default;15")), Appearance::Light);
        assert_eq!(from_colorfgbg(Some("15;0")), Appearance::Dark);
        assert_eq!(from_colorfgbg(Some("garbage")), Appearance::Dark);
        assert_eq!(from_colorfgbg(None), Appearance::Dark);
    }

    #[test]
    fn explicit_choice_wins() {
        assert_eq!(ThemeChoice::Light.resolve(), Appearance::Light);
        assert_eq!(ThemeChoice::Dark.resolve(), Appearance::Dark);
    }

    #[test]
    fn parse_choice() {
        assert_eq!(ThemeChoice::parse(" Dark "), Some(ThemeChoice::Dark));
        assert_eq!(ThemeChoice::parse("auto"), Some(ThemeChoice::Auto));
        assert_eq!(ThemeChoice::parse("blue"), None);
    }

    #[test]
    fn palettes_match_appearance() {
        let light = Palette::for_appearance(Appearance::Light);
        assert_eq!(light.background, Color::Rgb { r: 0xFF, g: 0xFF, b: 0xFF });
        assert_eq!(light.password, Color::Rgb { r: 0x10, g: 0xB9, b: 0x81 });
        let dark = Palette::for_appearance(Appearance::Dark);
        assert_eq!(dark.background, Color::Rgb { r: 0x12, g: 0x12, b: 0x12 });
        assert_eq!(dark.checkbox, light.checkbox);
    }
}
