//! Color names, palette roles, and text styling helpers.
//!
//! Colors are configured by name (`bright-cyan`) or as `#rrggbb` and mapped
//! onto `crossterm` colors at render time.

use crossterm::style::{Color, Stylize};
use std::fmt;
use std::str::FromStr;

/// Terminal color selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

const NAMED: [(&str, AnsiColor); 17] = [
    ("default", AnsiColor::Default),
    ("black", AnsiColor::Black),
    ("red", AnsiColor::Red),
    ("green", AnsiColor::Green),
    ("yellow", AnsiColor::Yellow),
    ("blue", AnsiColor::Blue),
    ("magenta", AnsiColor::Magenta),
    ("cyan", AnsiColor::Cyan),
    ("white", AnsiColor::White),
    ("bright-black", AnsiColor::BrightBlack),
    ("bright-red", AnsiColor::BrightRed),
    ("bright-green", AnsiColor::BrightGreen),
    ("bright-yellow", AnsiColor::BrightYellow),
    ("bright-blue", AnsiColor::BrightBlue),
    ("bright-magenta", AnsiColor::BrightMagenta),
    ("bright-cyan", AnsiColor::BrightCyan),
    ("bright-white", AnsiColor::BrightWhite),
];

impl AnsiColor {
    /// Build an RGB color from a packed `0xRRGGBB` value.
    pub fn rgb_hex(hex: u32) -> Self {
        Self::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Equivalent `crossterm` color.
    pub fn to_crossterm(self) -> Color {
        match self {
            Self::Default => Color::Reset,
            Self::Black => Color::Black,
            Self::Red => Color::DarkRed,
            Self::Green => Color::DarkGreen,
            Self::Yellow => Color::DarkYellow,
            Self::Blue => Color::DarkBlue,
            Self::Magenta => Color::DarkMagenta,
            Self::Cyan => Color::DarkCyan,
            Self::White => Color::Grey,
            Self::BrightBlack => Color::DarkGrey,
            Self::BrightRed => Color::Red,
            Self::BrightGreen => Color::Green,
            Self::BrightYellow => Color::Yellow,
            Self::BrightBlue => Color::Blue,
            Self::BrightMagenta => Color::Magenta,
            Self::BrightCyan => Color::Cyan,
            Self::BrightWhite => Color::White,
            Self::Rgb(r, g, b) => Color::Rgb { r, g, b },
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::Rgb(r, g, b) = self {
            return write!(f, "#{r:02x}{g:02x}{b:02x}");
        }
        let name = NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
            .unwrap_or("default");
        f.write_str(name)
    }
}

impl FromStr for AnsiColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(hex) = normalized.strip_prefix('#') {
            if hex.len() == 6 {
                if let Ok(value) = u32::from_str_radix(hex, 16) {
                    return Ok(Self::rgb_hex(value));
                }
            }
            return Err(format!("invalid hex color `{s}`: expected #rrggbb"));
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, color)| *color)
            .ok_or_else(|| format!("unknown color `{s}`"))
    }
}

/// Color assignments for each output role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Titles, headers, and highlights.
    pub primary: AnsiColor,
    /// Subtitles and tips.
    pub secondary: AnsiColor,
    pub error: AnsiColor,
    pub warning: AnsiColor,
    pub success: AnsiColor,
    pub info: AnsiColor,
    /// Interactive prompt label.
    pub input_prompt: AnsiColor,
    /// Echoed user input and selections.
    pub user_input: AnsiColor,
    pub debug: AnsiColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: AnsiColor::BrightCyan,
            secondary: AnsiColor::BrightGreen,
            error: AnsiColor::BrightRed,
            warning: AnsiColor::BrightYellow,
            success: AnsiColor::BrightGreen,
            info: AnsiColor::BrightBlue,
            input_prompt: AnsiColor::White,
            user_input: AnsiColor::BrightWhite,
            debug: AnsiColor::Magenta,
        }
    }
}

/// Output role resolved against a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Error,
    Warning,
    Success,
    Info,
    Prompt,
    UserInput,
    Debug,
    /// Dimmed supporting text such as descriptions.
    Muted,
}

impl Palette {
    /// Color assigned to `tone`.
    pub fn color_for(&self, tone: Tone) -> AnsiColor {
        match tone {
            Tone::Primary => self.primary,
            Tone::Secondary => self.secondary,
            Tone::Error => self.error,
            Tone::Warning => self.warning,
            Tone::Success => self.success,
            Tone::Info => self.info,
            Tone::Prompt => self.input_prompt,
            Tone::UserInput => self.user_input,
            Tone::Debug => self.debug,
            Tone::Muted => AnsiColor::BrightBlack,
        }
    }
}

/// Message states used by command actions for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Success,
    Error,
    Warning,
    Info,
}

impl From<State> for Tone {
    fn from(state: State) -> Self {
        match state {
            State::Success => Tone::Success,
            State::Error => Tone::Error,
            State::Warning => Tone::Warning,
            State::Info => Tone::Info,
        }
    }
}

/// Wrap `text` in the escape codes for `color`.
pub fn paint(text: &str, color: AnsiColor) -> String {
    text.with(color.to_crossterm()).to_string()
}

pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

pub fn faint(text: &str) -> String {
    text.dim().to_string()
}

pub fn italic(text: &str) -> String {
    text.italic().to_string()
}

pub fn underline(text: &str) -> String {
    text.underlined().to_string()
}

pub fn reversed(text: &str) -> String {
    text.reverse().to_string()
}

pub fn crossed_out(text: &str) -> String {
    text.crossed_out().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!("bright-cyan".parse::<AnsiColor>(), Ok(AnsiColor::BrightCyan));
        assert_eq!("Bright_Red".parse::<AnsiColor>(), Ok(AnsiColor::BrightRed));
        assert_eq!(
            "#ff8bf5".parse::<AnsiColor>(),
            Ok(AnsiColor::Rgb(0xff, 0x8b, 0xf5))
        );
        assert!("#ff8b".parse::<AnsiColor>().is_err());
        assert!("chartreuse".parse::<AnsiColor>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for color in [AnsiColor::BrightMagenta, AnsiColor::rgb_hex(0x0a0b0c)] {
            assert_eq!(color.to_string().parse::<AnsiColor>(), Ok(color));
        }
    }

    #[test]
    fn state_maps_onto_palette_roles() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(State::Error.into()), AnsiColor::BrightRed);
        assert_eq!(palette.color_for(State::Info.into()), AnsiColor::BrightBlue);
    }

    #[test]
    fn paint_keeps_text_and_adds_escapes() {
        let painted = paint("hello", AnsiColor::Red);
        assert!(painted.contains("hello"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
