use serde::{Deserialize, Serialize};

/// The sixteen chat colors a client knows by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl From<NamedColor> for colored::Color {
    fn from(color: NamedColor) -> Self {
        match color {
            NamedColor::Black => Self::Black,
            NamedColor::DarkBlue => Self::Blue,
            NamedColor::DarkGreen => Self::Green,
            NamedColor::DarkAqua => Self::Cyan,
            NamedColor::DarkRed => Self::Red,
            NamedColor::DarkPurple => Self::Magenta,
            NamedColor::Gold => Self::Yellow,
            NamedColor::Gray => Self::White,
            NamedColor::DarkGray => Self::BrightBlack,
            NamedColor::Blue => Self::BrightBlue,
            NamedColor::Green => Self::BrightGreen,
            NamedColor::Aqua => Self::BrightCyan,
            NamedColor::Red => Self::BrightRed,
            NamedColor::LightPurple => Self::BrightMagenta,
            NamedColor::Yellow => Self::BrightYellow,
            NamedColor::White => Self::BrightWhite,
        }
    }
}
