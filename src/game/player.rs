use std::fmt;
use std::str::FromStr;

use crate::error::SetupError;

/// Position of a player in the session's ordered pair. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Colors a player can choose from on the color selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PieceColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Brown,
    Black,
}

impl PieceColor {
    /// Every selectable color, in the order the selection list shows them.
    pub const ALL: [PieceColor; 9] = [
        PieceColor::Red,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Yellow,
        PieceColor::Orange,
        PieceColor::Purple,
        PieceColor::Pink,
        PieceColor::Brown,
        PieceColor::Black,
    ];

    /// Display name, e.g. "Red"
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "Red",
            PieceColor::Blue => "Blue",
            PieceColor::Green => "Green",
            PieceColor::Yellow => "Yellow",
            PieceColor::Orange => "Orange",
            PieceColor::Purple => "Purple",
            PieceColor::Pink => "Pink",
            PieceColor::Brown => "Brown",
            PieceColor::Black => "Black",
        }
    }

    /// Lower-case token used in config files and messages, e.g. "red"
    pub fn token(self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Green => "green",
            PieceColor::Yellow => "yellow",
            PieceColor::Orange => "orange",
            PieceColor::Purple => "purple",
            PieceColor::Pink => "pink",
            PieceColor::Brown => "brown",
            PieceColor::Black => "black",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PieceColor::ALL
            .into_iter()
            .find(|color| color.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SetupError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for PieceColor {
    type Error = SetupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A participant, identified by the color they picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    color: PieceColor,
}

impl Player {
    pub fn new(color: PieceColor) -> Self {
        Player { color }
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Get player name for display
    pub fn name(&self) -> &'static str {
        self.color.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_color_parse_is_case_insensitive() {
        assert_eq!("Red".parse::<PieceColor>(), Ok(PieceColor::Red));
        assert_eq!(" purple ".parse::<PieceColor>(), Ok(PieceColor::Purple));
        assert_eq!(
            "teal".parse::<PieceColor>(),
            Err(SetupError::UnknownColor("teal".to_string()))
        );
    }

    #[test]
    fn test_every_color_parses_from_its_token() {
        for color in PieceColor::ALL {
            assert_eq!(color.token().parse::<PieceColor>(), Ok(color));
        }
    }

    #[test]
    fn test_color_try_from_string() {
        assert_eq!(PieceColor::try_from("Brown".to_string()), Ok(PieceColor::Brown));
        assert_eq!(
            PieceColor::try_from("beige".to_string()),
            Err(SetupError::UnknownColor("beige".to_string()))
        );
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::new(PieceColor::Green).name(), "Green");
    }
}
