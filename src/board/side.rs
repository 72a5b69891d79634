use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two players. White starts on rows 5-7 and moves toward row 0,
/// Black starts on rows 0-2 and moves toward row 7.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opposite(&self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// White is the maximizing player in search, Black the minimizing one.
    pub fn maximize_score(&self) -> bool {
        match self {
            Side::White => true,
            Side::Black => false,
        }
    }

    /// Row delta of a man's forward step.
    pub fn forward(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The row on which this side's men are crowned.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::White)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Black => "black",
            Side::White => "white",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "black" => Ok(Side::Black),
            "white" => Ok(Side::White),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: black, white, random"),
        }
    }
}
