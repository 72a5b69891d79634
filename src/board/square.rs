use super::side::Side;

/// The contents of a single board square. Pieces carry no identity beyond
/// their kind and owner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Square {
    Empty,
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

pub const ALL_SQUARES: [Square; 5] = [
    Square::Empty,
    Square::WhiteMan,
    Square::WhiteKing,
    Square::BlackMan,
    Square::BlackKing,
];

impl Default for Square {
    fn default() -> Self {
        Square::Empty
    }
}

impl Square {
    pub fn is_empty(&self) -> bool {
        *self == Square::Empty
    }

    pub fn is_king(&self) -> bool {
        matches!(self, Square::WhiteKing | Square::BlackKing)
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Square::WhiteMan | Square::WhiteKing => Some(Side::White),
            Square::BlackMan | Square::BlackKing => Some(Side::Black),
            Square::Empty => None,
        }
    }

    pub fn owned_by(&self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Returns the king of the same side. Kings and empty squares are
    /// returned unchanged.
    pub fn promoted(&self) -> Square {
        match self {
            Square::WhiteMan => Square::WhiteKing,
            Square::BlackMan => Square::BlackKing,
            other => *other,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Square::Empty => '.',
            Square::WhiteMan => 'w',
            Square::WhiteKing => 'W',
            Square::BlackMan => 'b',
            Square::BlackKing => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' => Some(Square::Empty),
            'w' => Some(Square::WhiteMan),
            'W' => Some(Square::WhiteKing),
            'b' => Some(Square::BlackMan),
            'B' => Some(Square::BlackKing),
            _ => None,
        }
    }
}

pub fn is_king(square: Square) -> bool {
    square.is_king()
}

pub fn owned_by(square: Square, side: Side) -> bool {
    square.owned_by(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_king() {
        assert!(is_king(Square::WhiteKing));
        assert!(is_king(Square::BlackKing));
        assert!(!is_king(Square::WhiteMan));
        assert!(!is_king(Square::BlackMan));
        assert!(!is_king(Square::Empty));
    }

    #[test]
    fn test_owned_by() {
        assert!(owned_by(Square::WhiteMan, Side::White));
        assert!(owned_by(Square::WhiteKing, Side::White));
        assert!(owned_by(Square::BlackMan, Side::Black));
        assert!(owned_by(Square::BlackKing, Side::Black));
        assert!(!owned_by(Square::WhiteMan, Side::Black));
        assert!(!owned_by(Square::Empty, Side::White));
        assert!(!owned_by(Square::Empty, Side::Black));
    }

    #[test]
    fn test_promoted() {
        assert_eq!(Square::WhiteMan.promoted(), Square::WhiteKing);
        assert_eq!(Square::BlackMan.promoted(), Square::BlackKing);
        assert_eq!(Square::WhiteKing.promoted(), Square::WhiteKing);
        assert_eq!(Square::Empty.promoted(), Square::Empty);
    }

    #[test]
    fn test_char_codes() {
        for square in ALL_SQUARES.iter() {
            assert_eq!(Square::from_char(square.to_char()), Some(*square));
        }
        assert_eq!(Square::from_char('x'), None);
    }
}
