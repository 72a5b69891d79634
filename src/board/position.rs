use std::fmt;

pub const BOARD_SIZE: u8 = 8;

/// A square coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "position ({}, {}) is off the board",
            row,
            col
        );
        Self { row, col }
    }

    /// Steps `dr` rows and `dc` columns away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Only dark squares, where `row + col` is odd, are ever occupied.
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Row-major index in 0..64.
    pub fn index(&self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// The square name, e.g. (5, 0) is `a3`.
    pub fn to_name(&self) -> String {
        format!(
            "{}{}",
            (b'a' + self.col) as char,
            BOARD_SIZE - self.row
        )
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Position::new(1, 1)));
        assert_eq!(Position::new(7, 7).offset(1, 1), None);
        assert_eq!(Position::new(5, 2).offset(-2, 2), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_dark_squares() {
        assert!(Position::new(0, 1).is_dark());
        assert!(Position::new(5, 0).is_dark());
        assert!(!Position::new(0, 0).is_dark());
        assert_eq!(Position::all().filter(|p| p.is_dark()).count(), 32);
    }

    #[test]
    fn test_square_names() {
        assert_eq!(Position::new(5, 0).to_name(), "a3");
        assert_eq!(Position::new(0, 7).to_name(), "h8");
    }

    #[test]
    fn test_all_is_row_major() {
        let positions: Vec<Position> = Position::all().take(9).collect();
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[7], Position::new(0, 7));
        assert_eq!(positions[8], Position::new(1, 0));
    }

    #[test]
    #[should_panic]
    fn test_off_board_position_panics() {
        Position::new(8, 0);
    }
}
