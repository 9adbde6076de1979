//! Cell coordinates on the tic-tac-toe board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine cells of the board.
///
/// Cells are addressed by `(x, y)` where `x` is the column and `y` the row,
/// both counted from the top-left corner. Declaration order is row-major
/// (`y` outer, `x` inner), which is also the order the search enumerates
/// moves in and therefore its tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left, `(0, 0)`.
    TopLeft,
    /// Top-center, `(1, 0)`.
    TopCenter,
    /// Top-right, `(2, 0)`.
    TopRight,
    /// Middle-left, `(0, 1)`.
    MiddleLeft,
    /// Center, `(1, 1)`.
    Center,
    /// Middle-right, `(2, 1)`.
    MiddleRight,
    /// Bottom-left, `(0, 2)`.
    BottomLeft,
    /// Bottom-center, `(1, 2)`.
    BottomCenter,
    /// Bottom-right, `(2, 2)`.
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column, 0-2.
    pub fn x(self) -> usize {
        self.index() % 3
    }

    /// Row, 0-2.
    pub fn y(self) -> usize {
        self.index() / 3
    }

    /// Creates a cell from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from column and row.
    pub fn from_xy(x: usize, y: usize) -> Option<Self> {
        if x < 3 && y < 3 {
            Self::from_index(y * 3 + x)
        } else {
            None
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Parses user input into a cell.
    ///
    /// Accepts a keypad number `1`-`9` (row-major, as printed on the board),
    /// a coordinate pair `x,y`, or a label such as `center` or `top left`.
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Cell> {
        let s = s.trim();

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        if let Some((x, y)) = s.split_once(',') {
            let x = x.trim().parse().ok()?;
            let y = y.trim().parse().ok()?;
            return Self::from_xy(x, y);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        <Cell as strum::IntoEnumIterator>::iter().find(|cell| normalize(cell.label()) == wanted)
    }
}

/// Lowercases and drops separators so `Top left`, `top-left` and `topleft` agree.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_are_row_major() {
        assert_eq!((Cell::TopRight.x(), Cell::TopRight.y()), (2, 0));
        assert_eq!((Cell::MiddleLeft.x(), Cell::MiddleLeft.y()), (0, 1));
        assert_eq!((Cell::BottomRight.x(), Cell::BottomRight.y()), (2, 2));
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_xy(cell.x(), cell.y()), Some(*cell));
        }
    }

    #[test]
    fn test_from_xy_out_of_bounds() {
        assert_eq!(Cell::from_xy(3, 0), None);
        assert_eq!(Cell::from_xy(0, 3), None);
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_parse_input_forms() {
        assert_eq!(Cell::parse_input("1"), Some(Cell::TopLeft));
        assert_eq!(Cell::parse_input(" 9 "), Some(Cell::BottomRight));
        assert_eq!(Cell::parse_input("0"), None);
        assert_eq!(Cell::parse_input("10"), None);
        assert_eq!(Cell::parse_input("2,0"), Some(Cell::TopRight));
        assert_eq!(Cell::parse_input("0, 2"), Some(Cell::BottomLeft));
        assert_eq!(Cell::parse_input("center"), Some(Cell::Center));
        assert_eq!(Cell::parse_input("Top left"), Some(Cell::TopLeft));
        assert_eq!(Cell::parse_input("bottom-center"), Some(Cell::BottomCenter));
        assert_eq!(Cell::parse_input("middle"), None);
        assert_eq!(Cell::parse_input(""), None);
    }
}
