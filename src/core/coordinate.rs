//! Relative grid offsets used by card influence patterns.

use serde::{Deserialize, Serialize};

/// A relative `(x, y)` offset from the cell a card is played on.
///
/// `x` is a column delta (positive = right), `y` a row delta
/// (positive = down). Applied to an absolute `(row, col)` it targets
/// `(row + y, col + x)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for `(0, 0)`, the cell the card itself occupies.
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Reflect across the vertical axis.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Absolute `(row, col)` reached from `(row, col)`, or `None` if it
    /// falls outside a `rows` x `cols` grid.
    #[must_use]
    pub fn offset_from(self, row: usize, col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let target_row = row as i64 + i64::from(self.y);
        let target_col = col as i64 + i64::from(self.x);
        if target_row < 0 || target_col < 0 || target_row >= rows as i64 || target_col >= cols as i64 {
            return None;
        }
        Some((target_row as usize, target_col as usize))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
