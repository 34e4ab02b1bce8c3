//! The playing grid.
//!
//! ## Layout
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board is
//! O(1). Strategies rely on this to evaluate hypothetical plays on a
//! private copy without touching the live game.
//!
//! ## Rules owned here
//!
//! - Move legality (`check_valid_move`)
//! - Influence propagation and card placement (`play_card`)
//! - Row and total scoring

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{GameError, Player, PlayerMap};

use super::cell::Cell;

/// A fixed-size grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create a starting board.
    ///
    /// `cols` must be odd and at least 3 so the board has a centre column.
    /// Column 0 gets one Red pawn per row, the last column one Blue pawn
    /// per row; everything else is empty.
    ///
    /// ```
    /// use sanguine::board::{Board, Cell};
    /// use sanguine::core::Player;
    ///
    /// let board = Board::new(3, 5).unwrap();
    /// assert_eq!(board.cell(1, 0).unwrap(), Cell::Pawn { count: 1, owner: Player::Red });
    /// assert_eq!(board.cell(1, 4).unwrap(), Cell::Pawn { count: 1, owner: Player::Blue });
    /// assert_eq!(board.cell(1, 2).unwrap(), Cell::Empty);
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols < 3 || cols % 2 == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let cells = (0..rows)
            .flat_map(|_| {
                (0..cols).map(move |col| match col {
                    0 => Cell::Pawn { count: 1, owner: Player::Red },
                    c if c == cols - 1 => Cell::Pawn { count: 1, owner: Player::Blue },
                    _ => Cell::Empty,
                })
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Build a board from explicit rows.
    ///
    /// Used to set up arbitrary positions. Rows must be non-empty and of
    /// equal length, and every cell must satisfy its own invariant; the
    /// odd-column rule and starting pawns of `new` do not apply.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GameError::InvalidDimensions { rows: rows.len(), cols });
        }
        if rows.iter().any(|r| r.len() != cols) {
            return Err(GameError::RaggedBoard);
        }

        let num_rows = rows.len();
        let cells = rows
            .into_iter()
            .flatten()
            .map(Cell::validated)
            .collect::<Result<Vector<_>, _>>()?;

        Ok(Self {
            rows: num_rows,
            cols,
            cells,
        })
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// A copy of the grid, one `Vec` per row.
    #[must_use]
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        (0..self.rows).map(|row| self.row(row).collect()).collect()
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / self.cols, i % self.cols, *cell))
    }

    /// Whether `card` may be placed on `cell`.
    pub fn check_valid_move(cell: &Cell, card: &Card) -> Result<(), GameError> {
        cell.check_playable(card)
    }

    /// Place `card` at `(row, col)`.
    ///
    /// The target must be a pawn cell owned by the card's owner holding at
    /// least `card.cost()` pawns. Each influence offset then touches its
    /// target cell (offsets leaving the board are ignored), and finally the
    /// target becomes a value cell worth `card.value()`, consuming its pawns.
    ///
    /// On error the board is unchanged.
    pub fn play_card(&mut self, card: &Card, row: usize, col: usize) -> Result<(), GameError> {
        let origin = self.index(row, col)?;
        Board::check_valid_move(&self.cells[origin], card)?;

        let owner = card.owner();
        let mut touched = 0usize;
        for offset in card.influence() {
            if let Some((r, c)) = offset.offset_from(row, col, self.rows, self.cols) {
                let idx = r * self.cols + c;
                let influenced = self.cells[idx].influenced_by(owner);
                self.cells.set(idx, influenced);
                touched += 1;
            }
        }

        self.cells.set(
            origin,
            Cell::Value {
                amount: card.value(),
                owner,
            },
        );

        debug!(card = card.name(), %owner, row, col, touched, "card placed");
        Ok(())
    }

    /// Sum of `player`'s value cells in `row`.
    pub fn row_score(&self, row: usize, player: Player) -> Result<u32, GameError> {
        if row >= self.rows {
            return Err(GameError::OutOfRange { row, col: 0 });
        }
        Ok(self.row_scores_of(row)[player])
    }

    /// Both players' scores for every row, top to bottom.
    #[must_use]
    pub fn row_scores(&self) -> Vec<PlayerMap<u32>> {
        (0..self.rows).map(|row| self.row_scores_of(row)).collect()
    }

    /// Sum of `player`'s row scores over the rows they strictly win.
    ///
    /// Tied rows score for nobody.
    #[must_use]
    pub fn total_score(&self, player: Player) -> u32 {
        self.row_scores()
            .iter()
            .filter(|scores| scores[player] > scores[player.opponent()])
            .map(|scores| scores[player])
            .fold(0, u32::saturating_add)
    }

    /// True once every cell holds a played card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_value)
    }

    fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(row * self.cols).take(self.cols).copied()
    }

    fn row_scores_of(&self, row: usize) -> PlayerMap<u32> {
        let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
        for cell in self.row(row) {
            if let Cell::Value { amount, owner } = cell {
                scores[owner] = scores[owner].saturating_add(amount);
            }
        }
        scores
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(row * self.cols + col)
    }
}

/// Text rendering: each row is `<red score> <glyphs> <blue score>`.
///
/// Pawn cells show their count, value cells their owner's initial and
/// empty cells `_`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, scores) in self.row_scores().iter().enumerate() {
            let glyphs: String = self.row(row).map(|c| c.glyph()).collect();
            writeln!(f, "{} {} {}", scores[Player::Red], glyphs, scores[Player::Blue])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;

    fn card(owner: Player, cost: u32, value: u32, influence: &[(i32, i32)]) -> Card {
        Card::new(
            owner,
            "Test",
            cost,
            value,
            influence.iter().map(|&(x, y)| Coordinate::new(x, y)),
        )
        .unwrap()
    }

    #[test]
    fn test_new_board_seeding() {
        let board = Board::new(3, 5).unwrap();
        assert_eq!(board.num_rows(), 3);
        assert_eq!(board.num_cols(), 5);

        for row in 0..3 {
            assert_eq!(board.cell(row, 0).unwrap(), Cell::Pawn { count: 1, owner: Player::Red });
            assert_eq!(board.cell(row, 4).unwrap(), Cell::Pawn { count: 1, owner: Player::Blue });
            for col in 1..4 {
                assert_eq!(board.cell(row, col).unwrap(), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(Board::new(0, 5), Err(GameError::InvalidDimensions { rows: 0, cols: 5 }));
        assert_eq!(Board::new(3, 4), Err(GameError::InvalidDimensions { rows: 3, cols: 4 }));
        assert_eq!(Board::new(3, 1), Err(GameError::InvalidDimensions { rows: 3, cols: 1 }));
        assert!(Board::new(1, 3).is_ok());
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new(3, 5).unwrap();
        assert_eq!(board.cell(3, 0), Err(GameError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(board.cell(0, 5), Err(GameError::OutOfRange { row: 0, col: 5 }));
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(vec![
            vec![Cell::Pawn { count: 2, owner: Player::Blue }, Cell::Empty],
            vec![Cell::Empty, Cell::Value { amount: 3, owner: Player::Red }],
        ])
        .unwrap();

        assert_eq!(board.num_rows(), 2);
        assert_eq!(board.num_cols(), 2);
        assert_eq!(board.cell(1, 1).unwrap(), Cell::Value { amount: 3, owner: Player::Red });
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(Board::from_rows(vec![]), Err(GameError::InvalidDimensions { rows: 0, cols: 0 }));
        assert_eq!(
            Board::from_rows(vec![vec![Cell::Empty, Cell::Empty], vec![Cell::Empty]]),
            Err(GameError::RaggedBoard)
        );
        assert!(Board::from_rows(vec![vec![Cell::Pawn { count: 4, owner: Player::Red }]]).is_err());
    }

    #[test]
    fn test_play_card_places_value_and_influences() {
        let mut board = Board::new(3, 5).unwrap();
        let c = card(Player::Red, 1, 3, &[(1, 0)]);

        board.play_card(&c, 0, 0).unwrap();

        assert_eq!(board.cell(0, 0).unwrap(), Cell::Value { amount: 3, owner: Player::Red });
        assert_eq!(board.cell(0, 1).unwrap(), Cell::Pawn { count: 1, owner: Player::Red });
    }

    #[test]
    fn test_play_card_ignores_offboard_influence() {
        let mut board = Board::new(3, 5).unwrap();
        let c = card(Player::Red, 1, 1, &[(-1, 0), (0, -1), (0, 1)]);

        board.play_card(&c, 0, 0).unwrap();

        assert_eq!(board.cell(1, 0).unwrap(), Cell::Pawn { count: 2, owner: Player::Red });
    }

    #[test]
    fn test_play_card_flips_enemy_pawns_keeping_count() {
        let mut board = Board::from_rows(vec![vec![
            Cell::Pawn { count: 1, owner: Player::Red },
            Cell::Pawn { count: 2, owner: Player::Blue },
        ]])
        .unwrap();
        let c = card(Player::Red, 1, 1, &[(1, 0)]);

        board.play_card(&c, 0, 0).unwrap();

        assert_eq!(board.cell(0, 1).unwrap(), Cell::Pawn { count: 2, owner: Player::Red });
    }

    #[test]
    fn test_play_card_leaves_value_cells_alone() {
        let mut board = Board::from_rows(vec![vec![
            Cell::Pawn { count: 1, owner: Player::Blue },
            Cell::Value { amount: 2, owner: Player::Red },
        ]])
        .unwrap();
        let c = card(Player::Blue, 1, 1, &[(-1, 0)]);
        assert_eq!(c.influence(), &[Coordinate::new(1, 0)]);

        board.play_card(&c, 0, 0).unwrap();

        assert_eq!(board.cell(0, 1).unwrap(), Cell::Value { amount: 2, owner: Player::Red });
    }

    #[test]
    fn test_blue_influence_is_mirrored_on_board() {
        let mut board = Board::new(1, 5).unwrap();
        let c = card(Player::Blue, 1, 2, &[(1, 0)]);

        board.play_card(&c, 0, 4).unwrap();

        assert_eq!(board.cell(0, 4).unwrap(), Cell::Value { amount: 2, owner: Player::Blue });
        assert_eq!(board.cell(0, 3).unwrap(), Cell::Pawn { count: 1, owner: Player::Blue });
    }

    #[test]
    fn test_play_card_errors_leave_board_unchanged() {
        let mut board = Board::new(3, 5).unwrap();
        let before = board.clone();

        let red = card(Player::Red, 1, 1, &[(1, 0)]);
        let expensive = card(Player::Red, 2, 1, &[(1, 0)]);

        assert_eq!(board.play_card(&red, 0, 2), Err(GameError::NotPawnCell));
        assert_eq!(
            board.play_card(&red, 0, 4),
            Err(GameError::WrongCellOwner { owner: Player::Blue, card_owner: Player::Red })
        );
        assert_eq!(
            board.play_card(&expensive, 0, 0),
            Err(GameError::InsufficientPawns { pawns: 1, cost: 2 })
        );
        assert_eq!(board.play_card(&red, 5, 0), Err(GameError::OutOfRange { row: 5, col: 0 }));

        assert_eq!(board, before);
    }

    #[test]
    fn test_row_score_and_total_score() {
        let board = Board::from_rows(vec![
            vec![
                Cell::Value { amount: 5, owner: Player::Red },
                Cell::Value { amount: 2, owner: Player::Blue },
                Cell::Pawn { count: 3, owner: Player::Red },
            ],
            vec![
                Cell::Value { amount: 3, owner: Player::Red },
                Cell::Value { amount: 3, owner: Player::Blue },
                Cell::Empty,
            ],
            vec![
                Cell::Value { amount: 1, owner: Player::Red },
                Cell::Value { amount: 4, owner: Player::Blue },
                Cell::Empty,
            ],
        ])
        .unwrap();

        assert_eq!(board.row_score(0, Player::Red), Ok(5));
        assert_eq!(board.row_score(0, Player::Blue), Ok(2));
        assert_eq!(board.row_score(1, Player::Red), Ok(3));
        assert_eq!(board.row_score(3, Player::Red), Err(GameError::OutOfRange { row: 3, col: 0 }));

        // Row 1 is tied and counts for nobody.
        assert_eq!(board.total_score(Player::Red), 5);
        assert_eq!(board.total_score(Player::Blue), 4);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::from_rows(vec![vec![
            Cell::Value { amount: 1, owner: Player::Red },
            Cell::Pawn { count: 1, owner: Player::Blue },
        ]])
        .unwrap();
        assert!(!board.is_full());

        let c = card(Player::Blue, 1, 1, &[(0, 1)]);
        board.play_card(&c, 0, 1).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 3).unwrap();
        let c = card(Player::Red, 1, 2, &[(1, 0)]);
        board.play_card(&c, 0, 0).unwrap();

        assert_eq!(board.to_string(), "2 R11 0\n0 1_1 0\n");
    }

    #[test]
    fn test_iter_positions() {
        let board = Board::new(2, 3).unwrap();
        let positions: Vec<_> = board.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(board.cells().len(), 2);
        assert_eq!(board.cells()[1].len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new(3, 5).unwrap();
        let mut copy = board.clone();
        copy.play_card(&card(Player::Red, 1, 1, &[(1, 0)]), 1, 0).unwrap();

        assert_eq!(board.cell(1, 0).unwrap(), Cell::Pawn { count: 1, owner: Player::Red });
        assert!(copy.cell(1, 0).unwrap().is_value());
    }

    #[test]
    fn test_scores_saturate_on_huge_values() {
        let huge = Cell::Value { amount: 3_000_000_000, owner: Player::Red };
        let board = Board::from_rows(vec![vec![huge, huge, Cell::Empty], vec![huge, Cell::Empty, huge]]).unwrap();

        assert_eq!(board.row_score(0, Player::Red), Ok(u32::MAX));
        assert_eq!(board.total_score(Player::Red), u32::MAX);
        assert_eq!(board.total_score(Player::Blue), 0);
        assert!(board.to_string().starts_with(&u32::MAX.to_string()));
    }
}
