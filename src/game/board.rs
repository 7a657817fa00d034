use super::Player;
use crate::error::GameError;

/// Classic board height.
pub const DEFAULT_ROWS: usize = 6;
/// Classic board width.
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// The grid of cells. Purely spatial: no turn or win-state semantics.
///
/// Dimensions are fixed at construction. Row 0 is the top, row `height - 1`
/// the bottom; pieces fall downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimensions.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height < 1 || width < 1 {
            return Err(GameError::InvalidDimensions {
                height,
                width,
                min: 1,
            });
        }
        Ok(Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= self.height || col >= self.width {
            return Err(GameError::OutOfBounds { row, column: col });
        }
        Ok(self.cells[self.idx(row, col)])
    }

    /// Find the row a piece dropped into `col` would land in, scanning from
    /// the bottom up. `Ok(None)` means the column is full, an ordinary
    /// outcome the caller must branch on rather than an error.
    pub fn landing_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= self.width {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[self.idx(row, col)] == Cell::Empty))
    }

    /// Set the cell at (row, col) to the given player.
    ///
    /// Callers resolve the target via [`Board::landing_row`] first, so the
    /// cell is always empty here.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let i = self.idx(row, col);
        debug_assert_eq!(self.cells[i], Cell::Empty, "placing onto occupied cell");
        self.cells[i] = Cell::Occupied(player);
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[self.idx(0, col)] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (row, col) completes a line of four.
    ///
    /// Counts outward from the anchor along each of the four axes:
    /// horizontal, vertical, and both diagonals. Equivalent to scanning every
    /// 4-cell window on the board, but only the windows through the anchor
    /// can have changed since the last check.
    pub fn connects_four(&self, row: usize, col: usize) -> bool {
        let cell = self.cells[self.idx(row, col)];
        if cell == Cell::Empty {
            return false;
        }

        const AXES: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_ray(row, col, dr, dc, cell)
                + self.count_ray(row, col, -dr, -dc, cell);
            run >= 4
        })
    }

    /// Number of consecutive cells matching `cell`, stepping by (dr, dc)
    /// from (row, col) exclusive.
    fn count_ray(&self, row: usize, col: usize, dr: i64, dc: i64, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as i64 + dr;
        let mut c = col as i64 + dc;
        while r >= 0
            && r < self.height as i64
            && c >= 0
            && c < self.width as i64
            && self.cells[self.idx(r as usize, c as usize)] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}
