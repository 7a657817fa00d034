use super::{Board, Cell, Player};
use crate::error::GameError;

/// A winning line needs four cells, so smaller boards are unplayable.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tie,
}

/// Outcome of a single [`Game::apply_move`] call, for the presentation layer
/// to render. `Rejected` is the full-column case: a legitimate game state,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Rejected,
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    PlacedAndWon {
        row: usize,
        column: usize,
        player: Player,
    },
    PlacedAndTied {
        row: usize,
        column: usize,
    },
}

/// The game state machine: owns the board, tracks whose turn it is, and
/// drives win/tie detection after each move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Game {
    /// Start a new game on an empty `height` x `width` board. Player One
    /// moves first.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(GameError::InvalidDimensions {
                height,
                width,
                min: MIN_DIMENSION,
            });
        }
        Ok(Game {
            board: Board::new(height, width)?,
            current_player: Player::One,
            status: GameStatus::InProgress,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Read-only cell query for renderers.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.board.get(row, column)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A move on a full column is rejected without changing any state. After
    /// a placement the status is re-evaluated: a completed line ends the game
    /// in favor of the mover, a full board ends it in a tie, and otherwise
    /// the turn passes to the other player. Won and Tie are terminal; any
    /// later call fails with [`GameError::GameAlreadyOver`].
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameAlreadyOver);
        }

        let Some(row) = self.board.landing_row(column)? else {
            return Ok(MoveResult::Rejected);
        };

        let player = self.current_player;
        self.board.place(row, column, player);

        if self.board.connects_four(row, column) {
            self.status = GameStatus::Won(player);
            Ok(MoveResult::PlacedAndWon {
                row,
                column,
                player,
            })
        } else if self.board.is_full() {
            self.status = GameStatus::Tie;
            Ok(MoveResult::PlacedAndTied { row, column })
        } else {
            self.current_player = player.other();
            Ok(MoveResult::Placed {
                row,
                column,
                player,
            })
        }
    }
}
