//! Core Connect Four game logic: board representation, player types, and the
//! turn-taking state machine with win/tie detection.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::{Game, GameStatus, MoveResult, MIN_DIMENSION};
pub use player::Player;
