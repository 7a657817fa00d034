//! # Connect Four
//!
//! The rules engine for a two-player drop-piece board game on a grid of
//! configurable height and width (classic 6x7 by default), plus a terminal
//! UI built with Ratatui. The core is pure: it knows nothing about rendering
//! and reports every move outcome as a value for the presentation layer to
//! interpret.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: board rendering and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
