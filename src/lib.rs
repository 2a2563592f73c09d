//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Players alternate dropping pieces into the columns of a 7×6 grid; the
//! first to line up four pieces horizontally, vertically, or diagonally
//! wins, and a full board without a winner is a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: game view and input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
