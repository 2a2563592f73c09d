//! Core Connect Four game logic: board representation, player types, and the
//! game state machine. Pure state, no rendering; the UI layer reacts to the
//! results of [`GameState::apply_move`].

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError, Placement};
