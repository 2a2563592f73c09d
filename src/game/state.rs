use tracing::debug;

use super::{board, Board, Cell, Player};

/// Where the game stands: still accepting moves, won, or tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Result of a successfully applied move: the cell that was filled and the
/// status the game moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state with Player 1 to move
    pub fn initial() -> Self {
        Self::new(Player::One)
    }

    /// Create initial game state with the given starting player
    pub fn new(starting_player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: starting_player,
            status: GameStatus::InProgress,
        }
    }

    /// Get current player. In a terminal state this is the player who made
    /// the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at a specific position (read-only query for rendering)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    /// Get game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get list of legal columns (not full); empty once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..board::COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move for the current player.
    ///
    /// A full or invalid column, or a move after the game has ended, is a
    /// rejection: the error leaves the board, status, and current player
    /// untouched. On success the win check runs for the mover before any
    /// turn toggle, and the tie check only after the win check, so a
    /// board-filling winning move reports a win. The turn passes to the
    /// other player only when the game is still in progress.
    pub fn apply_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player).map_err(|e| match e {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        })?;
        debug!(player = player.name(), column, row, "placed piece");

        if self.board.check_win(player) {
            self.status = GameStatus::Won(player);
            debug!(player = player.name(), "four in a row");
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            debug!("board full, game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            column,
            status: self.status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves().len(), 7);
    }

    #[test]
    fn test_starting_player_override() {
        let state = GameState::new(Player::Two);
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        let placement = state.apply_move(3).unwrap();

        assert_eq!(placement.row, 5);
        assert_eq!(placement.column, 3);
        assert_eq!(placement.status, GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.cell(5, 3), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state.apply_move(0).unwrap(); // Player 1
            state.apply_move(0).unwrap(); // Player 2
        }

        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Player 1 lays a horizontal line across the bottom while Player 2
        // stacks column 0.
        for col in 1..4 {
            state.apply_move(col).unwrap(); // Player 1
            state.apply_move(0).unwrap(); // Player 2
        }
        let placement = state.apply_move(4).unwrap(); // Player 1 completes 1..=4

        assert_eq!(placement.status, GameStatus::Won(Player::One));
        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Player::One));
        // The marker stays on the winner; no toggle out of a terminal state.
        assert_eq!(state.current_player(), Player::One);
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut state = GameState::initial();
        for col in 1..4 {
            state.apply_move(col).unwrap();
            state.apply_move(0).unwrap();
        }
        state.apply_move(4).unwrap();
        assert!(state.is_terminal());

        let snapshot = state;
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(state, snapshot);
    }
}
