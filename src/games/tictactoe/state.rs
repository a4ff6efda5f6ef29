//! Selection and turn state machine for tic-tac-toe.
//!
//! A move happens in two steps: a cell is selected, then the selection is
//! confirmed. The phases are:
//!
//! - `Idle` - no selection, waiting for a cell
//! - `Selected(pos)` - a cell is chosen but not yet placed
//! - `Won(player)` / `Draw` - terminal, left only through [`GameState::reset`]
//!
//! Invalid transitions are silently ignored. Every transition returns the
//! cues it emitted, in order, after the state has already been updated.

use super::cue::Cue;
use super::invariants::{GameInvariants, InvariantSet};
use super::{rules, Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Phase of the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No cell selected.
    Idle,
    /// A cell is selected and waiting for confirmation.
    Selected(Position),
    /// The game was won.
    Won(Player),
    /// The game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) selection: Option<Position>,
    pub(super) status: GameStatus,
    pub(super) history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            selection: None,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the selected, unconfirmed cell.
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the placed positions in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match (self.status, self.selection) {
            (GameStatus::Won(player), _) => Phase::Won(player),
            (GameStatus::Draw, _) => Phase::Draw,
            (GameStatus::InProgress, Some(pos)) => Phase::Selected(pos),
            (GameStatus::InProgress, None) => Phase::Idle,
        }
    }

    /// Selects the cell at `index` (0-8).
    ///
    /// Ignored when the index is out of range, the cell is occupied or the
    /// game is over.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Vec<Cue> {
        match Position::from_index(index) {
            Some(pos) => self.select(pos),
            None => {
                debug!(index, "Ignoring out-of-range selection");
                Vec::new()
            }
        }
    }

    /// Selects `pos`, replacing any earlier selection.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> Vec<Cue> {
        if self.is_terminal() {
            debug!(%pos, "Ignoring selection, game is over");
            return Vec::new();
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Ignoring selection of occupied square");
            return Vec::new();
        }

        self.selection = Some(pos);
        debug!(%pos, player = %self.current_player, "Cell selected");
        vec![Cue::OpenCell(pos)]
    }

    /// Places the current player's mark on the selected cell.
    ///
    /// Clears the selection, hands the turn over and evaluates the board.
    /// Emits `Success` followed by `Winner`, `Draw` or `Turn` for the next
    /// player. Ignored when nothing is selected or the game is over.
    #[instrument(skip(self))]
    pub fn confirm_selection(&mut self) -> Vec<Cue> {
        if self.is_terminal() {
            debug!("Ignoring confirmation, game is over");
            return Vec::new();
        }
        let Some(pos) = self.selection.take() else {
            debug!("Ignoring confirmation without a selection");
            return Vec::new();
        };

        let placer = self.current_player;
        self.board.set(pos, Square::Occupied(placer));
        self.history.push(pos);
        self.current_player = placer.opponent();
        info!(%pos, player = %placer, "Mark placed");

        let mut cues = vec![Cue::Success];
        self.status = self.evaluate_outcome();
        match self.status {
            GameStatus::Won(winner) => {
                debug_assert_eq!(winner, placer, "only the placer can complete a line");
                info!(winner = %winner, "Game won");
                cues.push(Cue::Winner(winner));
            }
            GameStatus::Draw => {
                info!("Game drawn");
                cues.push(Cue::Draw);
            }
            GameStatus::InProgress => cues.push(Cue::Turn(self.current_player)),
        }

        self.assert_invariants();
        cues
    }

    /// Evaluates the board without changing any state.
    pub fn evaluate_outcome(&self) -> GameStatus {
        rules::evaluate_outcome(&self.board)
    }

    /// Restores the initial state. Emits nothing.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Text for the notification line.
    pub fn notification(&self) -> String {
        match self.phase() {
            Phase::Won(winner) => format!("Player {winner} wins!"),
            Phase::Draw => "It's a draw!".to_string(),
            Phase::Selected(_) => "Press Enter to confirm".to_string(),
            Phase::Idle => format!("Player {}'s Turn", self.current_player),
        }
    }

    fn assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                error!(violation = %violation.description, "Game invariant violated");
            }
            debug_assert!(false, "game invariants violated: {violations:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
