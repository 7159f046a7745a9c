//! Move-selection collaborator contract.
//!
//! A selector is handed the current state together with its legal move list
//! and answers with one move drawn from that list. Selectors run against the
//! state by shared reference, so any exploration of their own has to happen on
//! a clone.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub trait MoveSelector: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick one of `legal_moves`. Callers never pass an empty list.
    fn choose_move(&mut self, game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move>;
}
