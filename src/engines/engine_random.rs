//! Trivial selectors used by the self-play binary and the harness tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::MoveSelector;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Uniform choice among the legal moves from a seeded generator, so a game
/// can be replayed from its seed.
pub struct RandomEngine {
    seed: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn choose_move(&mut self, _game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move> {
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| ChessError::Engine("random engine was given no moves".to_owned()))
    }
}

/// Always plays the first move in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveEngine;

impl MoveSelector for FirstMoveEngine {
    fn name(&self) -> &str {
        "first-move"
    }

    fn choose_move(&mut self, _game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move> {
        legal_moves
            .first()
            .copied()
            .ok_or_else(|| ChessError::Engine("first-move engine was given no moves".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_choices() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let mut a = RandomEngine::new(7);
        let mut b = RandomEngine::new(7);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&game, &moves).expect("moves are available"),
                b.choose_move(&game, &moves).expect("moves are available")
            );
        }
    }

    #[test]
    fn choices_come_from_the_list() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let mut engine = RandomEngine::new(1);
        for _ in 0..20 {
            let mv = engine.choose_move(&game, &moves).expect("moves are available");
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn empty_list_is_an_engine_error() {
        let game = GameState::new_game();
        assert!(matches!(
            FirstMoveEngine.choose_move(&game, &[]),
            Err(ChessError::Engine(_))
        ));
        assert!(matches!(
            RandomEngine::new(0).choose_move(&game, &[]),
            Err(ChessError::Engine(_))
        ));
    }
}
