//! Head-to-head harness for two move selectors.
//!
//! Plays a seeded random opening prefix, then alternates the selectors until
//! the game ends or the ply limit is hit. Every returned move is checked for
//! membership in the legal list before it is applied.

use std::fmt;
use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::engines::engine_trait::MoveSelector;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Terminal};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchOutcome::WhiteWinCheckmate => "White wins",
            MatchOutcome::BlackWinCheckmate => "Black wins",
            MatchOutcome::DrawStalemate => "Stalemate",
            MatchOutcome::DrawMaxPlies => "Ply limit reached",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Seeds the random opening prefix.
    pub seed: u64,
    pub opening_random_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
            opening_random_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

/// Play one game from the initial position; `white` moves first.
pub fn play_engine_match(
    white: &mut dyn MoveSelector,
    black: &mut dyn MoveSelector,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(GameState::new_game(), white, black, config)
}

/// Play one game from a caller-provided state.
pub fn play_engine_match_from_state(
    mut state: GameState,
    white: &mut dyn MoveSelector,
    black: &mut dyn MoveSelector,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    white.new_game();
    black.new_game();

    let opening_moves = apply_seeded_random_opening(&mut state, config);

    let mut played_moves = Vec::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        let legal_moves = state.legal_moves();
        if let Some(finished) = terminal_outcome(&state) {
            outcome = finished;
            break;
        }

        let mover = state.side_to_move();
        let selector: &mut dyn MoveSelector = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let started = Instant::now();
        let chosen = selector.choose_move(&state, &legal_moves)?;
        let elapsed_ns = started.elapsed().as_nanos();

        if !legal_moves.contains(&chosen) {
            return Err(ChessError::Engine(format!(
                "{} returned {} which is not in the legal list",
                selector.name(),
                chosen.coordinate_notation()
            )));
        }

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        played_moves.push(chosen.to_string());
        state.make_move(chosen);
    }

    // A game can end exactly on the last allowed ply.
    if outcome == MatchOutcome::DrawMaxPlies {
        state.legal_moves();
        if let Some(finished) = terminal_outcome(&state) {
            outcome = finished;
        }
    }

    info!(
        %outcome,
        white = white.name(),
        black = black.name(),
        plies = state.history().len(),
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn terminal_outcome(state: &GameState) -> Option<MatchOutcome> {
    match (state.terminal(), state.side_to_move()) {
        (Terminal::InProgress, _) => None,
        (Terminal::Stalemate, _) => Some(MatchOutcome::DrawStalemate),
        (Terminal::Checkmate, Color::White) => Some(MatchOutcome::BlackWinCheckmate),
        (Terminal::Checkmate, Color::Black) => Some(MatchOutcome::WhiteWinCheckmate),
    }
}

/// Random prefix drawn from `config.seed`. Stops early if the game ends.
fn apply_seeded_random_opening(state: &mut GameState, config: &MatchConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut opening = Vec::with_capacity(usize::from(config.opening_random_plies));

    for _ in 0..config.opening_random_plies {
        let legal_moves = state.legal_moves();
        let Some(&mv) = legal_moves.choose(&mut rng) else {
            break;
        };
        opening.push(mv.to_string());
        state.make_move(mv);
    }

    debug!(seed = config.seed, opening = ?opening, "random opening applied");
    opening
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::{FirstMoveEngine, RandomEngine};
    use crate::moves::move_descriptions::Move;
    use crate::test_support::{play, sq};

    struct OffListEngine;

    impl MoveSelector for OffListEngine {
        fn name(&self) -> &str {
            "off-list"
        }

        fn choose_move(&mut self, _game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move> {
            let mut mv = legal_moves[0];
            mv.end = sq("e5");
            Ok(mv)
        }
    }

    #[test]
    fn seeded_match_is_reproducible() {
        let config = MatchConfig {
            max_plies: 60,
            seed: 11,
            opening_random_plies: 4,
        };
        let first = play_engine_match(&mut RandomEngine::new(3), &mut RandomEngine::new(4), &config)
            .expect("match should run");
        let second = play_engine_match(&mut RandomEngine::new(3), &mut RandomEngine::new(4), &config)
            .expect("match should run");
        assert_eq!(first.opening_moves, second.opening_moves);
        assert_eq!(first.played_moves, second.played_moves);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.opening_moves.len(), 4);
    }

    #[test]
    fn ply_limit_ends_the_match() {
        let config = MatchConfig {
            max_plies: 6,
            seed: 0,
            opening_random_plies: 0,
        };
        let result = play_engine_match(&mut FirstMoveEngine, &mut FirstMoveEngine, &config)
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert_eq!(result.played_moves.len(), 6);
        assert_eq!(result.white_move_count, 3);
        assert_eq!(result.black_move_count, 3);
        assert_eq!(result.final_state.history().len(), 6);
    }

    #[test]
    fn off_list_move_is_rejected() {
        let config = MatchConfig {
            opening_random_plies: 0,
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut OffListEngine, &mut FirstMoveEngine, &config);
        assert!(matches!(result, Err(ChessError::Engine(_))));
    }

    #[test]
    fn checkmate_is_reported_for_the_winner() {
        let mut state = GameState::new_game();
        play(&mut state, &["f2f3", "e7e5", "g2g4"]);
        let config = MatchConfig {
            max_plies: 1,
            seed: 0,
            opening_random_plies: 0,
        };

        struct QueenToH4;
        impl MoveSelector for QueenToH4 {
            fn name(&self) -> &str {
                "qh4"
            }
            fn choose_move(&mut self, _: &GameState, legal_moves: &[Move]) -> ChessResult<Move> {
                legal_moves
                    .iter()
                    .copied()
                    .find(|mv| mv.coordinate_notation() == "d8h4")
                    .ok_or_else(|| ChessError::Engine("no Qh4".to_owned()))
            }
        }

        let result =
            play_engine_match_from_state(state, &mut FirstMoveEngine, &mut QueenToH4, &config)
                .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::BlackWinCheckmate);
        assert_eq!(result.played_moves, vec!["Qh4"]);
        assert_eq!(result.outcome.to_string(), "Black wins");
    }
}
