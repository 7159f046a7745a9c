use std::sync::Arc;
use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf nodes and leaf-move features `depth` plies below `game_state`.
///
/// Runs make/undo on the state in place; it is left as it was found.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state).moves {
        perft_recurse(generator, game_state, mv, depth, &mut total);
    }
    total
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let root_moves = generator.generate_legal_moves(game_state).moves;
    root_moves
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            perft_recurse(generator, game_state, mv, depth, &mut local);
            (mv, local.nodes)
        })
        .collect()
}

/// One worker per root move, each walking its own clone of the state.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state).moves;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut local_state = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mut local_state, mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::WorkerPanicked("perft worker".to_owned()))?;
        total.merge(local);
    }

    Ok(total)
}

/// Apply `mv`, descend `remaining - 1` further plies, undo.
fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: Move,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    game_state.make_move(mv);

    if remaining == 1 {
        count_leaf(generator, game_state, &mv, counts);
    } else {
        for child in generator.generate_legal_moves(game_state).moves {
            perft_recurse(generator, game_state, child, remaining - 1, counts);
        }
    }

    game_state.undo_move();
}

fn count_leaf<G: MoveGenerator + ?Sized>(
    generator: &G,
    after: &GameState,
    mv: &Move,
    counts: &mut PerftCounts,
) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle {
        counts.castles += 1;
    }
    if mv.is_promotion {
        counts.promotions += 1;
    }

    if is_king_in_check(after, after.side_to_move()) {
        counts.checks += 1;
        if generator.generate_legal_moves(after).is_empty() {
            counts.checkmates += 1;
        }
    }
}
