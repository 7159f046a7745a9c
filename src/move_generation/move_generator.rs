use crate::game_state::chess_types::Terminal;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Outcome of one legal-move query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalMoves {
    /// Generation order: row-major board scan, then castling.
    pub moves: Vec<Move>,
    pub in_check: bool,
    /// Number of enemy pieces giving check.
    pub check_count: usize,
    pub terminal: Terminal,
}

impl LegalMoves {
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Produces the legal move set for the side to move without mutating the state.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> LegalMoves;
}
