use crate::game_state::chess_types::{CastlingRights, Square};
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `undo_move`.
///
/// Holds the state that cannot be re-derived from the move itself, captured
/// before the move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
