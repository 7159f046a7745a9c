//! Legal rook move generation.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    ctx.push_slides(from, &ROOK_DIRECTIONS, out);
}
