//! Legal bishop move generation.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    ctx.push_slides(from, &BISHOP_DIRECTIONS, out);
}
