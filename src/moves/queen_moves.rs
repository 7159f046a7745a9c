//! Queen movement geometry: union of rook and bishop reach.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_DIRECTIONS};
use crate::moves::direction::Direction;
use crate::moves::rook_moves::{rook_attacks, ROOK_DIRECTIONS};

pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> u64 {
    rook_attacks(board, square) | bishop_attacks(board, square)
}
