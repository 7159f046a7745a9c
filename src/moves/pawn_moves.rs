//! Pawn capture geometry.
//!
//! Only diagonal attacks live here; pushes depend on occupancy and are
//! produced by the pawn generator.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::direction::offset_table;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = offset_table(&[(-1, -1), (-1, 1)]);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = offset_table(&[(1, -1), (1, 1)]);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}
