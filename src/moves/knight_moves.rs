//! Knight movement geometry.

use crate::game_state::chess_types::Square;
use crate::moves::direction::{offset_table, Direction};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
];

pub const KNIGHT_ATTACKS: [u64; 64] = offset_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

/// Knight deltas as check-record directions.
pub fn knight_deltas() -> impl Iterator<Item = Direction> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(d_row, d_col)| Direction::new(d_row, d_col))
}
