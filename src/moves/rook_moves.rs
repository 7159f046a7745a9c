//! Rook movement geometry.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::direction::{trace_ray, Direction};

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];

/// Orthogonal reach from `square`, including the first blocker on each ray.
pub fn rook_attacks(board: &Board, square: Square) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, dir| acc | trace_ray(board, square, *dir))
}
