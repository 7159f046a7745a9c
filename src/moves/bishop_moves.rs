//! Bishop movement geometry.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::direction::{trace_ray, Direction};

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

/// Diagonal reach from `square`, including the first blocker on each ray.
pub fn bishop_attacks(board: &Board, square: Square) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, dir| acc | trace_ray(board, square, *dir))
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_on_empty_board_from_d4() {
        let board = Board::empty();
        assert_eq!(bishop_attacks(&board, Square::new(4, 3)).count_ones(), 13);
    }

    #[test]
    fn starting_bishops_are_boxed_in() {
        let board = Board::starting_position();
        let c1 = Square::new(7, 2);
        assert_eq!(
            bishop_attacks(&board, c1),
            Square::new(6, 1).bit() | Square::new(6, 3).bit()
        );
    }
}
