//! Line directions and ray tracing over the grid.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Unit step `(d_row, d_col)`. Knight deltas reuse the type for check records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0 && self.d_row.abs() == self.d_col.abs()
    }

    /// True when `other` lies on the same line, either way.
    #[inline]
    pub fn is_parallel(self, other: Direction) -> bool {
        other == self || other == self.reverse()
    }

    /// Unit direction leading from `from` to `to` if they share a line.
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;
        if (d_row, d_col) == (0, 0) {
            return None;
        }
        if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
            Some(Direction::new(d_row.signum(), d_col.signum()))
        } else {
            None
        }
    }

    #[inline]
    pub const fn step(self, square: Square) -> Option<Square> {
        square.offset(self.d_row, self.d_col)
    }
}

/// Orthogonals first, then diagonals.
pub const KING_LINES: [Direction; 8] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

/// Squares reached from `from` along `direction`, up to and including the first
/// occupied square.
pub fn trace_ray(board: &Board, from: Square, direction: Direction) -> u64 {
    let mut attacks = 0u64;
    let mut current = direction.step(from);
    while let Some(sq) = current {
        attacks |= sq.bit();
        if !board.is_empty(sq) {
            break;
        }
        current = direction.step(sq);
    }
    attacks
}

/// Iterate the squares of a mask in row-major order.
pub fn mask_squares(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::from_index(index))
    })
}

/// Build a per-square table from a fixed offset set, for const contexts.
pub(crate) const fn offset_table(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;
    while index < 64 {
        let square = Square::from_index(index);
        let mut attacks = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            if let Some(target) = square.offset(offsets[i].0, offsets[i].1) {
                attacks |= target.bit();
            }
            i += 1;
        }
        table[index] = attacks;
        index += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn between_only_for_shared_lines() {
        let d4 = Square::new(4, 3);
        assert_eq!(
            Direction::between(d4, Square::new(4, 7)),
            Some(Direction::new(0, 1))
        );
        assert_eq!(
            Direction::between(d4, Square::new(1, 0)),
            Some(Direction::new(-1, -1))
        );
        assert_eq!(Direction::between(d4, Square::new(2, 4)), None);
        assert_eq!(Direction::between(d4, d4), None);
    }

    #[test]
    fn ray_stops_at_first_blocker() {
        let mut board = Board::empty();
        board.set(Square::new(4, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let ray = trace_ray(&board, Square::new(4, 3), Direction::new(0, 1));
        let squares: Vec<Square> = mask_squares(ray).collect();
        assert_eq!(
            squares,
            vec![Square::new(4, 4), Square::new(4, 5), Square::new(4, 6)]
        );
    }

    #[test]
    fn axis_classification() {
        assert!(Direction::new(0, -1).is_orthogonal());
        assert!(!Direction::new(0, -1).is_diagonal());
        assert!(Direction::new(1, -1).is_diagonal());
        assert!(!Direction::new(2, 1).is_diagonal());
        assert!(!Direction::new(2, 1).is_orthogonal());
        assert!(Direction::new(1, 0).is_parallel(Direction::new(-1, 0)));
    }
}
