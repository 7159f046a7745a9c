//! Shared per-query context for the piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::PinMap;
use crate::moves::direction::Direction;
use crate::moves::move_descriptions::Move;

/// Read-only inputs every generator needs for one legal-move query.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenContext<'a> {
    pub board: &'a Board,
    pub side: Color,
    pub king: Square,
    pub en_passant_target: Option<Square>,
    pub pins: &'a PinMap,
}

impl MoveGenContext<'_> {
    #[inline]
    pub fn enemy(&self) -> Color {
        self.side.opposite()
    }

    #[inline]
    pub fn is_ally(&self, square: Square) -> bool {
        self.board.color_on(square) == Some(self.side)
    }

    #[inline]
    pub fn enemy_piece_on(&self, square: Square) -> Option<Piece> {
        self.board.get(square).filter(|piece| piece.color != self.side)
    }

    /// Pin filter for a candidate `from -> to`. Knight jumps never lie on a line,
    /// so a pinned knight is always rejected.
    #[inline]
    pub fn pin_allows(&self, from: Square, to: Square) -> bool {
        if !self.pins.is_pinned(from) {
            return true;
        }
        match Direction::between(from, to) {
            Some(direction) => self.pins.allows(from, direction),
            None => false,
        }
    }

    /// Append an ordinary move or capture from `from` to `to` after the pin check.
    pub fn push_move(&self, from: Square, to: Square, out: &mut Vec<Move>) {
        if !self.pin_allows(from, to) {
            return;
        }
        let Some(piece) = self.board.get(from) else {
            return;
        };
        let is_promotion = piece.kind == PieceKind::Pawn
            && to.row() == promotion_row(piece.color);
        out.push(Move::new(
            from,
            to,
            piece,
            self.enemy_piece_on(to),
            is_promotion,
        ));
    }

    /// Walk each ray in `directions`, appending quiet moves until the first
    /// occupied square, which is included when it holds an enemy piece.
    /// Rays off the pin axis are skipped whole.
    pub fn push_slides(&self, from: Square, directions: &[Direction], out: &mut Vec<Move>) {
        for &direction in directions {
            if !self.pins.allows(from, direction) {
                continue;
            }
            let mut current = direction.step(from);
            while let Some(to) = current {
                if self.is_ally(to) {
                    break;
                }
                self.push_move(from, to, out);
                if !self.board.is_empty(to) {
                    break;
                }
                current = direction.step(to);
            }
        }
    }
}
