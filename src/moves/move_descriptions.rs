//! The single-ply `Move` record.
//!
//! Moves are plain immutable values built by the generators. Equality is
//! field-wise, so a `Move` is only ever "the same" as one carrying the same
//! pieces and flags; input layers that only know two squares should look the
//! move up through [`MoveId`].

use std::fmt;

use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::{move_to_notation, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// `None` for quiet moves. For en passant this is the captured pawn even
    /// though `end` is empty.
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Ordinary move or capture.
    pub const fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        is_promotion: bool,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    pub const fn en_passant(start: Square, end: Square, pawn: Piece, captured: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: pawn,
            piece_captured: Some(captured),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    pub const fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square the captured piece is removed from. Differs from `end` only for
    /// en passant, where the victim sits beside the capturing pawn.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.start.row(), self.end.col())
        } else {
            self.end
        }
    }

    #[inline]
    pub const fn id(&self) -> MoveId {
        MoveId {
            start: self.start,
            end: self.end,
        }
    }

    /// Long coordinate form, start square then end square (`e2e4`).
    pub fn coordinate_notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_notation(self))
    }
}

/// Start/end squares only; enough to identify a legal move in a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveId {
    pub start: Square,
    pub end: Square,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn en_passant_victim_sits_beside_the_pawn() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let victim = Piece::new(Color::Black, PieceKind::Pawn);
        let mv = Move::en_passant(Square::new(3, 4), Square::new(2, 3), pawn, victim);
        assert_eq!(mv.capture_square(), Square::new(3, 3));
        assert!(mv.is_capture());
        assert_eq!(mv.coordinate_notation(), "e5d6");
    }

    #[test]
    fn ids_ignore_flags() {
        let king = Piece::new(Color::White, PieceKind::King);
        let castle = Move::castle(Square::new(7, 4), Square::new(7, 6), king);
        let plain = Move::new(Square::new(7, 4), Square::new(7, 6), king, None, false);
        assert_ne!(castle, plain);
        assert_eq!(castle.id(), plain.id());
    }
}
