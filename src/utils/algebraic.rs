//! Display notation for squares and moves.
//!
//! Generation only; nothing in the crate parses these strings back.
//! Files run a..h with column 0 as `a`, ranks 1..8 with row 7 as rank 1.

use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::Move;

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn rank_char(row: u8) -> char {
    char::from(b'8' - row)
}

/// Square text form, for example `e4`.
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square.col()), rank_char(square.row()))
}

/// Short move text used for logs and move lists.
///
/// Castles are `0-0` / `0-0-0`, pawn captures `exd5`, pawn pushes `e4` (with a
/// trailing `Q` when promoting) and piece moves `Nf3` / `Bxc6`.
pub fn move_to_notation(mv: &Move) -> String {
    if mv.is_castle {
        return if mv.end.col() > mv.start.col() {
            "0-0".to_owned()
        } else {
            "0-0-0".to_owned()
        };
    }

    let end = square_to_algebraic(mv.end);
    match mv.piece_moved.kind.letter() {
        None if mv.is_capture() => format!("{}x{}", file_char(mv.start.col()), end),
        None if mv.is_promotion => format!("{end}Q"),
        None => end,
        Some(letter) => {
            let capture = if mv.is_capture() { "x" } else { "" };
            format!("{letter}{capture}{end}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn white(kind: PieceKind) -> Piece {
        Piece::new(Color::White, kind)
    }

    #[test]
    fn corner_squares() {
        assert_eq!(square_to_algebraic(Square::new(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)), "h8");
        assert_eq!(square_to_algebraic(Square::new(4, 4)), "e4");
    }

    #[test]
    fn notation_per_move_shape() {
        let push = Move::new(
            Square::new(6, 4),
            Square::new(4, 4),
            white(PieceKind::Pawn),
            None,
            false,
        );
        assert_eq!(move_to_notation(&push), "e4");

        let pawn_capture = Move::new(
            Square::new(4, 4),
            Square::new(3, 3),
            white(PieceKind::Pawn),
            Some(Piece::new(Color::Black, PieceKind::Pawn)),
            false,
        );
        assert_eq!(move_to_notation(&pawn_capture), "exd5");

        let promotion = Move::new(
            Square::new(1, 0),
            Square::new(0, 0),
            white(PieceKind::Pawn),
            None,
            true,
        );
        assert_eq!(move_to_notation(&promotion), "a8Q");

        let knight = Move::new(
            Square::new(7, 6),
            Square::new(5, 5),
            white(PieceKind::Knight),
            None,
            false,
        );
        assert_eq!(move_to_notation(&knight), "Nf3");

        let bishop_capture = Move::new(
            Square::new(3, 1),
            Square::new(2, 2),
            white(PieceKind::Bishop),
            Some(Piece::new(Color::Black, PieceKind::Knight)),
            false,
        );
        assert_eq!(bishop_capture.to_string(), "Bxc6");
    }

    #[test]
    fn castle_notation() {
        let king = white(PieceKind::King);
        let short = Move::castle(Square::new(7, 4), Square::new(7, 6), king);
        let long = Move::castle(Square::new(7, 4), Square::new(7, 2), king);
        assert_eq!(move_to_notation(&short), "0-0");
        assert_eq!(move_to_notation(&long), "0-0-0");
    }
}
