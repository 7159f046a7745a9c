//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed squares that castling depends on.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Row a pawn of `color` starts on and may double-step from.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Farthest row for a `color` pawn, where it promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    color.opposite().back_row()
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.back_row(), KING_HOME_COL)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::new(color.back_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::new(color.back_row(), QUEENSIDE_ROOK_COL)
}

/// Rook relocation `(from, to)` for a castle landing the king on `king_to`.
///
/// Kingside lands on the g-file (rook h -> f), queenside on the c-file
/// (rook a -> d).
#[inline]
pub const fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    let row = king_to.row();
    if king_to.col() > KING_HOME_COL {
        (Square::new(row, KINGSIDE_ROOK_COL), Square::new(row, 5))
    } else {
        (Square::new(row, QUEENSIDE_ROOK_COL), Square::new(row, 3))
    }
}
