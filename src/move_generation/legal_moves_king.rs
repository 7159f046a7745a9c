//! King steps and castling.

use crate::game_state::chess_rules::{
    king_home, kingside_rook_home, queenside_rook_home, KING_HOME_COL,
};
use crate::game_state::chess_types::{CastlingRights, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::square_under_attack;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::direction::mask_squares;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::Move;

/// Adjacent king moves that do not end on an attacked square.
///
/// Each candidate is judged on a snapshot with the king already standing on
/// the destination, so sliders that were blocked by the king itself are seen.
pub fn generate_king_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    for to in mask_squares(king_attacks(from)) {
        if ctx.is_ally(to) {
            continue;
        }
        let trial = ctx.board.with_relocated(from, to);
        if !square_under_attack(&trial, to, ctx.enemy()) {
            ctx.push_move(from, to, out);
        }
    }
}

/// Castle moves still available. Callers only ask when the side is not in check.
pub fn generate_castling_moves(
    ctx: &MoveGenContext<'_>,
    rights: &CastlingRights,
    out: &mut Vec<Move>,
) {
    let side = ctx.side;
    let home = king_home(side);
    let king = Piece::new(side, PieceKind::King);
    if ctx.king != home || ctx.board.get(home) != Some(king) {
        return;
    }

    let row = home.row();
    if rights.kingside(side) && rook_at(ctx, kingside_rook_home(side)) {
        let empty = [5u8, 6];
        let transit = [KING_HOME_COL, 5, 6];
        if path_is_clear(ctx, row, &empty, &transit) {
            out.push(Move::castle(home, Square::new(row, 6), king));
        }
    }
    if rights.queenside(side) && rook_at(ctx, queenside_rook_home(side)) {
        let empty = [1u8, 2, 3];
        let transit = [KING_HOME_COL, 3, 2];
        if path_is_clear(ctx, row, &empty, &transit) {
            out.push(Move::castle(home, Square::new(row, 2), king));
        }
    }
}

#[inline]
fn rook_at(ctx: &MoveGenContext<'_>, square: Square) -> bool {
    ctx.board.get(square) == Some(Piece::new(ctx.side, PieceKind::Rook))
}

fn path_is_clear(ctx: &MoveGenContext<'_>, row: u8, empty: &[u8], transit: &[u8]) -> bool {
    empty
        .iter()
        .all(|&col| ctx.board.is_empty(Square::new(row, col)))
        && transit
            .iter()
            .all(|&col| !square_under_attack(ctx.board, Square::new(row, col), ctx.enemy()))
}
