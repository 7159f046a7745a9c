//! Pawn move generation: pushes, double-steps, captures, en passant and
//! (queen-only) promotion.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::direction::Direction;
use crate::moves::move_descriptions::Move;

pub fn generate_pawn_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let forward = ctx.side.pawn_forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if ctx.board.is_empty(one_step) {
            ctx.push_move(from, one_step, out);

            if from.row() == pawn_start_row(ctx.side) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if ctx.board.is_empty(two_step) {
                        ctx.push_move(from, two_step, out);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if ctx.enemy_piece_on(to).is_some() {
            ctx.push_move(from, to, out);
        } else if ctx.en_passant_target == Some(to) {
            push_en_passant(ctx, from, to, out);
        }
    }
}

fn push_en_passant(ctx: &MoveGenContext<'_>, from: Square, to: Square, out: &mut Vec<Move>) {
    if !ctx.pin_allows(from, to) {
        return;
    }
    let victim_square = Square::new(from.row(), to.col());
    let (Some(pawn), Some(victim)) = (ctx.board.get(from), ctx.enemy_piece_on(victim_square))
    else {
        return;
    };
    if victim.kind != PieceKind::Pawn {
        return;
    }
    if en_passant_exposes_rank(ctx, from, victim_square) {
        return;
    }
    out.push(Move::en_passant(from, to, pawn, victim));
}

/// Horizontal x-ray test for en passant.
///
/// The capture clears two squares on the king's rank at once, which the pin
/// scan cannot see: with both pawns lifted, the first piece past them on that
/// rank must not be an enemy rook or queen.
fn en_passant_exposes_rank(ctx: &MoveGenContext<'_>, from: Square, victim: Square) -> bool {
    if ctx.king.row() != from.row() {
        return false;
    }

    let mut cleared = *ctx.board;
    cleared.take(from);
    cleared.take(victim);

    let toward_pawns = if from.col() > ctx.king.col() { 1 } else { -1 };
    let direction = Direction::new(0, toward_pawns);
    let mut current = direction.step(ctx.king);
    while let Some(sq) = current {
        if let Some(piece) = cleared.get(sq) {
            return piece.color == ctx.enemy()
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
        }
        current = direction.step(sq);
    }
    false
}
