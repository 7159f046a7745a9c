//! Full legal move generation pipeline.
//!
//! Computes pins and checks once for the side to move, runs the per-piece
//! generators under those constraints, and narrows the result according to the
//! number of checks: none allows castling, one restricts non-king moves to the
//! checking line, two or more leave only king moves.

use tracing::debug;

use crate::game_state::chess_types::{PieceKind, Square, Terminal};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{
    compute_pins_and_checks, square_under_attack, Check,
};
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{LegalMoves, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> LegalMoves {
        generate_legal_moves(game_state)
    }
}

pub fn generate_legal_moves(game_state: &GameState) -> LegalMoves {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let king = game_state.king_square(side);
    let info = compute_pins_and_checks(board, side, king);

    let ctx = MoveGenContext {
        board,
        side,
        king,
        en_passant_target: game_state.en_passant_target(),
        pins: &info.pins,
    };

    let mut moves = Vec::with_capacity(64);
    match info.checks.as_slice() {
        [] => {
            generate_piece_moves(&ctx, &mut moves);
            generate_castling_moves(&ctx, &game_state.castling_rights(), &mut moves);
        }
        [check] => {
            generate_piece_moves(&ctx, &mut moves);
            let blocking = blocking_squares(king, check);
            moves.retain(|mv| {
                mv.piece_moved.kind == PieceKind::King
                    || blocking & mv.end.bit() != 0
                    || (mv.is_en_passant && mv.capture_square() == check.attacker)
            });
        }
        _ => generate_king_moves(&ctx, king, &mut moves),
    }

    let terminal = if !moves.is_empty() {
        Terminal::InProgress
    } else if square_under_attack(board, king, side.opposite()) {
        Terminal::Checkmate
    } else {
        Terminal::Stalemate
    };

    debug!(
        side = %side,
        moves = moves.len(),
        checks = info.checks.len(),
        pins = info.pins.len(),
        ?terminal,
        "legal move query"
    );

    LegalMoves {
        moves,
        in_check: info.in_check,
        check_count: info.checks.len(),
        terminal,
    }
}

/// Pseudo-legal moves of every own piece, pin-filtered, in row-major order.
fn generate_piece_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    for (from, piece) in ctx.board.pieces_of(ctx.side) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(ctx, from, out),
            PieceKind::Knight => generate_knight_moves(ctx, from, out),
            PieceKind::Bishop => generate_bishop_moves(ctx, from, out),
            PieceKind::Rook => generate_rook_moves(ctx, from, out),
            PieceKind::Queen => generate_queen_moves(ctx, from, out),
            PieceKind::King => generate_king_moves(ctx, from, out),
        }
    }
}

/// Squares a non-king move may land on to answer a single check: the line from
/// the king up to and including the checker, or only the checker for a knight.
fn blocking_squares(king: Square, check: &Check) -> u64 {
    if check.by_knight {
        return check.attacker.bit();
    }
    let mut mask = 0u64;
    let mut current = check.direction.step(king);
    while let Some(sq) = current {
        mask |= sq.bit();
        if sq == check.attacker {
            break;
        }
        current = check.direction.step(sq);
    }
    mask
}
