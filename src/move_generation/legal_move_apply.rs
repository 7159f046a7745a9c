use tracing::trace;

use crate::game_state::chess_rules::{castle_rook_squares, kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square, Terminal};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::Move;

impl GameState {
    /// Apply `mv` in place and push its undo record.
    ///
    /// The move is trusted: it must come from this state's legal move set.
    /// `try_make_move` is the membership-checked entry point.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;
        let record = UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        };

        self.board.take(mv.start);
        if mv.is_en_passant {
            self.board.take(mv.capture_square());
        }
        let placed = if mv.is_promotion {
            Piece::new(mover, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        self.board.set(mv.end, Some(placed));

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv.end);
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.end;
        }

        self.en_passant_target = double_step_target(&mv);
        revoke_castling_rights(&mut self.castling_rights, &mv);

        self.history.push(record);
        self.side_to_move = mover.opposite();

        trace!(ply = self.history.len(), notation = %mv, "make_move");
    }

    /// Revert the most recent `make_move`. Returns the reverted move, or
    /// `None` without touching anything when the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        let mv = record.mv;
        let mover = mv.piece_moved.color;

        self.board.set(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.board.set(mv.end, None);
            self.board.set(mv.capture_square(), mv.piece_captured);
        } else {
            self.board.set(mv.end, mv.piece_captured);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv.end);
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.start;
        }

        self.castling_rights = record.prev_castling_rights;
        self.en_passant_target = record.prev_en_passant_target;
        self.side_to_move = mover;
        self.terminal = Terminal::InProgress;

        trace!(ply = self.history.len() + 1, notation = %mv, "undo_move");
        Some(mv)
    }
}

/// The square passed over by a pawn double-step.
fn double_step_target(mv: &Move) -> Option<Square> {
    if mv.piece_moved.kind != PieceKind::Pawn || mv.start.row().abs_diff(mv.end.row()) != 2 {
        return None;
    }
    Some(Square::new((mv.start.row() + mv.end.row()) / 2, mv.start.col()))
}

fn revoke_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    let mover = mv.piece_moved.color;
    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_both(mover),
        PieceKind::Rook => revoke_for_rook_home(rights, mover, mv.start),
        _ => {}
    }

    // Capturing a rook on its original square also removes rights.
    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook {
            revoke_for_rook_home(rights, captured.color, mv.end);
        }
    }
}

fn revoke_for_rook_home(rights: &mut CastlingRights, color: Color, square: Square) {
    if square == kingside_rook_home(color) {
        rights.revoke_kingside(color);
    } else if square == queenside_rook_home(color) {
        rights.revoke_queenside(color);
    }
}
