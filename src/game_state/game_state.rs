//! Aggregate game state.
//!
//! `GameState` owns the board, side to move, cached king squares, castling
//! rights, the en-passant target and the undo stack. It is mutated in place by
//! `make_move` / `undo_move` (see `move_generation::legal_move_apply`) and is
//! never copied implicitly; searches that want to explore on their own must
//! `clone()` it.
//!
//! `in_check` and `terminal` are observables of the most recent
//! [`GameState::legal_moves`] call and are not maintained between queries.

use tracing::warn;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    king_home, kingside_rook_home, pawn_start_row, queenside_rook_home,
};
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square, Terminal};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::{Move, MoveId};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Indexed by `Color::index()`.
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<UndoState>,
    pub(crate) in_check: bool,
    pub(crate) terminal: Terminal,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, all castling rights held.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_squares: [king_home(Color::White), king_home(Color::Black)],
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            history: Vec::new(),
            in_check: false,
            terminal: Terminal::InProgress,
        }
    }

    /// Build an arbitrary position.
    ///
    /// Exactly one king per color is required. Castling rights whose king or
    /// rook is not on its home square are dropped, and an en-passant target is
    /// only accepted where the opponent's last move could have been a
    /// double-step over it.
    pub fn from_setup(
        placement: impl IntoIterator<Item = (Square, Piece)>,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let mut board = Board::empty();
        for (square, piece) in placement {
            board.set(square, Some(piece));
        }

        let king_squares = [
            single_king(&board, Color::White)?,
            single_king(&board, Color::Black)?,
        ];

        if let Some(target) = en_passant_target {
            validate_en_passant_target(&board, side_to_move, target)?;
        }

        Ok(Self {
            board,
            side_to_move,
            king_squares,
            castling_rights: held_castling_rights(&board, castling_rights),
            en_passant_target,
            history: Vec::new(),
            in_check: false,
            terminal: Terminal::InProgress,
        })
    }

    /// Return to the initial position, discarding history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Applied-but-not-undone plies, oldest first.
    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|record| &record.mv)
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.terminal == Terminal::Checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.terminal == Terminal::Stalemate
    }

    /// End-of-game banner, or `None` while the game is in progress.
    pub fn outcome_text(&self) -> Option<&'static str> {
        match (self.terminal, self.side_to_move) {
            (Terminal::InProgress, _) => None,
            (Terminal::Stalemate, _) => Some("Stalemate"),
            (Terminal::Checkmate, Color::White) => Some("Black wins"),
            (Terminal::Checkmate, Color::Black) => Some("White wins"),
        }
    }

    /// Legal moves for the side to move. Refreshes `in_check` and `terminal`.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let legal = generate_legal_moves(self);
        self.in_check = legal.in_check;
        self.terminal = legal.terminal;
        legal.moves
    }

    /// The legal move going from `from` to `to`, for input layers that only
    /// know the two squares.
    pub fn find_legal_move(&self, from: Square, to: Square) -> ChessResult<Move> {
        let id = MoveId {
            start: from,
            end: to,
        };
        generate_legal_moves(self)
            .moves
            .into_iter()
            .find(|mv| mv.id() == id)
            .ok_or_else(|| ChessError::NoMoveAt {
                from: square_to_algebraic(from),
                to: square_to_algebraic(to),
            })
    }

    /// Membership-checked `make_move`. The state is untouched on error.
    pub fn try_make_move(&mut self, mv: Move) -> ChessResult<()> {
        if !generate_legal_moves(self).moves.contains(&mv) {
            warn!(notation = %mv, side = %self.side_to_move, "rejected illegal move");
            return Err(ChessError::IllegalMove {
                notation: mv.coordinate_notation(),
            });
        }
        self.make_move(mv);
        Ok(())
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    match board.find_kings(color).as_slice() {
        [] => Err(ChessError::MissingKing(color)),
        [square] => Ok(*square),
        _ => Err(ChessError::DuplicateKing(color)),
    }
}

fn held_castling_rights(board: &Board, requested: CastlingRights) -> CastlingRights {
    let mut rights = requested;
    for color in [Color::White, Color::Black] {
        if board.get(king_home(color)) != Some(Piece::new(color, PieceKind::King)) {
            rights.revoke_both(color);
        }
        let rook = Some(Piece::new(color, PieceKind::Rook));
        if board.get(kingside_rook_home(color)) != rook {
            rights.revoke_kingside(color);
        }
        if board.get(queenside_rook_home(color)) != rook {
            rights.revoke_queenside(color);
        }
    }
    rights
}

fn validate_en_passant_target(board: &Board, side_to_move: Color, target: Square) -> ChessResult<()> {
    let mover = side_to_move.opposite();
    let forward = mover.pawn_forward();
    let expected_row = pawn_start_row(mover) as i8 + forward;
    let invalid = || ChessError::InvalidEnPassantTarget(square_to_algebraic(target));

    if target.row() as i8 != expected_row || !board.is_empty(target) {
        return Err(invalid());
    }
    let pawn_square = target.offset(forward, 0).ok_or_else(invalid)?;
    let origin = target.offset(-forward, 0).ok_or_else(invalid)?;
    if board.get(pawn_square) != Some(Piece::new(mover, PieceKind::Pawn)) || !board.is_empty(origin) {
        return Err(invalid());
    }
    Ok(())
}
