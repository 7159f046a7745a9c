//! Fixture helpers shared by the unit tests.
//!
//! Positions are drawn as eight rank strings from rank 8 down to rank 1:
//! `KQRBNP` for White, lowercase for Black, `.` for an empty square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

pub(crate) fn sq(text: &str) -> Square {
    let bytes = text.as_bytes();
    assert_eq!(bytes.len(), 2, "square text must be two characters: {text}");
    let col = bytes[0].wrapping_sub(b'a');
    let row = b'8'.wrapping_sub(bytes[1]);
    Square::try_new(row, col).unwrap_or_else(|err| panic!("bad square {text}: {err}"))
}

fn piece_from_char(symbol: char) -> Option<Piece> {
    let color = if symbol.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match symbol.to_ascii_uppercase() {
        'P' => PieceKind::Pawn,
        'N' => PieceKind::Knight,
        'B' => PieceKind::Bishop,
        'R' => PieceKind::Rook,
        'Q' => PieceKind::Queen,
        'K' => PieceKind::King,
        '.' => return None,
        other => panic!("unknown piece symbol {other:?}"),
    };
    Some(Piece::new(color, kind))
}

pub(crate) fn placement(rows: [&str; 8]) -> Vec<(Square, Piece)> {
    let mut out = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "rank {row} must have eight squares: {line:?}");
        for (col, symbol) in line.chars().enumerate() {
            if let Some(piece) = piece_from_char(symbol) {
                out.push((Square::new(row as u8, col as u8), piece));
            }
        }
    }
    out
}

pub(crate) fn board_from_rows(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (square, piece) in placement(rows) {
        board.set(square, Some(piece));
    }
    board
}

pub(crate) fn position(
    rows: [&str; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> GameState {
    GameState::from_setup(placement(rows), side_to_move, castling_rights, en_passant_target)
        .unwrap_or_else(|err| panic!("fixture should be a valid setup: {err}"))
}

/// Play coordinate moves such as `e2e4`, each checked against the legal set.
pub(crate) fn play(game: &mut GameState, moves: &[&str]) {
    for text in moves {
        assert_eq!(text.len(), 4, "coordinate move must be four characters: {text}");
        let mv = game
            .find_legal_move(sq(&text[..2]), sq(&text[2..]))
            .unwrap_or_else(|err| panic!("{text} is not playable: {err}"));
        game.make_move(mv);
    }
}
