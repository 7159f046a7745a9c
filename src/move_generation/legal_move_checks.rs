//! Check, pin and attack detection.
//!
//! Everything here is a pure function of a board and an explicit color, so the
//! same routines answer questions about the live position and about
//! hypothetical snapshots (king trial placement, en-passant discovery).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::direction::{Direction, KING_LINES};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::{knight_attacks, knight_deltas};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// An enemy piece giving check to the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    /// Step from the king toward the attacker, or the raw knight delta.
    pub direction: Direction,
    pub by_knight: bool,
}

/// Pinned squares and the axis each one is pinned along (king -> pinner).
///
/// Built once per legal-move query and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinMap {
    axes: [Option<Direction>; 64],
}

impl Default for PinMap {
    fn default() -> Self {
        Self { axes: [None; 64] }
    }
}

impl PinMap {
    #[inline]
    pub fn axis(&self, square: Square) -> Option<Direction> {
        self.axes[square.index()]
    }

    #[inline]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.axis(square).is_some()
    }

    /// Whether the piece on `square` may move in `direction`.
    ///
    /// Unpinned pieces may move anywhere. Pinned pieces only along their pin
    /// axis or its exact reverse.
    #[inline]
    pub fn allows(&self, square: Square, direction: Direction) -> bool {
        match self.axis(square) {
            None => true,
            Some(axis) => axis.is_parallel(direction),
        }
    }

    pub fn len(&self) -> usize {
        self.axes.iter().filter(|axis| axis.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, square: Square, axis: Direction) {
        self.axes[square.index()] = Some(axis);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: PinMap,
    pub checks: Vec<Check>,
}

/// Ray-cast outward from `king` (owned by `side`) to find pins and checks.
pub fn compute_pins_and_checks(board: &Board, side: Color, king: Square) -> CheckInfo {
    let enemy = side.opposite();
    let mut pins = PinMap::default();
    let mut checks = Vec::new();

    for direction in KING_LINES {
        let mut candidate_pin: Option<Square> = None;
        let mut distance = 0u8;
        let mut current = direction.step(king);

        while let Some(sq) = current {
            distance += 1;
            current = direction.step(sq);

            let Some(piece) = board.get(sq) else {
                continue;
            };

            if piece.color == side {
                if piece.kind == PieceKind::King || candidate_pin.is_some() {
                    break;
                }
                candidate_pin = Some(sq);
                continue;
            }

            if attacks_along(piece, direction, distance, enemy) {
                match candidate_pin {
                    None => checks.push(Check {
                        attacker: sq,
                        direction,
                        by_knight: false,
                    }),
                    Some(pinned) => pins.insert(pinned, direction),
                }
            }
            break;
        }
    }

    for delta in knight_deltas() {
        let Some(sq) = delta.step(king) else {
            continue;
        };
        if board.get(sq) == Some(Piece::new(enemy, PieceKind::Knight)) {
            checks.push(Check {
                attacker: sq,
                direction: delta,
                by_knight: true,
            });
        }
    }

    CheckInfo {
        in_check: !checks.is_empty(),
        pins,
        checks,
    }
}

/// Whether an enemy `piece` found `distance` squares from the king along
/// `direction` attacks back down that line.
fn attacks_along(piece: Piece, direction: Direction, distance: u8, enemy: Color) -> bool {
    match piece.kind {
        PieceKind::Queen => true,
        PieceKind::Rook => direction.is_orthogonal(),
        PieceKind::Bishop => direction.is_diagonal(),
        PieceKind::King => distance == 1,
        // An enemy pawn attacks toward its own forward row, so from the king it
        // sits one row against that direction.
        PieceKind::Pawn => {
            distance == 1 && direction.is_diagonal() && direction.d_row == -enemy.pawn_forward()
        }
        PieceKind::Knight => false,
    }
}

/// Union of every square `by` attacks on `board`, ignoring pins and checks.
///
/// This is the attacked-square set an opponent's full pseudo-legal generation
/// would reach: sliders up to the first blocker, knight and king offsets, pawn
/// diagonals whether or not something stands there.
pub fn attacked_squares(board: &Board, by: Color) -> u64 {
    board
        .pieces_of(by)
        .fold(0u64, |acc, (sq, piece)| acc | piece_attacks(board, sq, piece))
}

#[inline]
fn piece_attacks(board: &Board, square: Square, piece: Piece) -> u64 {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(board, square),
        PieceKind::Rook => rook_attacks(board, square),
        PieceKind::Queen => queen_attacks(board, square),
        PieceKind::King => king_attacks(square),
    }
}

/// Whether `by` attacks `square` on `board`.
#[inline]
pub fn square_under_attack(board: &Board, square: Square, by: Color) -> bool {
    attacked_squares(board, by) & square.bit() != 0
}

/// Every piece of `by` attacking `square`.
pub fn attackers_to_square(board: &Board, square: Square, by: Color) -> Vec<(Square, PieceKind)> {
    board
        .pieces_of(by)
        .filter(|(sq, piece)| piece_attacks(board, *sq, *piece) & square.bit() != 0)
        .map(|(sq, piece)| (sq, piece.kind))
        .collect()
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    square_under_attack(
        game_state.board(),
        game_state.king_square(color),
        color.opposite(),
    )
}
