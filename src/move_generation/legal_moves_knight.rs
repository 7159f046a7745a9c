use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::direction::mask_squares;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    // No knight jump stays on a line, so a pinned knight has nothing.
    if ctx.pins.is_pinned(from) {
        return;
    }
    for to in mask_squares(knight_attacks(from)) {
        if !ctx.is_ally(to) {
            ctx.push_move(from, to, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::game_state::game_state::GameState;
    use crate::test_support::{position, sq};

    #[test]
    fn knight_skips_allied_squares() {
        let mut state = GameState::new_game();
        let from_g1: Vec<String> = state
            .legal_moves()
            .iter()
            .filter(|mv| mv.start == sq("g1"))
            .map(|mv| mv.to_string())
            .collect();
        assert_eq!(from_g1, vec!["Nf3", "Nh3"]);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let mut state = position(
            [
                "....k...", //
                "........",
                "........",
                "........",
                "....q...",
                "........",
                "....N...",
                "....K...",
            ],
            Color::White,
            CastlingRights::NONE,
            None,
        );
        assert!(state.legal_moves().iter().all(|mv| mv.start != sq("e2")));
    }
}
