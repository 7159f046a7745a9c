use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use chess_rules::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    rows: [&'static str; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
    expected_nodes: &'static [u64],
}

const STARTPOS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

const KIWIPETE: [&str; 8] = [
    "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
    "R...K..R",
];

const ROOK_AND_PAWNS: [&str; 8] = [
    "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
    "........",
];

// Depths stop before the first promotion in each tree.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        rows: STARTPOS,
        side_to_move: Color::White,
        castling_rights: CastlingRights::ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        rows: KIWIPETE,
        side_to_move: Color::White,
        castling_rights: CastlingRights::ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        rows: ROOK_AND_PAWNS,
        side_to_move: Color::White,
        castling_rights: CastlingRights::NONE,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        rows: STARTPOS,
        side_to_move: Color::White,
        castling_rights: CastlingRights::ALL,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        rows: KIWIPETE,
        side_to_move: Color::White,
        castling_rights: CastlingRights::ALL,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        rows: ROOK_AND_PAWNS,
        side_to_move: Color::White,
        castling_rights: CastlingRights::NONE,
        expected_nodes: &[14, 191, 2812, 43_238, 674_624],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
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
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

fn build_state(case: &BenchCase) -> GameState {
    let placement = case.rows.iter().enumerate().flat_map(|(row, line)| {
        line.chars().enumerate().filter_map(move |(col, symbol)| {
            piece_from_char(symbol).map(|piece| (Square::new(row as u8, col as u8), piece))
        })
    });
    GameState::from_setup(placement, case.side_to_move, case.castling_rights, None)
        .expect("benchmark diagram should be a valid setup")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let mut game = build_state(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &mut game, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count =
                            perft(&LegalMoveGenerator, black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
