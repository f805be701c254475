use criterion::{black_box, criterion_group, criterion_main, Criterion};
use block_drop::core::{BagProvider, BoardConfig, BoardTurnManager, OccupancyGrid, L_SHAPE};
use block_drop::types::{TurnAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn started_board() -> BoardTurnManager {
    let mut board = BoardTurnManager::new(BoardConfig::default(), BagProvider::new(12345)).unwrap();
    board.init_turn().unwrap();
    board
}

fn bench_rotation(c: &mut Criterion) {
    c.bench_function("shape_rotate_left", |b| {
        b.iter(|| black_box(L_SHAPE).rotated_left())
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = OccupancyGrid::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT).unwrap();
            // Fill bottom 4 rows
            let (width, height) = (DEFAULT_BOARD_WIDTH as i32, DEFAULT_BOARD_HEIGHT as i32);
            for y in height - 4..height {
                for x in 0..width {
                    grid.set(x, y, true);
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = started_board();
    let mut right = true;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            let step = if right {
                board.move_piece_right()
            } else {
                board.move_piece_left()
            };
            if !matches!(step, Ok(ref s) if s.is_accepted()) {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = started_board();

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            let _ = board.rotate_right();
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("drop_until_top_out", |b| {
        b.iter(|| {
            let mut board = started_board();
            let mut steps = 0u32;
            while board.apply(black_box(TurnAction::Drop)).is_ok() {
                steps += 1;
            }
            steps
        })
    });
}

criterion_group!(
    benches,
    bench_rotation,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_full_game
);
criterion_main!(benches);
