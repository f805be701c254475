//! Script replay tests

use block_drop::core::{BoardConfig, BoardTurnManager, CycleProvider, L_SHAPE, SQUARE};
use block_drop::script::{parse_script, replay};
use block_drop::types::Coordinate;

fn board(spawn: Coordinate, width: usize, height: usize) -> BoardTurnManager<CycleProvider> {
    let config = BoardConfig::new(width, height, spawn);
    BoardTurnManager::new(config, CycleProvider::new([SQUARE, L_SHAPE]).unwrap()).unwrap()
}

#[test]
fn replay_counts_outcomes() {
    let mut board = board(Coordinate::new(2, 0), 4, 4);
    board.init_turn().unwrap();

    // Square: left twice, a third left into the wall, then three drops,
    // the third landing it in the bottom-left corner.
    let actions = parse_script(&["hhh", "jjj"]).unwrap();
    let summary = replay(&mut board, &actions).unwrap();

    assert_eq!(summary.applied, 6);
    assert_eq!(summary.accepted, 4);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.landings, 1);
    assert!(!summary.game_over);

    let next = board.active_piece().unwrap();
    assert_eq!(next.body, L_SHAPE);
    assert_eq!(next.anchor, Coordinate::new(2, 0));
}

#[test]
fn replay_stops_at_game_over() {
    let mut board = board(Coordinate::new(0, 0), 2, 3);
    board.init_turn().unwrap();

    let actions = parse_script(&["drop drop drop drop"]).unwrap();
    let summary = replay(&mut board, &actions).unwrap();

    // 1: square drops to rows 1-2.
    // 2: square lands, both rows clear, the L spawns filling the board.
    // 3: L lands, its foot row clears, the next square overlaps it.
    assert_eq!(summary.applied, 3);
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.landings, 2);
    assert!(summary.game_over);
    assert_eq!(board.lines_cleared(), 3);
    assert!(board.is_paused());
}
