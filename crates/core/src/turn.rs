//! Turn module - owns the grid and drives one piece from spawn to landing
//!
//! The active piece is painted onto the grid like any settled block. Every
//! request erases it, lets the controller validate the move against the
//! remaining cells, and paints it again at whichever position won. A rejected
//! drop ends the piece: its cells stay painted, completed rows are removed
//! and the next piece is spawned at the spawn point.
//!
//! The manager starts paused and stays paused until [`BoardTurnManager::init_turn`]
//! succeeds. While paused every request is answered with [`TurnStep::Paused`].

use crate::active::{ActivePiece, ActivePieceController};
use crate::error::{Error, Result};
use crate::grid::OccupancyGrid;
use crate::provider::{BagProvider, ShapeProvider};
use crate::types::{
    Coordinate, TurnAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_SPAWN_POINT,
};

/// Board dimensions and spawn anchor, fixed for a manager's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub spawn: Coordinate,
}

impl BoardConfig {
    pub fn new(width: usize, height: usize, spawn: Coordinate) -> Self {
        Self {
            width,
            height,
            spawn,
        }
    }

    /// Reject boards without at least one cell in each direction.
    ///
    /// The spawn anchor is not checked here; a spawn that never fits
    /// surfaces as [`Error::InvalidSpawn`] from the first turn.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT, DEFAULT_SPAWN_POINT)
    }
}

/// What happened when a piece landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingEvent {
    /// The piece as it came to rest
    pub settled: ActivePiece,
    /// Rows removed, as indices at scan time, ascending
    pub cleared_rows: Vec<usize>,
}

/// Outcome of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStep {
    /// No turn in progress; nothing was touched
    Paused,
    /// Accepted; the piece now sits here
    Moved(ActivePiece),
    /// Refused; grid and piece are unchanged
    Rejected,
    /// The drop was refused, so the piece settled and the turn resolved
    Landed(LandingEvent),
}

impl TurnStep {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TurnStep::Moved(_))
    }
}

/// Orchestrates spawning, movement and row clearing on one board
#[derive(Debug, Clone)]
pub struct BoardTurnManager<P = BagProvider> {
    grid: OccupancyGrid,
    controller: ActivePieceController<P>,
    spawn: Coordinate,
    lines_cleared: u32,
    pieces_spawned: u32,
    paused: bool,
    /// Last landing (consumed by observers).
    last_event: Option<LandingEvent>,
}

impl<P: ShapeProvider> BoardTurnManager<P> {
    /// Create a manager over an empty board
    pub fn new(config: BoardConfig, provider: P) -> Result<Self> {
        config.validate()?;
        let grid = OccupancyGrid::new(config.width, config.height)?;
        Ok(Self::with_grid(grid, config.spawn, provider))
    }

    /// Create a manager over a grid that may already hold settled cells
    pub fn with_grid(grid: OccupancyGrid, spawn: Coordinate, provider: P) -> Self {
        Self {
            grid,
            controller: ActivePieceController::new(provider),
            spawn,
            lines_cleared: 0,
            pieces_spawned: 0,
            paused: true,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Total rows removed since construction
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Successful spawns since construction
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn spawn_point(&self) -> Coordinate {
        self.spawn
    }

    pub fn active_piece(&self) -> Result<ActivePiece> {
        self.controller.current()
    }

    pub fn controller(&self) -> &ActivePieceController<P> {
        &self.controller
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    /// Start a turn: spawn a piece at the spawn point, paint it and unpause.
    ///
    /// [`Error::InvalidSpawn`] means the board is topped out. The manager
    /// stays paused in that case and the grid is left as it was.
    pub fn init_turn(&mut self) -> Result<ActivePiece> {
        let piece = self.controller.create_new_piece(&self.grid, self.spawn)?;
        self.grid.paint(piece.cells(), true);
        self.pieces_spawned += 1;
        self.paused = false;
        Ok(piece)
    }

    pub fn move_piece_left(&mut self) -> Result<TurnStep> {
        self.step(|ctl, grid| ctl.move_left(grid))
    }

    pub fn move_piece_right(&mut self) -> Result<TurnStep> {
        self.step(|ctl, grid| ctl.move_right(grid))
    }

    pub fn rotate_left(&mut self) -> Result<TurnStep> {
        self.step(|ctl, grid| ctl.rotate_left(grid))
    }

    pub fn rotate_right(&mut self) -> Result<TurnStep> {
        self.step(|ctl, grid| ctl.rotate_right(grid))
    }

    pub fn flip_horizontally(&mut self) -> Result<TurnStep> {
        self.step(|ctl, grid| ctl.flip_horizontally(grid))
    }

    /// Drop the piece one row, resolving the turn if it cannot fall further
    pub fn tick_drop(&mut self) -> Result<TurnStep> {
        match self.step(|ctl, grid| ctl.tick_drop(grid))? {
            TurnStep::Rejected => self.resolve_turn().map(TurnStep::Landed),
            step => Ok(step),
        }
    }

    /// Dispatch a [`TurnAction`] to the matching entry point
    pub fn apply(&mut self, action: TurnAction) -> Result<TurnStep> {
        match action {
            TurnAction::MoveLeft => self.move_piece_left(),
            TurnAction::MoveRight => self.move_piece_right(),
            TurnAction::RotateLeft => self.rotate_left(),
            TurnAction::RotateRight => self.rotate_right(),
            TurnAction::Flip => self.flip_horizontally(),
            TurnAction::Drop => self.tick_drop(),
        }
    }

    /// Erase, attempt, repaint.
    ///
    /// The piece is erased before the attempt so it never collides with its
    /// own footprint. Whatever the outcome, exactly one footprint is painted
    /// back: the new one if accepted, the original otherwise.
    fn step<F>(&mut self, attempt: F) -> Result<TurnStep>
    where
        F: FnOnce(&mut ActivePieceController<P>, &OccupancyGrid) -> Result<Option<ActivePiece>>,
    {
        if self.paused {
            return Ok(TurnStep::Paused);
        }
        let original = self.controller.current()?;

        self.grid.paint(original.cells(), false);
        let outcome = attempt(&mut self.controller, &self.grid);
        let (painted, step) = match outcome {
            Ok(Some(moved)) => (moved, Ok(TurnStep::Moved(moved))),
            Ok(None) => (original, Ok(TurnStep::Rejected)),
            Err(err) => (original, Err(err)),
        };
        self.grid.paint(painted.cells(), true);
        step
    }

    /// Settle the piece, remove full rows and start the next turn
    fn resolve_turn(&mut self) -> Result<LandingEvent> {
        self.paused = true;
        let settled = self.controller.settle().ok_or(Error::NoActivePiece)?;

        let cleared_rows = self.grid.clear_full_rows();
        self.lines_cleared += cleared_rows.len() as u32;

        let event = LandingEvent {
            settled,
            cleared_rows,
        };
        self.last_event = Some(event.clone());

        self.init_turn()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{L_SHAPE, SQUARE};
    use crate::provider::CycleProvider;

    fn at(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn square_board(
        width: usize,
        height: usize,
        spawn: Coordinate,
    ) -> BoardTurnManager<CycleProvider> {
        let config = BoardConfig::new(width, height, spawn);
        BoardTurnManager::new(config, CycleProvider::repeat(SQUARE)).unwrap()
    }

    #[test]
    fn test_new_manager_is_paused() {
        let mut mgr = square_board(4, 4, at(0, 0));
        assert!(mgr.is_paused());
        assert_eq!(mgr.active_piece(), Err(Error::NoActivePiece));
        assert_eq!(mgr.move_piece_left(), Ok(TurnStep::Paused));
        assert_eq!(mgr.tick_drop(), Ok(TurnStep::Paused));
        assert_eq!(mgr.grid().occupied_count(), 0);
    }

    #[test]
    fn test_new_rejects_empty_board() {
        let config = BoardConfig::new(0, 4, at(0, 0));
        let err = BoardTurnManager::new(config, CycleProvider::repeat(SQUARE)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!((config.width, config.height), (9, 15));
        assert_eq!(config.spawn, at(3, 0));
        assert!(config.validate().is_ok());

        let mgr = BoardTurnManager::new(config, BagProvider::default()).unwrap();
        assert_eq!(mgr.grid().width(), 9);
        assert_eq!(mgr.grid().height(), 15);
        assert_eq!(mgr.spawn_point(), at(3, 0));
    }

    #[test]
    fn test_init_turn_paints_piece() {
        let mut mgr = square_board(4, 4, at(1, 0));
        let piece = mgr.init_turn().unwrap();
        assert_eq!(piece.anchor, at(1, 0));
        assert!(!mgr.is_paused());
        assert_eq!(mgr.pieces_spawned(), 1);
        assert_eq!(mgr.grid().occupied_count(), 4);
        for cell in piece.cells() {
            assert!(mgr.grid().is_occupied(cell));
        }
    }

    #[test]
    fn test_init_turn_failure_keeps_paused() {
        let mut mgr = square_board(4, 4, at(3, 0));
        assert_eq!(
            mgr.init_turn(),
            Err(Error::InvalidSpawn { anchor: at(3, 0) })
        );
        assert!(mgr.is_paused());
        assert_eq!(mgr.pieces_spawned(), 0);
        assert_eq!(mgr.grid().occupied_count(), 0);
    }

    #[test]
    fn test_accepted_move_repaints() {
        let mut mgr = square_board(4, 4, at(1, 0));
        mgr.init_turn().unwrap();
        let step = mgr.move_piece_right().unwrap();
        let TurnStep::Moved(piece) = step else {
            panic!("expected move, got {:?}", step);
        };
        assert_eq!(piece.anchor, at(2, 0));
        assert_eq!(mgr.grid().occupied_count(), 4);
        assert!(!mgr.grid().is_occupied(at(1, 0)));
        assert!(mgr.grid().is_occupied(at(3, 1)));
    }

    #[test]
    fn test_rejected_move_leaves_grid_unchanged() {
        let mut mgr = square_board(4, 4, at(0, 0));
        mgr.init_turn().unwrap();
        let before = mgr.grid().clone();
        assert_eq!(mgr.move_piece_left(), Ok(TurnStep::Rejected));
        assert_eq!(mgr.grid(), &before);
        assert_eq!(mgr.active_piece().unwrap().anchor, at(0, 0));
    }

    #[test]
    fn test_rotation_on_board() {
        let config = BoardConfig::new(4, 4, at(1, 0));
        let mut mgr = BoardTurnManager::new(config, CycleProvider::repeat(L_SHAPE)).unwrap();
        mgr.init_turn().unwrap();

        let step = mgr.rotate_left().unwrap();
        assert!(step.is_accepted());
        assert_eq!(mgr.grid().occupied_count(), 4);
        let expected = OccupancyGrid::from_ascii(
            "
            .###
            .#..
            ....
            ....
            ",
        )
        .unwrap();
        assert_eq!(mgr.grid(), &expected);
    }

    #[test]
    fn test_tick_drop_until_landing() {
        let mut mgr = square_board(4, 4, at(0, 0));
        mgr.init_turn().unwrap();
        assert!(mgr.tick_drop().unwrap().is_accepted());
        assert!(mgr.tick_drop().unwrap().is_accepted());

        let step = mgr.tick_drop().unwrap();
        let TurnStep::Landed(event) = step else {
            panic!("expected landing, got {:?}", step);
        };
        assert_eq!(event.settled.anchor, at(0, 2));
        assert!(event.cleared_rows.is_empty());

        // Settled square at the bottom plus the fresh one at the top.
        assert_eq!(mgr.grid().occupied_count(), 8);
        assert_eq!(mgr.active_piece().unwrap().anchor, at(0, 0));
        assert_eq!(mgr.pieces_spawned(), 2);
        assert!(!mgr.is_paused());
        assert_eq!(mgr.take_last_event(), Some(event));
        assert_eq!(mgr.take_last_event(), None);
    }

    #[test]
    fn test_landing_clears_full_rows() {
        let grid = OccupancyGrid::from_ascii(
            "
            ....
            ....
            ##..
            ##..
            ",
        )
        .unwrap();
        let mut mgr = BoardTurnManager::with_grid(grid, at(2, 0), CycleProvider::repeat(SQUARE));
        mgr.init_turn().unwrap();
        mgr.tick_drop().unwrap();
        mgr.tick_drop().unwrap();

        let step = mgr.tick_drop().unwrap();
        let TurnStep::Landed(event) = step else {
            panic!("expected landing, got {:?}", step);
        };
        assert_eq!(event.cleared_rows, vec![2, 3]);
        assert_eq!(mgr.lines_cleared(), 2);
        assert_eq!(mgr.grid().height(), 4);

        let expected = OccupancyGrid::from_ascii(
            "
            ..##
            ..##
            ....
            ....
            ",
        )
        .unwrap();
        assert_eq!(mgr.grid(), &expected);
    }

    #[test]
    fn test_landing_clears_single_bottom_row() {
        let grid = OccupancyGrid::from_ascii(
            "
            ....
            ....
            ....
            ##..
            ",
        )
        .unwrap();
        let mut mgr = BoardTurnManager::with_grid(grid, at(2, 0), CycleProvider::repeat(SQUARE));
        mgr.init_turn().unwrap();
        // Square lands with its lower half in row 3, completing it.
        mgr.tick_drop().unwrap();
        mgr.tick_drop().unwrap();
        let TurnStep::Landed(event) = mgr.tick_drop().unwrap() else {
            panic!("expected landing");
        };
        assert_eq!(event.cleared_rows, vec![3]);
        assert_eq!(mgr.lines_cleared(), 1);
        assert_eq!(mgr.grid().row(0), Some(&[false, false, true, true][..]));
        assert_eq!(mgr.grid().row(3), Some(&[false, false, true, true][..]));
    }

    #[test]
    fn test_respawn_failure_is_game_over() {
        let mut mgr = square_board(3, 3, at(0, 0));
        mgr.init_turn().unwrap();
        mgr.tick_drop().unwrap();

        // Lands at rows 1-2; the next square overlaps row 1.
        assert_eq!(
            mgr.tick_drop(),
            Err(Error::InvalidSpawn { anchor: at(0, 0) })
        );
        assert!(mgr.is_paused());
        assert_eq!(mgr.active_piece(), Err(Error::NoActivePiece));
        assert_eq!(mgr.grid().occupied_count(), 4);
        assert!(mgr.take_last_event().is_some());
        assert_eq!(mgr.tick_drop(), Ok(TurnStep::Paused));
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut mgr = square_board(4, 4, at(1, 0));
        mgr.init_turn().unwrap();
        assert!(mgr.apply(TurnAction::MoveRight).unwrap().is_accepted());
        assert_eq!(mgr.apply(TurnAction::MoveRight), Ok(TurnStep::Rejected));
        assert!(mgr.apply(TurnAction::MoveLeft).unwrap().is_accepted());
        assert!(mgr.apply(TurnAction::Drop).unwrap().is_accepted());
        assert_eq!(mgr.active_piece().unwrap().anchor, at(1, 1));
    }
}
