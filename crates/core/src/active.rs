//! Active piece module - the single piece the player controls
//!
//! Every operation follows the same three steps: build a candidate piece,
//! validate it against the grid, then commit it or leave the current piece
//! untouched. Rejections are ordinary results (`Ok(None)`); only a missing
//! piece or an impossible spawn are errors.
//!
//! The controller never stores or writes the grid. Each validating call
//! borrows it read-only from the owner.

use crate::error::{Error, Result};
use crate::grid::OccupancyGrid;
use crate::provider::ShapeProvider;
use crate::shape::PieceShape;
use crate::types::{BoundingBox, Coordinate};

/// A piece placed on the board: body plus the board position of its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub anchor: Coordinate,
    pub body: PieceShape,
}

impl ActivePiece {
    pub fn new(anchor: Coordinate, body: PieceShape) -> Self {
        Self { anchor, body }
    }

    /// Absolute cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.cells_at(self.anchor)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.body.bounding_box(self.anchor)
    }

    /// Same body, anchor shifted by `(dx, dy)`; `None` past the `i32` range
    pub fn shifted(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.anchor.checked_offset(dx, dy)?, self.body))
    }

    /// Same anchor, different body
    pub fn with_body(&self, body: PieceShape) -> Self {
        Self::new(self.anchor, body)
    }
}

/// Whether a piece is currently under control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceSlot {
    #[default]
    Empty,
    Present(ActivePiece),
}

impl PieceSlot {
    pub fn piece(&self) -> Option<&ActivePiece> {
        match self {
            PieceSlot::Empty => None,
            PieceSlot::Present(piece) => Some(piece),
        }
    }
}

/// Check that a candidate fits on the grid.
///
/// The bounding box must lie inside the grid on all four sides; only then is
/// every block checked against settled cells. A placement whose blocks
/// cannot even be expressed as coordinates is never allowed.
pub fn is_allowed(grid: &OccupancyGrid, candidate: &ActivePiece) -> bool {
    let within_board = candidate
        .bounding_box()
        .is_some_and(|bbox| bbox.fits_within(grid.width(), grid.height()));
    if !within_board {
        return false;
    }
    !candidate.cells().any(|cell| grid.is_occupied(cell))
}

/// Owns the active piece and the provider new pieces are drawn from
#[derive(Debug, Clone)]
pub struct ActivePieceController<P> {
    slot: PieceSlot,
    provider: P,
}

impl<P: ShapeProvider> ActivePieceController<P> {
    pub fn new(provider: P) -> Self {
        Self {
            slot: PieceSlot::Empty,
            provider,
        }
    }

    pub fn slot(&self) -> &PieceSlot {
        &self.slot
    }

    pub fn has_piece(&self) -> bool {
        matches!(self.slot, PieceSlot::Present(_))
    }

    /// The current piece, or [`Error::NoActivePiece`]
    pub fn current(&self) -> Result<ActivePiece> {
        match self.slot {
            PieceSlot::Present(piece) => Ok(piece),
            PieceSlot::Empty => Err(Error::NoActivePiece),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Draw a new shape and place it at `anchor`.
    ///
    /// On failure the slot is left empty, even if a piece was active before.
    pub fn create_new_piece(
        &mut self,
        grid: &OccupancyGrid,
        anchor: Coordinate,
    ) -> Result<ActivePiece> {
        let candidate = ActivePiece::new(anchor, self.provider.next_shape());
        if !is_allowed(grid, &candidate) {
            self.slot = PieceSlot::Empty;
            return Err(Error::InvalidSpawn { anchor });
        }
        self.slot = PieceSlot::Present(candidate);
        Ok(candidate)
    }

    pub fn move_left(&mut self, grid: &OccupancyGrid) -> Result<Option<ActivePiece>> {
        self.attempt(grid, |piece| piece.shifted(-1, 0))
    }

    pub fn move_right(&mut self, grid: &OccupancyGrid) -> Result<Option<ActivePiece>> {
        self.attempt(grid, |piece| piece.shifted(1, 0))
    }

    /// Drop by one row. `Ok(None)` means the piece has landed.
    pub fn tick_drop(&mut self, grid: &OccupancyGrid) -> Result<Option<ActivePiece>> {
        self.attempt(grid, |piece| piece.shifted(0, 1))
    }

    pub fn rotate_left(&mut self, grid: &OccupancyGrid) -> Result<Option<ActivePiece>> {
        self.attempt(grid, |piece| Some(piece.with_body(piece.body.rotated_left())))
    }

    pub fn rotate_right(&mut self, grid: &OccupancyGrid) -> Result<Option<ActivePiece>> {
        self.attempt(grid, |piece| Some(piece.with_body(piece.body.rotated_right())))
    }

    pub fn flip_horizontally(&mut self, grid: &OccupancyGrid) -> Result<Option<ActivePiece>> {
        self.attempt(grid, |piece| {
            Some(piece.with_body(piece.body.flipped_horizontally()))
        })
    }

    /// Take the current piece out of the slot, ending its lifespan
    pub fn settle(&mut self) -> Option<ActivePiece> {
        match std::mem::take(&mut self.slot) {
            PieceSlot::Present(piece) => Some(piece),
            PieceSlot::Empty => None,
        }
    }

    fn attempt(
        &mut self,
        grid: &OccupancyGrid,
        transform: impl FnOnce(&ActivePiece) -> Option<ActivePiece>,
    ) -> Result<Option<ActivePiece>> {
        let current = self.current()?;
        let Some(candidate) = transform(&current).filter(|c| is_allowed(grid, c)) else {
            return Ok(None);
        };
        self.slot = PieceSlot::Present(candidate);
        Ok(Some(candidate))
    }
}
