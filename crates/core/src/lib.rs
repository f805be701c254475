//! Core turn logic module - pure, deterministic, and testable
//!
//! This crate contains the falling-piece rules: piece geometry, collision and
//! boundary checks, the single active piece and turn resolution with row
//! clearing. It has no dependencies on rendering or I/O.
//!
//! # Module Structure
//!
//! - [`transform`]: pure rotate/flip/normalize/bounding-box functions
//! - [`shape`]: validated four-block piece bodies
//! - [`catalog`]: the seven standard tetrominoes
//! - [`provider`]: where new bodies come from (7-bag, fixed cycle, closures)
//! - [`grid`]: boolean occupancy matrix with row removal
//! - [`active`]: the active piece and its controller
//! - [`turn`]: the board turn manager
//! - [`error`]: everything that is not an ordinary rejection
//!
//! # Rules
//!
//! - A piece is four blocks placed relative to its top-left corner (the anchor)
//! - Moves, rotations and flips are applied only if the whole piece stays on
//!   the board and overlaps no settled cell; there are no wall kicks
//! - A drop that cannot be applied lands the piece; full rows are then removed
//!   and the next piece spawns at the spawn point
//! - A spawn that does not fit ends the game
//!
//! # Example
//!
//! ```
//! use block_drop_core::{BoardConfig, BoardTurnManager, CycleProvider, TurnStep, SQUARE};
//! use block_drop_core::types::Coordinate;
//!
//! let config = BoardConfig::new(4, 4, Coordinate::new(1, 0));
//! let mut board = BoardTurnManager::new(config, CycleProvider::repeat(SQUARE)).unwrap();
//! board.init_turn().unwrap();
//!
//! assert!(board.move_piece_left().unwrap().is_accepted());
//! assert_eq!(board.move_piece_left().unwrap(), TurnStep::Rejected);
//! assert_eq!(board.grid().occupied_count(), 4);
//! ```

pub mod active;
pub mod catalog;
pub mod error;
pub mod grid;
pub mod provider;
pub mod shape;
pub mod transform;
pub mod turn;

pub use block_drop_types as types;

// Re-export commonly used types for convenience
pub use active::{is_allowed, ActivePiece, ActivePieceController, PieceSlot};
pub use catalog::{ShapeKind, L_SHAPE, SQUARE};
pub use error::{Error, Result};
pub use grid::OccupancyGrid;
pub use provider::{BagProvider, CycleProvider, ShapeProvider, SimpleRng};
pub use shape::PieceShape;
pub use turn::{BoardConfig, BoardTurnManager, LandingEvent, TurnStep};
