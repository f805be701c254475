//! Error module - failures that are not ordinary move rejections
//!
//! A move, rotation or drop that would leave the board or overlap settled
//! cells is a normal outcome and is reported as `None`, never as an error.
//! Everything in [`Error`] is either a defect in shape data or grid setup,
//! a precondition violation, or the spawn rejection the surrounding game
//! treats as game over.

use crate::types::Coordinate;

/// Errors raised by the turn logic
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A fresh piece does not fit at the spawn anchor (board is full there)
    #[error("new piece at anchor {anchor} is not in a valid state")]
    InvalidSpawn { anchor: Coordinate },

    /// A piece operation was requested while no piece is active
    #[error("active piece has not yet been set")]
    NoActivePiece,

    /// A relative block lies left of or above the piece anchor
    #[error("relative block x={x}, y={y} lies outside the piece anchor corner (coordinates must be non-negative)")]
    MalformedPiece { x: i32, y: i32 },

    /// The same relative block appears twice in one body
    #[error("relative block x={x}, y={y} appears more than once in the piece body")]
    DuplicateBlock { x: i32, y: i32 },

    /// A body was built from the wrong number of blocks
    #[error("piece body needs exactly 4 blocks, found {count}")]
    BlockCount { count: usize },

    /// Grid dimensions must both be at least one cell
    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: usize, height: usize },

    /// Rows handed to the grid are not all the same length
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result alias used across the core crate
pub type Result<T> = std::result::Result<T, Error>;
