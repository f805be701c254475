//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types used by the turn logic, the
//! renderer and the command-line runner. Nothing in here knows about the
//! occupancy grid or the active piece; it is pure data with no dependencies.
//!
//! # Coordinates
//!
//! All positions are `(x, y)` pairs where `x` is the column and `y` is the
//! row. Row 0 is the top of the board and `y` grows downward. Piece bodies
//! use the same axes but are relative to the piece's top-left corner.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 9 | Columns on a standard board |
//! | `DEFAULT_BOARD_HEIGHT` | 15 | Rows on a standard board |
//! | `DEFAULT_SPAWN_POINT` | (3, 0) | Anchor of every freshly spawned piece |
//!
//! # Examples
//!
//! ```
//! use block_drop_types::{BoundingBox, Coordinate, TurnAction};
//!
//! let anchor = Coordinate::new(3, 0);
//! let block = Coordinate::new(1, 2);
//! assert_eq!(anchor + block, Coordinate::new(4, 2));
//!
//! let bbox = BoundingBox::around([anchor, anchor + block]).unwrap();
//! assert_eq!((bbox.left, bbox.right, bbox.top, bbox.bottom), (3, 4, 0, 2));
//!
//! assert_eq!(TurnAction::from_str("rotateLeft"), Some(TurnAction::RotateLeft));
//! ```

use std::fmt;
use std::ops::Add;

/// Board width in cells used when no explicit configuration is given
pub const DEFAULT_BOARD_WIDTH: usize = 9;

/// Board height in cells used when no explicit configuration is given
pub const DEFAULT_BOARD_HEIGHT: usize = 15;

/// Anchor every new piece is spawned at on a default board
pub const DEFAULT_SPAWN_POINT: Coordinate = Coordinate::new(3, 0);

/// Number of blocks in every piece body
pub const BLOCKS_PER_PIECE: usize = 4;

/// A column/row pair.
///
/// Board-relative unless stated otherwise; piece bodies store coordinates
/// relative to the piece anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same coordinate shifted by `(dx, dy)`, `None` if either axis leaves
    /// the `i32` range
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Like `+`, but `None` if either axis leaves the `i32` range
    pub fn checked_add(self, rhs: Coordinate) -> Option<Self> {
        self.checked_offset(rhs.x, rhs.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Extent of a set of absolute block positions.
///
/// All four edges are inclusive cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl BoundingBox {
    /// Smallest box containing every coordinate, or `None` for an empty set
    pub fn around(coords: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox {
            top: first.y,
            bottom: first.y,
            left: first.x,
            right: first.x,
        };
        for c in iter {
            bbox.top = bbox.top.min(c.y);
            bbox.bottom = bbox.bottom.max(c.y);
            bbox.left = bbox.left.min(c.x);
            bbox.right = bbox.right.max(c.x);
        }
        Some(bbox)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Check if the box lies entirely inside a `width` x `height` board
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.left >= 0
            && self.top >= 0
            && (self.right as i64) < width as i64
            && (self.bottom as i64) < height as i64
    }
}

/// Requests the surrounding game can make against the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnAction {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    Flip,
    Drop,
}

impl TurnAction {
    /// All actions, in script-code order
    pub const ALL: [TurnAction; 6] = [
        TurnAction::MoveLeft,
        TurnAction::MoveRight,
        TurnAction::RotateLeft,
        TurnAction::RotateRight,
        TurnAction::Flip,
        TurnAction::Drop,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_drop_types::TurnAction;
    ///
    /// assert_eq!(TurnAction::from_str("moveLeft"), Some(TurnAction::MoveLeft));
    /// assert_eq!(TurnAction::from_str("DROP"), Some(TurnAction::Drop));
    /// assert_eq!(TurnAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(TurnAction::MoveLeft),
            "moveright" => Some(TurnAction::MoveRight),
            "rotateleft" => Some(TurnAction::RotateLeft),
            "rotateright" => Some(TurnAction::RotateRight),
            "flip" => Some(TurnAction::Flip),
            "drop" => Some(TurnAction::Drop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnAction::MoveLeft => "moveLeft",
            TurnAction::MoveRight => "moveRight",
            TurnAction::RotateLeft => "rotateLeft",
            TurnAction::RotateRight => "rotateRight",
            TurnAction::Flip => "flip",
            TurnAction::Drop => "drop",
        }
    }

    /// Parse a single-character script code.
    ///
    /// `h`/`l` move left/right, `q`/`e` rotate left/right, `f` flips and `j`
    /// drops by one row.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'h' => Some(TurnAction::MoveLeft),
            'l' => Some(TurnAction::MoveRight),
            'q' => Some(TurnAction::RotateLeft),
            'e' => Some(TurnAction::RotateRight),
            'f' => Some(TurnAction::Flip),
            'j' => Some(TurnAction::Drop),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            TurnAction::MoveLeft => 'h',
            TurnAction::MoveRight => 'l',
            TurnAction::RotateLeft => 'q',
            TurnAction::RotateRight => 'e',
            TurnAction::Flip => 'f',
            TurnAction::Drop => 'j',
        }
    }
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
