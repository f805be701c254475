//! Catalog module - the built-in piece bodies
//!
//! Each of the seven tetrominoes is stored in its spawn orientation, already
//! normalized so its top-left bounding corner is `(0, 0)`. Other orientations
//! are reached through [`PieceShape::rotated_left`] and friends rather than
//! separate tables.

use crate::shape::PieceShape;
use crate::types::Coordinate;

const fn body(raw: [(i32, i32); 4]) -> PieceShape {
    PieceShape::from_static([
        Coordinate::new(raw[0].0, raw[0].1),
        Coordinate::new(raw[1].0, raw[1].1),
        Coordinate::new(raw[2].0, raw[2].1),
        Coordinate::new(raw[3].0, raw[3].1),
    ])
}

/// 2x2 block
pub const SQUARE: PieceShape = body([(0, 0), (1, 0), (0, 1), (1, 1)]);

/// Upright L: a three-tall column with a foot to the right
pub const L_SHAPE: PieceShape = body([(0, 0), (0, 1), (0, 2), (1, 2)]);

const I_BODY: PieceShape = body([(0, 0), (1, 0), (2, 0), (3, 0)]);
const T_BODY: PieceShape = body([(1, 0), (0, 1), (1, 1), (2, 1)]);
const S_BODY: PieceShape = body([(1, 0), (2, 0), (0, 1), (1, 1)]);
const Z_BODY: PieceShape = body([(0, 0), (1, 0), (1, 1), (2, 1)]);
const J_BODY: PieceShape = body([(0, 0), (0, 1), (1, 1), (2, 1)]);
const L_BODY: PieceShape = body([(2, 0), (0, 1), (1, 1), (2, 1)]);

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Spawn-orientation body for this kind
    pub fn shape(&self) -> PieceShape {
        match self {
            ShapeKind::I => I_BODY,
            ShapeKind::O => SQUARE,
            ShapeKind::T => T_BODY,
            ShapeKind::S => S_BODY,
            ShapeKind::Z => Z_BODY,
            ShapeKind::J => J_BODY,
            ShapeKind::L => L_BODY,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
        }
    }
}
