//! Transform module - pure geometry on piece bodies
//!
//! Rotation and flipping are built from three primitive reflections followed
//! by re-normalization back to the top-left corner:
//!
//! - `rotate_left  = normalize(invert(reflect_x(body)))`
//! - `rotate_right = normalize(reflect_x(invert(body)))`
//! - `flip_horizontal = normalize(reflect_y(body))`
//!
//! Swapping the order of `invert` and `reflect_x` turns a left rotation into
//! a right one, so the compositions above are exact, not interchangeable.
//! Every function preserves block order.

use crate::types::{BoundingBox, Coordinate, BLOCKS_PER_PIECE};

/// Relative coordinates of a four-block body, in body order
pub type Blocks = [Coordinate; BLOCKS_PER_PIECE];

/// Swap the axes of every block: `(x, y) -> (y, x)`
pub fn invert(coords: Blocks) -> Blocks {
    coords.map(|c| Coordinate::new(c.y, c.x))
}

/// Mirror across the x axis: `(x, y) -> (x, -y)`
pub fn reflect_x(coords: Blocks) -> Blocks {
    coords.map(|c| Coordinate::new(c.x, -c.y))
}

/// Mirror across the y axis: `(x, y) -> (-x, y)`
pub fn reflect_y(coords: Blocks) -> Blocks {
    coords.map(|c| Coordinate::new(-c.x, c.y))
}

/// Translate blocks so the smallest x and the smallest y both become 0
pub fn normalize(coords: Blocks) -> Blocks {
    let min_x = coords.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = coords.iter().map(|c| c.y).min().unwrap_or(0);
    coords.map(|c| Coordinate::new(c.x - min_x, c.y - min_y))
}

/// Quarter turn counter-clockwise
pub fn rotate_left(coords: Blocks) -> Blocks {
    normalize(invert(reflect_x(coords)))
}

/// Quarter turn clockwise
pub fn rotate_right(coords: Blocks) -> Blocks {
    normalize(reflect_x(invert(coords)))
}

/// Mirror left-to-right
pub fn flip_horizontal(coords: Blocks) -> Blocks {
    normalize(reflect_y(coords))
}

/// Absolute extent of `coords` placed at `anchor`.
///
/// `None` when some block would land outside the `i32` coordinate range;
/// such a placement cannot be on any board.
pub fn bounding_box(anchor: Coordinate, coords: &Blocks) -> Option<BoundingBox> {
    let mut cells = [anchor; BLOCKS_PER_PIECE];
    for (cell, &c) in cells.iter_mut().zip(coords.iter()) {
        debug_assert!(
            c.x >= 0 && c.y >= 0,
            "relative block x={}, y={} lies outside the anchor corner",
            c.x,
            c.y
        );
        *cell = anchor.checked_add(c)?;
    }
    BoundingBox::around(cells)
}
