//! Shape module - validated four-block piece bodies
//!
//! A [`PieceShape`] can only be built through a constructor that checks every
//! block is non-negative and distinct, so code holding a shape never has to
//! re-check it. The transform helpers return shapes that are already
//! normalized to the top-left corner.

use arrayvec::ArrayVec;

use crate::error::{Error, Result};
use crate::transform::{self, Blocks};
use crate::types::{BoundingBox, Coordinate, BLOCKS_PER_PIECE};

/// Four relative block offsets measured from the piece's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    blocks: Blocks,
}

impl PieceShape {
    /// Validate a body given as four relative blocks
    pub fn new(blocks: Blocks) -> Result<Self> {
        for (i, block) in blocks.iter().enumerate() {
            if block.x < 0 || block.y < 0 {
                return Err(Error::MalformedPiece {
                    x: block.x,
                    y: block.y,
                });
            }
            if blocks[..i].contains(block) {
                return Err(Error::DuplicateBlock {
                    x: block.x,
                    y: block.y,
                });
            }
        }
        Ok(Self { blocks })
    }

    /// Const constructor for built-in tables; `catalog` tests check every
    /// table entry against [`PieceShape::new`].
    pub(crate) const fn from_static(blocks: Blocks) -> Self {
        Self { blocks }
    }

    /// Build from any sequence of blocks, rejecting counts other than four
    pub fn from_blocks<I>(blocks: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        let mut collected: ArrayVec<Coordinate, BLOCKS_PER_PIECE> = ArrayVec::new();
        let mut count = 0usize;
        for block in blocks {
            count += 1;
            // Keep counting past capacity so the error reports the real size.
            let _ = collected.try_push(block.into());
        }
        match collected.into_inner() {
            Ok(array) if count == BLOCKS_PER_PIECE => Self::new(array),
            _ => Err(Error::BlockCount { count }),
        }
    }

    /// Parse a body drawn as text.
    ///
    /// Every `#` is a block; any other character is empty space. Rows are
    /// separated by newlines and leading/trailing blank lines are ignored.
    ///
    /// ```
    /// use block_drop_core::PieceShape;
    ///
    /// let l = PieceShape::from_ascii("#.\n#.\n##").unwrap();
    /// assert_eq!(l.as_tuples(), [(0, 0), (0, 1), (0, 2), (1, 2)]);
    /// ```
    pub fn from_ascii(art: &str) -> Result<Self> {
        let rows = art
            .lines()
            .map(str::trim_end)
            .skip_while(|line| line.trim().is_empty())
            .enumerate();
        let blocks = rows.flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '#')
                .map(move |(x, _)| Coordinate::new(x as i32, y as i32))
        });
        Self::new(transform::normalize(Self::from_blocks(blocks)?.blocks))
    }

    /// Relative blocks in body order
    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    /// Relative blocks in ascending `(x, y)` order, for order-insensitive comparison
    pub fn sorted_blocks(&self) -> Blocks {
        let mut sorted = self.blocks;
        sorted.sort();
        sorted
    }

    /// Relative blocks as plain `(x, y)` tuples
    pub fn as_tuples(&self) -> [(i32, i32); BLOCKS_PER_PIECE] {
        self.blocks.map(Into::into)
    }

    /// Absolute cells covered when the top-left corner sits at `anchor`
    pub fn cells_at(&self, anchor: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.blocks.iter().map(move |&b| anchor + b)
    }

    /// Absolute extent when the top-left corner sits at `anchor`,
    /// `None` if a block would leave the `i32` range
    pub fn bounding_box(&self, anchor: Coordinate) -> Option<BoundingBox> {
        transform::bounding_box(anchor, &self.blocks)
    }

    pub fn rotated_left(&self) -> Self {
        Self::from_normalized(transform::rotate_left(self.blocks))
    }

    pub fn rotated_right(&self) -> Self {
        Self::from_normalized(transform::rotate_right(self.blocks))
    }

    pub fn flipped_horizontally(&self) -> Self {
        Self::from_normalized(transform::flip_horizontal(self.blocks))
    }

    /// Blocks produced by `normalize` from a valid body are non-negative and
    /// still distinct, since every transform is a bijection on the plane.
    fn from_normalized(blocks: Blocks) -> Self {
        debug_assert!(blocks.iter().all(|b| b.x >= 0 && b.y >= 0));
        Self { blocks }
    }
}

impl TryFrom<[(i32, i32); BLOCKS_PER_PIECE]> for PieceShape {
    type Error = Error;

    fn try_from(raw: [(i32, i32); BLOCKS_PER_PIECE]) -> Result<Self> {
        Self::new(raw.map(Coordinate::from))
    }
}
