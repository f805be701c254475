//! Grid module - the board's occupancy matrix
//!
//! The grid is a `width` x `height` matrix of booleans stored in a flat
//! row-major buffer (`y * width + x`). `true` means a block occupies the cell.
//! Row 0 is the top. Dimensions are fixed for the lifetime of the grid.
//!
//! Renderers only ever read the grid; writes happen through
//! [`BoardTurnManager`](crate::turn::BoardTurnManager), which paints and
//! erases the active piece and removes completed rows.

use crate::error::{Error, Result};
use crate::types::Coordinate;

/// Boolean occupancy matrix, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Create from rows, top row first
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[bool]>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0usize;
        for (row_index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(Error::RaggedRows {
                    row: row_index,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse rows drawn as text, `#` for occupied and anything else for empty
    pub fn from_ascii(art: &str) -> Result<Self> {
        let rows: Vec<Vec<bool>> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|ch| ch == '#').collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, at: Coordinate) -> bool {
        self.get(at.x, at.y) == Some(true)
    }

    /// Check if position is inside the grid
    pub fn contains(&self, at: Coordinate) -> bool {
        self.index(at.x, at.y).is_some()
    }

    /// Mark every listed cell occupied (`true`) or empty (`false`).
    ///
    /// Cells outside the grid are skipped and reported through the return
    /// value, which is the number of cells actually written.
    pub fn paint(&mut self, cells: impl IntoIterator<Item = Coordinate>, occupied: bool) -> usize {
        cells
            .into_iter()
            .filter(|c| self.set(c.x, c.y, occupied))
            .count()
    }

    /// Borrow one row, top row is 0
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c))
    }

    /// Indices of every full row, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Rows above `y` shift down by one; rows below keep their index.
    /// Returns false if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }

        let width = self.width;

        // Shift all rows above down by one
        // Note: copy_within handles overlapping ranges safely
        self.cells.copy_within(0..y * width, width);

        // Clear the top row
        self.cells[..width].fill(false);

        true
    }

    /// Remove every full row, compensating each with an empty top row.
    ///
    /// Rows are identified by their index at scan time and removed in
    /// ascending order. Removing a row never changes the index of rows below
    /// it, so each recorded index stays correct. Returns the removed indices.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let full = self.full_rows();
        for &y in &full {
            self.remove_row(y);
        }
        full
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
