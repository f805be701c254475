//! Provider module - where new piece bodies come from
//!
//! The turn logic only needs "give me the next shape". [`ShapeProvider`] is
//! that seam; randomness and ordering policy live entirely in the
//! implementations here (or in the caller's own closure).
//!
//! [`BagProvider`] implements the "7-bag" randomizer: each bag holds one of
//! every tetromino, shuffled, and is drawn until empty before refilling.
//! [`SimpleRng`] is a small LCG so sequences are reproducible from a seed.

use crate::catalog::ShapeKind;
use crate::shape::PieceShape;

/// Source of fresh piece bodies, called once per spawn
pub trait ShapeProvider {
    fn next_shape(&mut self) -> PieceShape;
}

impl<F> ShapeProvider for F
where
    F: FnMut() -> PieceShape,
{
    fn next_shape(&mut self) -> PieceShape {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag shape generator
#[derive(Debug, Clone)]
pub struct BagProvider {
    bag: [ShapeKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl BagProvider {
    /// Create a new provider with the given seed
    pub fn new(seed: u32) -> Self {
        let mut provider = Self {
            bag: ShapeKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        provider.refill_bag();
        provider
    }

    fn refill_bag(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Peek at the next kind without drawing it
    pub fn peek(&self) -> ShapeKind {
        if self.bag_index < self.bag.len() {
            return self.bag[self.bag_index];
        }
        // Preview the next bag without touching the main RNG.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = ShapeKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }

    /// Draw the next kind, refilling the bag when it runs out
    pub fn draw(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Kinds still left in the current bag
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for BagProvider {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeProvider for BagProvider {
    fn next_shape(&mut self) -> PieceShape {
        self.draw().shape()
    }
}

/// Hands out a fixed list of shapes in order, starting over at the end
#[derive(Debug, Clone)]
pub struct CycleProvider {
    shapes: Vec<PieceShape>,
    next: usize,
}

impl CycleProvider {
    /// Returns `None` for an empty list, since a provider must always have a next shape
    pub fn new(shapes: impl IntoIterator<Item = PieceShape>) -> Option<Self> {
        let shapes: Vec<PieceShape> = shapes.into_iter().collect();
        if shapes.is_empty() {
            return None;
        }
        Some(Self { shapes, next: 0 })
    }

    /// Always hand out the same shape
    pub fn repeat(shape: PieceShape) -> Self {
        Self {
            shapes: vec![shape],
            next: 0,
        }
    }
}

impl ShapeProvider for CycleProvider {
    fn next_shape(&mut self) -> PieceShape {
        let shape = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}
