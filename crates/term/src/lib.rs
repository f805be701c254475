//! Terminal board renderer module.
//!
//! A small rendering layer for printing the board. It renders into a simple
//! framebuffer that is then encoded to ANSI bytes or plain text.
//!
//! Goals:
//! - Keep `core` free of any output concerns
//! - Read the board only through the occupancy grid and the active piece
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use block_drop_core as core;
pub use block_drop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{AnchorX, AnchorY, BoardFrame, Glyphs, GridView, Viewport};
pub use renderer::encode_inline_into;
