//! GridView: maps an occupancy grid and its active piece into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActivePiece, BoardTurnManager, OccupancyGrid, ShapeProvider};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const PANEL_GAP: u16 = 2;
const PANEL_WIDTH: u16 = 8;
const PANEL_HEIGHT: u16 = 5;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorX {
    Center,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Characters used for each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub settled: char,
    pub active: char,
    pub empty: char,
    /// Top-left, top-right, bottom-left, bottom-right
    pub corners: [char; 4],
    pub horizontal: char,
    pub vertical: char,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        settled: '█',
        active: '█',
        empty: '·',
        corners: ['┌', '┐', '└', '┘'],
        horizontal: '─',
        vertical: '│',
    };

    pub const ASCII: Glyphs = Glyphs {
        settled: '#',
        active: '@',
        empty: '.',
        corners: ['+', '+', '+', '+'],
        horizontal: '-',
        vertical: '|',
    };
}

/// Everything one frame shows.
#[derive(Debug, Clone, Copy)]
pub struct BoardFrame<'a> {
    pub grid: &'a OccupancyGrid,
    pub active: Option<ActivePiece>,
    pub lines_cleared: u32,
    pub pieces_spawned: u32,
    pub game_over: bool,
}

impl<'a> BoardFrame<'a> {
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self {
            grid,
            active: None,
            lines_cleared: 0,
            pieces_spawned: 0,
            game_over: false,
        }
    }

    /// Capture the manager's grid, active piece and counters.
    pub fn from_manager<P: ShapeProvider>(board: &'a BoardTurnManager<P>) -> Self {
        Self {
            grid: board.grid(),
            active: board.active_piece().ok(),
            lines_cleared: board.lines_cleared(),
            pieces_spawned: board.pieces_spawned(),
            game_over: false,
        }
    }

    pub fn with_game_over(mut self, game_over: bool) -> Self {
        self.game_over = game_over;
        self
    }
}

/// A lightweight terminal renderer for the board.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_x: AnchorX,
    anchor_y: AnchorY,
    glyphs: Glyphs,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_x: AnchorX::Center,
            anchor_y: AnchorY::Center,
            glyphs: Glyphs::UNICODE,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            ..Self::default()
        }
    }

    /// One character per cell, ASCII only, drawn from the top-left corner.
    pub fn plain() -> Self {
        Self {
            cell_w: 1,
            cell_h: 1,
            anchor_x: AnchorX::Left,
            anchor_y: AnchorY::Top,
            glyphs: Glyphs::ASCII,
        }
    }

    pub fn with_anchor_x(mut self, anchor_x: AnchorX) -> Self {
        self.anchor_x = anchor_x;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, grid: &OccupancyGrid) -> (u16, u16) {
        let w = to_u16(grid.width()).saturating_mul(self.cell_w);
        let h = to_u16(grid.height()).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Smallest viewport that fits the board and the side panel.
    pub fn fit_viewport(&self, grid: &OccupancyGrid) -> Viewport {
        let (frame_w, frame_h) = self.frame_size(grid);
        Viewport::new(
            frame_w.saturating_add(PANEL_GAP + PANEL_WIDTH),
            frame_h.max(PANEL_HEIGHT),
        )
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, frame: &BoardFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid = frame.grid;
        let (frame_w, frame_h) = self.frame_size(grid);

        let start_x = match self.anchor_x {
            AnchorX::Center => viewport.width.saturating_sub(frame_w) / 2,
            AnchorX::Left => 0,
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40)).dim();
        let settled = CellStyle::new(Rgb::new(150, 160, 180), Rgb::new(30, 30, 40));
        for (y, row) in grid.rows().enumerate() {
            for (x, &occupied) in row.iter().enumerate() {
                let (ch, style) = if occupied {
                    (self.glyphs.settled, settled)
                } else {
                    (self.glyphs.empty, empty)
                };
                self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
            }
        }

        // Active piece on top of its own painted footprint.
        if let Some(active) = frame.active {
            let style = CellStyle::new(Rgb::new(255, 165, 0), Rgb::new(30, 30, 40)).bold();
            for cell in active.cells().filter(|&c| grid.contains(c)) {
                self.fill_cell_rect(
                    fb,
                    start_x,
                    start_y,
                    cell.x as usize,
                    cell.y as usize,
                    self.glyphs.active,
                    style,
                );
            }
        }

        self.draw_side_panel(fb, frame, viewport, start_x, start_y, frame_w);

        if frame.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &BoardFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    /// Render into a viewport that exactly fits and return the text.
    pub fn to_plain_text(&self, frame: &BoardFrame<'_>) -> String {
        self.render(frame, self.fit_viewport(frame.grid))
            .to_plain_text()
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let [tl, tr, bl, br] = self.glyphs.corners;
        fb.put_char(x, y, tl, style);
        fb.put_char(x + w - 1, y, tr, style);
        fb.put_char(x, y + h - 1, bl, style);
        fb.put_char(x + w - 1, y + h - 1, br, style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, self.glyphs.horizontal, style);
            fb.put_char(x + dx, y + h - 1, self.glyphs.horizontal, style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, self.glyphs.vertical, style);
            fb.put_char(x + w - 1, y + dy, self.glyphs.vertical, style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: usize,
        cell_y: usize,
        ch: char,
        style: CellStyle,
    ) {
        // Cells whose origin is past the u16 range are off any terminal.
        let origin = |start: u16, cell: usize, size: u16| {
            u16::try_from(cell)
                .ok()?
                .checked_mul(size)?
                .checked_add(start)?
                .checked_add(1)
        };
        let (Some(px), Some(py)) = (
            origin(start_x, cell_x, self.cell_w),
            origin(start_y, cell_y, self.cell_h),
        ) else {
            return;
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &BoardFrame<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(PANEL_GAP);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, frame.lines_cleared, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, frame.pieces_spawned, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_includes_border() {
        let grid = OccupancyGrid::new(10, 20).unwrap();
        assert_eq!(GridView::default().frame_size(&grid), (22, 22));
        assert_eq!(GridView::plain().frame_size(&grid), (12, 22));
    }

    #[test]
    fn plain_view_of_empty_grid() {
        let grid = OccupancyGrid::new(3, 2).unwrap();
        let text = GridView::plain().to_plain_text(&BoardFrame::new(&grid));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+---+  LINES");
        assert_eq!(lines[1], "|...|  0");
        assert_eq!(lines[2], "|...|");
        assert_eq!(lines[3], "+---+  PIECES");
        assert_eq!(lines[4], "       0");
    }

    #[test]
    fn small_viewport_skips_panel() {
        let grid = OccupancyGrid::new(3, 2).unwrap();
        let view = GridView::plain();
        let fb = view.render(&BoardFrame::new(&grid), Viewport::new(5, 4));
        assert_eq!(fb.to_plain_text(), "+---+\n|...|\n|...|\n+---+");
    }

    #[test]
    fn cells_past_u16_range_are_clipped() {
        let mut grid = OccupancyGrid::new(40_000, 2).unwrap();
        grid.set(0, 1, true);
        grid.set(39_999, 1, true);

        let view = GridView::default();
        let viewport = view.fit_viewport(&grid);
        assert_eq!(viewport, Viewport::new(u16::MAX, 5));

        let fb = view.render(&BoardFrame::new(&grid), viewport);
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 2).unwrap().ch, view.glyphs.settled);
        assert_eq!(fb.get(3, 2).unwrap().ch, view.glyphs.empty);
    }
}
