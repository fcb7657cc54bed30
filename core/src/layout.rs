use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// Pixel geometry of the card table: where each cell's card sits on the
/// canvas and which cell, if any, a pointer position lands on. The gaps
/// between cards hit nothing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub canvas_size: (f32, f32),
    pub card_size: (f32, f32),
    pub spacing: (f32, f32),
    pub padding_frac: (f32, f32),
    grid: Coord2,
}

impl TableLayout {
    /// Reference geometry of the table art.
    pub fn new(grid: Coord2) -> Self {
        Self {
            canvas_size: (1200.0, 600.0),
            card_size: (90.0, 135.0),
            spacing: (120.0, 20.0),
            padding_frac: (0.15, 0.12),
            grid,
        }
    }

    pub const fn grid(&self) -> Coord2 {
        self.grid
    }

    /// Column-to-column and row-to-row distance.
    fn pitch(&self) -> (f32, f32) {
        (
            self.card_size.0 + self.spacing.0,
            self.card_size.1 + self.spacing.1,
        )
    }

    /// Top-left corner of the grid, centered inside the padded canvas area.
    pub fn origin(&self) -> (f32, f32) {
        let (cols, rows) = self.grid;
        let grid_w = self.card_size.0 * cols as f32 + self.spacing.0 * (cols as f32 - 1.0);
        let grid_h = self.card_size.1 * rows as f32 + self.spacing.1 * (rows as f32 - 1.0);
        let pad_x = self.canvas_size.0 * self.padding_frac.0;
        let pad_y = self.canvas_size.1 * self.padding_frac.1;
        (
            pad_x + (self.canvas_size.0 - pad_x * 2.0 - grid_w) / 2.0,
            pad_y + (self.canvas_size.1 - pad_y * 2.0 - grid_h) / 2.0,
        )
    }

    /// Top-left corner of a cell's card.
    pub fn cell_origin(&self, (x, y): Coord2) -> (f32, f32) {
        let (origin_x, origin_y) = self.origin();
        let (pitch_x, pitch_y) = self.pitch();
        (
            origin_x + x as f32 * pitch_x,
            origin_y + y as f32 * pitch_y,
        )
    }

    /// Center of a cell's card; where the adapter aims effects.
    pub fn cell_center(&self, cell: Coord2) -> (f32, f32) {
        let (card_x, card_y) = self.cell_origin(cell);
        (
            card_x + self.card_size.0 / 2.0,
            card_y + self.card_size.1 / 2.0,
        )
    }

    /// The cell whose card rect contains the point, if any.
    pub fn cell_at_point(&self, px: f32, py: f32) -> Option<Coord2> {
        let (origin_x, origin_y) = self.origin();
        let (pitch_x, pitch_y) = self.pitch();
        let (cols, rows) = self.grid;

        let dx = px - origin_x;
        let dy = py - origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let x = (dx / pitch_x).floor();
        let y = (dy / pitch_y).floor();
        if x >= cols as f32 || y >= rows as f32 {
            return None;
        }

        // inside the card itself, not the gap trailing it
        if dx - x * pitch_x > self.card_size.0 || dy - y * pitch_y > self.card_size.1 {
            return None;
        }

        Some((x as Coord, y as Coord))
    }
}
