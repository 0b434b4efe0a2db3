//! Drawing primitives and the typed draw operations built from commands.
//!
//! Coordinates here are 1-based, as typed on the command surface. Every
//! primitive resolves its endpoints through [`Grid::point`] before writing
//! anything, so an out-of-range operation fails without touching the grid.

use crate::command::Operation;
use crate::error::EditError;
use crate::fill::fill_region;
use crate::grid::{Grid, Point};
use crate::validate::{parse_color, parse_column, parse_row, valid_arguments};

/// A validated drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Set a single cell: `L X Y C`
    Pixel { x: usize, y: usize, color: char },
    /// Vertical segment in column `x`, rows `y1..=y2`: `V X Y1 Y2 C`
    Vertical { x: usize, y1: usize, y2: usize, color: char },
    /// Horizontal segment in row `y`, columns `x1..=x2`: `H X1 X2 Y C`
    Horizontal { x1: usize, x2: usize, y: usize, color: char },
    /// Region fill from a seed: `F X Y C`
    Fill { x: usize, y: usize, color: char },
}

impl DrawOp {
    /// Build a draw operation from raw command arguments.
    ///
    /// Fails with [`EditError::InvalidArguments`] if the arguments do not
    /// pass [`valid_arguments`] or `op` is not a drawing operation.
    pub fn from_args(op: Operation, args: &[String]) -> Result<Self, EditError> {
        let invalid = EditError::InvalidArguments { op };
        if !valid_arguments(op, args) {
            return Err(invalid);
        }

        let column = |i: usize| parse_column(&args[i]).ok_or(invalid.clone());
        let row = |i: usize| parse_row(&args[i]).ok_or(invalid.clone());
        let color = |i: usize| parse_color(&args[i]).ok_or(invalid.clone());

        match op {
            Operation::SetPixel => Ok(DrawOp::Pixel { x: column(0)?, y: row(1)?, color: color(2)? }),
            Operation::DrawVerticalLine => Ok(DrawOp::Vertical {
                x: column(0)?,
                y1: row(1)?,
                y2: row(2)?,
                color: color(3)?,
            }),
            Operation::DrawHorizontalLine => Ok(DrawOp::Horizontal {
                x1: column(0)?,
                x2: column(1)?,
                y: row(2)?,
                color: color(3)?,
            }),
            Operation::FillRegion => Ok(DrawOp::Fill { x: column(0)?, y: row(1)?, color: color(2)? }),
            _ => Err(EditError::InvalidArguments { op }),
        }
    }

    /// Apply the operation. Returns the number of cells written.
    pub fn apply(&self, grid: &mut Grid) -> Result<usize, EditError> {
        match *self {
            DrawOp::Pixel { x, y, color } => set_pixel(grid, x, y, color).map(|()| 1),
            DrawOp::Vertical { x, y1, y2, color } => draw_vertical_line(grid, x, y1, y2, color),
            DrawOp::Horizontal { x1, x2, y, color } => draw_horizontal_line(grid, x1, x2, y, color),
            DrawOp::Fill { x, y, color } => {
                let seed = grid.point(x, y)?;
                fill_region(grid, seed, color)
            }
        }
    }
}

/// Color the single cell `(x, y)`.
pub fn set_pixel(grid: &mut Grid, x: usize, y: usize, color: char) -> Result<(), EditError> {
    grid.set(x, y, color)
}

/// Color column `x` from row `y1` to `y2` inclusive. Expects `y1 <= y2`;
/// an inverted range writes nothing.
pub fn draw_vertical_line(
    grid: &mut Grid,
    x: usize,
    y1: usize,
    y2: usize,
    color: char,
) -> Result<usize, EditError> {
    let top = grid.point(x, y1)?;
    let bottom = grid.point(x, y2)?;
    let mut written = 0;
    for y in top.y..=bottom.y {
        grid.put(Point::new(top.x, y), color);
        written += 1;
    }
    Ok(written)
}

/// Color row `y` from column `x1` to `x2` inclusive. Expects `x1 <= x2`;
/// an inverted range writes nothing.
pub fn draw_horizontal_line(
    grid: &mut Grid,
    x1: usize,
    x2: usize,
    y: usize,
    color: char,
) -> Result<usize, EditError> {
    let left = grid.point(x1, y)?;
    let right = grid.point(x2, y)?;
    let mut written = 0;
    for x in left.x..=right.x {
        grid.put(Point::new(x, left.y), color);
        written += 1;
    }
    Ok(written)
}
