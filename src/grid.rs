//! The image: a fixed-size grid of single-character colors.
//!
//! The command surface speaks 1-based `(x, y)` coordinates where `x` is the
//! column and `y` is the row. Internally cells are stored as `cells[y][x]`
//! with 0-based indices. [`Grid::point`] is the one place where the
//! conversion happens, and it rejects anything outside the image.

use std::fmt;

use crate::error::EditError;

/// Background color assigned on creation and clear (white).
pub const SENTINEL: char = 'O';

/// Maximum number of rows an image may have.
pub const MAX_ROWS: usize = 250;

/// A 0-based cell position. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// Convert 1-based command coordinates. Returns `None` if either is zero.
    pub fn from_one_based(x: usize, y: usize) -> Option<Self> {
        Some(Point { x: x.checked_sub(1)?, y: y.checked_sub(1)? })
    }

    /// Back to the 1-based coordinates used on the command surface.
    pub fn to_one_based(self) -> (usize, usize) {
        (self.x + 1, self.y + 1)
    }
}

/// A rectangular image of color cells.
///
/// Every row holds exactly `width` cells; `1 <= width` and
/// `1 <= height <= MAX_ROWS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// 2D array indexed as `cells[y][x]`.
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a `width` x `height` image filled with [`SENTINEL`].
    pub fn new(width: usize, height: usize) -> Result<Self, EditError> {
        if width < 1 || height < 1 || height > MAX_ROWS {
            return Err(EditError::InvalidDimension { width, height });
        }
        Ok(Grid { cells: vec![vec![SENTINEL; width]; height], width, height })
    }

    /// Build a grid from row strings, one character per cell.
    ///
    /// Rows must be non-empty, of equal length, and contain only uppercase
    /// ASCII letters.
    pub fn parse(rows: &[&str]) -> Result<Self, String> {
        if rows.is_empty() || rows.len() > MAX_ROWS {
            return Err(format!("expected 1..={} rows, got {}", MAX_ROWS, rows.len()));
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut expected_width: Option<usize> = None;

        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if let Some(bad) = chars.iter().find(|c| !c.is_ascii_uppercase()) {
                return Err(format!("row {}: unexpected character '{}'", row_idx, bad));
            }
            match expected_width {
                Some(w) if chars.len() != w => {
                    return Err(format!(
                        "row {} has {} cells, expected {} (rows must have consistent width)",
                        row_idx,
                        chars.len(),
                        w
                    ));
                }
                Some(_) => {}
                None if chars.is_empty() => return Err("rows must not be empty".to_string()),
                None => expected_width = Some(chars.len()),
            }
            cells.push(chars);
        }

        let width = expected_width.unwrap_or(0);
        let height = cells.len();
        Ok(Grid { cells, width, height })
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to [`SENTINEL`], keeping the dimensions.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(SENTINEL);
        }
    }

    /// Convert 1-based `(x, y)` to a [`Point`], failing with
    /// [`EditError::OutOfBounds`] outside `[1, width] x [1, height]`.
    pub fn point(&self, x: usize, y: usize) -> Result<Point, EditError> {
        Point::from_one_based(x, y).filter(|p| self.contains(*p)).ok_or(EditError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Color at 1-based `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, EditError> {
        let p = self.point(x, y)?;
        Ok(self.cells[p.y][p.x])
    }

    /// Set the color at 1-based `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, color: char) -> Result<(), EditError> {
        let p = self.point(x, y)?;
        self.cells[p.y][p.x] = color;
        Ok(())
    }

    /// Color at a 0-based point, `None` if outside the grid.
    pub fn cell(&self, p: Point) -> Option<char> {
        self.cells.get(p.y).and_then(|row| row.get(p.x)).copied()
    }

    /// Write a 0-based point. Callers must have bounds-checked `p`.
    pub(crate) fn put(&mut self, p: Point, color: char) {
        self.cells[p.y][p.x] = color;
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    /// Text rendering: each row's characters concatenated, rows separated
    /// by `\n`, no trailing newline.
    pub fn render(&self) -> String {
        self.rows().join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
