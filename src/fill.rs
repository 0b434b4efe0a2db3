//! Region fill over 4-connected cells.
//!
//! The region of a seed cell is the seed plus every cell reachable from it
//! through up/down/left/right steps over cells of the seed's color.
//! Traversal uses an explicit work list, so region size is bounded by grid
//! area rather than call-stack depth.
//!
//! Traversal order is FIFO today but is not part of the contract; only the
//! resulting set of cells is.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::EditError;
use crate::grid::{Grid, Point};

/// In-bounds 4-connected neighbors of `p`.
fn neighbors(grid: &Grid, p: Point) -> impl Iterator<Item = Point> + '_ {
    let up = p.y.checked_sub(1).map(|y| Point::new(p.x, y));
    let down = Some(Point::new(p.x, p.y + 1));
    let left = p.x.checked_sub(1).map(|x| Point::new(x, p.y));
    let right = Some(Point::new(p.x + 1, p.y));
    [up, down, left, right].into_iter().flatten().filter(move |n| grid.contains(*n))
}

/// Collect the region containing `seed`.
///
/// Each cell appears once. Returns an empty list if `seed` lies outside the
/// grid.
pub fn region(grid: &Grid, seed: Point) -> Vec<Point> {
    let Some(target) = grid.cell(seed) else {
        return Vec::new();
    };

    let index = |p: Point| p.y * grid.width() + p.x;
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut frontier = VecDeque::new();
    let mut members = Vec::new();
    frontier.push_back(seed);

    while let Some(current) = frontier.pop_front() {
        // Duplicate enqueues are dropped here
        if visited[index(current)] {
            continue;
        }
        visited[index(current)] = true;
        members.push(current);

        for n in neighbors(grid, current) {
            if !visited[index(n)] && grid.cell(n) == Some(target) {
                frontier.push_back(n);
            }
        }
    }

    members
}

/// Repaint the region containing `seed` with `color`.
///
/// Filling with the region's own color still walks the whole region and
/// leaves the grid unchanged. Returns the number of cells repainted.
pub fn fill_region(grid: &mut Grid, seed: Point, color: char) -> Result<usize, EditError> {
    if !grid.contains(seed) {
        let (x, y) = seed.to_one_based();
        return Err(EditError::OutOfBounds { x, y, width: grid.width(), height: grid.height() });
    }

    let members = region(grid, seed);
    for p in &members {
        grid.put(*p, color);
    }

    debug!(x = seed.x + 1, y = seed.y + 1, color = %color, cells = members.len(), "filled region");
    Ok(members.len())
}
