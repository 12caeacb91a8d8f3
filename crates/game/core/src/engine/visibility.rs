//! Field of view by line-walks from the observer.

use crate::config::SightShape;
use crate::state::{Grid, Position};

use super::Line;

/// Recomputes the visible set from `observer`.
///
/// Every cell is first cleared of `visible`, then a line is walked to each
/// cell of the sight area. Each walked cell becomes visible and seen; a
/// light-blocking cell is marked too but ends its walk. The observer's own
/// cell never blocks.
pub fn compute_visibility(grid: &mut Grid, observer: Position, radius: u32, shape: SightShape) {
    grid.clear_visible();

    let r = radius as i32;
    for dy in -r..=r {
        for dx in -r..=r {
            if shape.contains(dx, dy, radius) {
                let target = Position::new(observer.x + dx, observer.y + dy);
                cast(grid, observer, target);
            }
        }
    }
}

fn cast(grid: &mut Grid, from: Position, to: Position) {
    for (step, cell) in Line::new(from, to).enumerate() {
        if let Some(tile) = grid.tile_mut(cell) {
            tile.reveal();
        }
        if step > 0 && grid.blocks_light(cell) {
            break;
        }
    }
}

/// True if the line-walk from `from` reaches `to` before hitting a blocking cell.
///
/// A blocking target is still reached: a wall can be seen, just not seen past.
pub fn has_line_of_sight(grid: &Grid, from: Position, to: Position) -> bool {
    for (step, cell) in Line::new(from, to).enumerate() {
        if cell == to {
            return true;
        }
        if step > 0 && grid.blocks_light(cell) {
            return false;
        }
    }
    false
}

/// Line of sight limited to an observer's sight area.
pub fn can_see(grid: &Grid, from: Position, to: Position, radius: u32, shape: SightShape) -> bool {
    shape.contains(to.x - from.x, to.y - from.y, radius) && has_line_of_sight(grid, from, to)
}
