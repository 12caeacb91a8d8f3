//! Cost-aware A* over the orthogonal grid.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::state::{Grid, Position};

/// A route between two cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Cells from the start to the goal, both included.
    pub steps: Vec<Position>,
    /// Sum of movement costs of every step after the start.
    pub cost: u32,
}

impl Path {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Frontier entry: priority, insertion order, cost so far, cell.
type Frontier = BinaryHeap<Reverse<(u64, u64, u32, Position)>>;

/// Finds the cheapest route from `from` to `to`.
///
/// Edge cost is the destination cell's movement cost; impassable cells are
/// never expanded. Occupants are ignored here and re-checked at move time.
/// Equal priorities are popped in insertion order. Returns `None` when `to`
/// cannot be reached.
pub fn find_path(grid: &Grid, from: Position, to: Position) -> Option<Path> {
    if from == to {
        return Some(Path {
            steps: vec![from],
            cost: 0,
        });
    }
    if !grid.is_passable(to) {
        return None;
    }

    let mut frontier = Frontier::new();
    let mut sequence = 0u64;
    let mut cost_so_far: HashMap<Position, u32> = HashMap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();

    cost_so_far.insert(from, 0);
    frontier.push(Reverse((from.manhattan_distance(to), sequence, 0, from)));

    while let Some(Reverse((_, _, cost, current))) = frontier.pop() {
        if current == to {
            return Some(Path {
                steps: reconstruct(&came_from, from, to),
                cost,
            });
        }
        if cost_so_far.get(&current).is_some_and(|&best| cost > best) {
            continue;
        }

        for next in grid.passable_neighbors(current) {
            let next_cost = cost + grid.tile(next).movement_cost();
            let improved = cost_so_far
                .get(&next)
                .is_none_or(|&known| next_cost < known);
            if improved {
                cost_so_far.insert(next, next_cost);
                came_from.insert(next, current);
                sequence += 1;
                let priority = u64::from(next_cost) + next.manhattan_distance(to);
                frontier.push(Reverse((priority, sequence, next_cost, next)));
            }
        }
    }

    None
}

fn reconstruct(came_from: &HashMap<Position, Position>, from: Position, to: Position) -> Vec<Position> {
    let mut steps = vec![to];
    let mut current = to;
    while current != from {
        match came_from.get(&current) {
            Some(&previous) => {
                steps.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    steps.reverse();
    steps
}
