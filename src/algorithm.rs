mod astar;

pub(crate) use astar::a_star_search;

use crate::common::{Path, Position};

// Admissible and consistent for 4-connected moves with step cost >= 1.
pub(crate) fn manhattan(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

// Walk the predecessor table backward from target, then reverse into
// start-to-target order.
fn construct_path(predecessor: &[Vec<Option<Position>>], target: Position) -> Path {
    let mut path = vec![target];
    let mut current = target;
    while let Some(previous) = predecessor[current.0][current.1] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
