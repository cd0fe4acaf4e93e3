use super::{construct_path, manhattan};
use crate::common::{OpenNode, Path, Position};
use crate::maze::Maze;
use crate::stat::Stats;

use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

// Least-cost route from start to target over the 4-connected grid,
// keeping out of Blocked cells. Returns the route and its total cost, the
// cost-so-far recorded for target when it pops, or None once the frontier
// exhausts. An unreachable target is a normal outcome, not an error.
#[instrument(skip_all, name = "a_star", fields(start = ?start, target = ?target), level = "debug")]
pub(crate) fn a_star_search(
    maze: &Maze,
    start: Position,
    target: Position,
    stats: &mut Stats,
) -> Option<(Path, usize)> {
    let size = maze.size();

    // Cost-so-far and predecessor tables. `None` marks cells not reached
    // yet, so no sentinel value can collide with a real cost or with the
    // coordinate (0, 0).
    let mut cost_so_far: Vec<Vec<Option<usize>>> = vec![vec![None; size]; size];
    let mut predecessor: Vec<Vec<Option<Position>>> = vec![vec![None; size]; size];

    let mut open_list = BTreeSet::new();

    cost_so_far[start.0][start.1] = Some(0);
    open_list.insert(OpenNode {
        position: start,
        f_cost: manhattan(start, target),
        g_cost: 0,
    });

    while let Some(current) = open_list.pop_first() {
        trace!("expand node: {current:?}");

        // Update stats.
        stats.expand_nodes += 1;

        if current.position == target {
            return Some((construct_path(&predecessor, target), current.g_cost));
        }

        // Expand nodes from the current position.
        for &neighbor in &maze.neighbors(current.position) {
            let tentative_g_cost = current.g_cost + maze.step_cost(neighbor);

            let old_g_cost = cost_so_far[neighbor.0][neighbor.1];
            if old_g_cost.is_none_or(|old| tentative_g_cost < old) {
                let h_cost = manhattan(neighbor, target);

                // The neighbor may still sit in the open list under its old
                // cost; drop that entry so each position occurs at most once.
                if let Some(old) = old_g_cost {
                    open_list.remove(&OpenNode {
                        position: neighbor,
                        f_cost: old + h_cost,
                        g_cost: old,
                    });
                }

                cost_so_far[neighbor.0][neighbor.1] = Some(tentative_g_cost);
                predecessor[neighbor.0][neighbor.1] = Some(current.position);
                open_list.insert(OpenNode {
                    position: neighbor,
                    f_cost: tentative_g_cost + h_cost,
                    g_cost: tentative_g_cost,
                });
            }
        }
        trace!("open list {open_list:?}");
    }

    debug!("frontier exhausted, no route from {start:?} to {target:?}");
    None
}
