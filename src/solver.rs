use crate::algorithm::a_star_search;
use crate::common::{Path, Position};
use crate::maze::Maze;
use crate::stat::Stats;

use std::time::Instant;
use tracing::{debug, info};

// One search per exit, keep the better outcome. When both exits are
// reachable the route with fewer positions wins; equal lengths go to
// exit_a. The comparison is on path length, not accumulated cost, so a
// longer but cheaper route loses to a shorter, costlier one. One
// reachable exit returns that route unchanged; none returns None. Both
// searches share stats; the chosen cost and solve time land there too.
pub fn select_best(
    maze: &Maze,
    start: Position,
    exit_a: Position,
    exit_b: Position,
    stats: &mut Stats,
) -> Option<Path> {
    let total_solve_start_time = Instant::now();

    let route_a = a_star_search(maze, start, exit_a, stats);
    let route_b = a_star_search(maze, start, exit_b, stats);

    let best = match (route_a, route_b) {
        (Some((path_a, cost_a)), Some((path_b, cost_b))) => {
            debug!(
                "exit {exit_a:?}: {} positions for cost {cost_a}, exit {exit_b:?}: {} positions for cost {cost_b}",
                path_a.len(),
                path_b.len()
            );
            if path_a.len() <= path_b.len() {
                Some((path_a, cost_a))
            } else {
                Some((path_b, cost_b))
            }
        }
        (Some(found), None) | (None, Some(found)) => Some(found),
        (None, None) => None,
    };

    stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;

    match best {
        Some((path, cost)) => {
            stats.costs = cost;
            info!("selected {} position route with cost {cost}", path.len());
            Some(path)
        }
        None => {
            info!("no exit reachable from {start:?}");
            None
        }
    }
}
