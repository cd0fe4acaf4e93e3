use rand::prelude::*;
use tracing::info;

use crate::common::Position;
use crate::maze::Maze;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub maze: Maze,
    pub start: Position,
}

impl Scenario {
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let maze = Maze::generate(size, rng);
        let start = pick_start(&maze, rng);
        info!("Generate scenario: size {size}, start {start:?}");
        Scenario { maze, start }
    }
}

// Four cells around the maze center; prefer ones that are not blocked.
fn pick_start<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> Position {
    let half = maze.size() / 2;
    let candidates: Vec<Position> = [
        (half, half),
        (half + 1, half),
        (half, half + 1),
        (half + 1, half + 1),
    ]
    .into_iter()
    .filter(|&position| maze.in_bounds(position))
    .collect();

    let open_candidates: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&position| !maze.is_blocked(position))
        .collect();

    // (half, half) is always in bounds, so `candidates` is never empty.
    *open_candidates
        .choose(rng)
        .or_else(|| candidates.choose(rng))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell::{Blocked, Exit, Open};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_start_is_near_center() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let scenario = Scenario::generate(8, &mut rng);
            let (row, col) = scenario.start;
            assert!((4..=5).contains(&row));
            assert!((4..=5).contains(&col));
        }
    }

    #[test]
    fn test_start_in_bounds_for_tiny_mazes() {
        let mut rng = StdRng::seed_from_u64(1);
        let scenario = Scenario::generate(1, &mut rng);
        assert_eq!(scenario.start, (0, 0));

        let scenario = Scenario::generate(2, &mut rng);
        assert_eq!(scenario.start, (1, 1));
    }

    #[test]
    fn test_start_avoids_blocked_cells() {
        let maze = Maze::from_rows(vec![
            vec![Exit, Open, Open, Open, Open],
            vec![Open, Open, Open, Open, Open],
            vec![Open, Open, Blocked, Blocked, Open],
            vec![Open, Open, Blocked, Open, Open],
            vec![Open, Open, Open, Open, Exit],
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(pick_start(&maze, &mut rng), (3, 3));
        }
    }

    #[test]
    fn test_start_falls_back_when_all_candidates_blocked() {
        let maze = Maze::from_rows(vec![
            vec![Exit, Open, Open, Open, Open],
            vec![Open, Open, Open, Open, Open],
            vec![Open, Open, Blocked, Blocked, Open],
            vec![Open, Open, Blocked, Blocked, Open],
            vec![Open, Open, Open, Open, Exit],
        ]);
        let mut rng = StdRng::seed_from_u64(4);
        let start = pick_start(&maze, &mut rng);
        assert!(maze.is_blocked(start));
        let (row, col) = start;
        assert!((2..=3).contains(&row));
        assert!((2..=3).contains(&col));
    }
}
