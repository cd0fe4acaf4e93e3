use rand::Rng;

use crate::common::Position;

// Start never comes out of generation; it is only the render-time marker
// for the chosen start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Blocked,
    Toll,
    Exit,
    Start,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    // Corner cells are the exits (they coincide when size is 1); every
    // other cell draws Blocked 20%, Toll 20%, Open 60%. Size >= 1 is
    // enforced at the config boundary before this is reached.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut grid = Vec::with_capacity(size);
        for row in 0..size {
            let mut cells = Vec::with_capacity(size);
            for col in 0..size {
                if (row == 0 && col == 0) || (row == size - 1 && col == size - 1) {
                    cells.push(Cell::Exit);
                } else {
                    cells.push(match rng.gen_range(0..10) {
                        0 | 1 => Cell::Blocked,
                        2 | 3 => Cell::Toll,
                        _ => Cell::Open,
                    });
                }
            }
            grid.push(cells);
        }

        Maze { size, grid }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(size > 0, "maze needs at least one cell");
        assert!(
            rows.iter().all(|row| row.len() == size),
            "maze must be square"
        );

        Maze { size, grid: rows }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn exits(&self) -> (Position, Position) {
        ((0, 0), (self.size - 1, self.size - 1))
    }

    pub fn kind(&self, (row, col): Position) -> Cell {
        self.grid[row][col]
    }

    pub fn in_bounds(&self, (row, col): Position) -> bool {
        row < self.size && col < self.size
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.kind(position) == Cell::Blocked
    }

    // Tolls cost 2 to step onto, everything else 1. Blocked cells are
    // never stepped onto, so they are never asked.
    pub fn step_cost(&self, position: Position) -> usize {
        if self.kind(position) == Cell::Toll {
            2
        } else {
            1
        }
    }

    // 4-connected in-bounds positions that are not Blocked. No diagonals.
    pub fn neighbors(&self, (row, col): Position) -> Vec<Position> {
        let directions = [(1, 0), (-1, 0), (0, 1), (0, -1)]; // Down, up, right, left
        let mut neighbors = Vec::new();

        for &(d_row, d_col) in &directions {
            let new_row = row as i64 + d_row;
            let new_col = col as i64 + d_col;
            if new_row >= 0
                && new_col >= 0
                && new_row < self.size as i64
                && new_col < self.size as i64
                && self.grid[new_row as usize][new_col as usize] != Cell::Blocked
            {
                neighbors.push((new_row as usize, new_col as usize));
            }
        }

        neighbors
    }
}
