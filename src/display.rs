use crossterm::style::{StyledContent, Stylize};

use crate::common::{Path, Position};
use crate::maze::{Cell, Maze};

// One glyph per cell plus a trailing space, one line per row. Cells on
// the path draw green whatever their kind; start overlays an R without
// touching the maze.
pub fn render(maze: &Maze, path: Option<&Path>, start: Option<Position>) -> String {
    let mut out = String::new();
    for row in 0..maze.size() {
        for col in 0..maze.size() {
            let position = (row, col);
            let kind = if start == Some(position) {
                Cell::Start
            } else {
                maze.kind(position)
            };
            let on_path = path.is_some_and(|path| path.contains(&position));
            out.push_str(&format!("{} ", styled(glyph_for(kind), kind, on_path)));
        }
        out.push('\n');
    }
    out
}

fn glyph_for(kind: Cell) -> char {
    match kind {
        Cell::Open => '.',
        Cell::Blocked => 'X',
        Cell::Toll => 'T',
        Cell::Exit => 'E',
        Cell::Start => 'R',
    }
}

fn styled(glyph: char, kind: Cell, on_path: bool) -> StyledContent<char> {
    if on_path {
        return glyph.green().bold();
    }
    match kind {
        Cell::Blocked => glyph.red().bold(),
        Cell::Toll => glyph.blue().bold(),
        Cell::Exit | Cell::Start => glyph.yellow().bold(),
        Cell::Open => glyph.white().bold(),
    }
}
