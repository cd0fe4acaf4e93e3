use maze_rust::config::{Cli, Config};
use maze_rust::display::render;
use maze_rust::scenario::Scenario;
use maze_rust::solver::select_best;
use maze_rust::stat::Stats;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new(&cli)?;
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scenario = Scenario::generate(config.size, &mut rng);
    let maze = &scenario.maze;
    let start = scenario.start;

    println!("Generated Maze: ");
    print!("{}", render(maze, None, None));

    println!("Starting at: ({}, {})", start.0, start.1);

    let (exit_a, exit_b) = maze.exits();
    let mut stats = Stats::default();
    match select_best(maze, start, exit_a, exit_b, &mut stats) {
        Some(path) => {
            println!("Minimum cost path found.");
            println!("Path:");
            print!("{}", render(maze, Some(&path), Some(start)));
        }
        None => println!("No path to an exit found."),
    }
    stats.print();

    Ok(())
}
