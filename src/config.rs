use std::io::{self, Write};

use anyhow::{anyhow, Context};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "Rust Maze",
    about = "Random maze escape with A* search implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Size of the maze (n x n cells), prompted for if omitted")]
    pub size: Option<usize>,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub size: usize,
    pub seed: Option<u64>,
}

impl Config {
    // Prompts on stdin for the maze size when --size was not given.
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let size = match cli.size {
            Some(size) => size,
            None => prompt_for_size()?,
        };
        Ok(Self {
            size,
            seed: cli.seed,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.size == 0 {
            return Err(anyhow!("Maze size must be at least 1, got {}", self.size));
        }
        Ok(())
    }
}

fn prompt_for_size() -> anyhow::Result<usize> {
    print!("Enter the size of the maze (n x n): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read the maze size from stdin")?;
    parse_size(&line)
}

fn parse_size(line: &str) -> anyhow::Result<usize> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .with_context(|| format!("Invalid maze size {:?}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args() {
        let cli = Cli::parse_from(["maze", "--size", "9", "--seed", "42"]);
        assert_eq!(cli.size, Some(9));
        assert_eq!(cli.seed, Some(42));

        let cli = Cli::parse_from(["maze"]);
        assert_eq!(cli.size, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_validate_size() {
        let config = Config {
            size: 0,
            seed: None,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        let config = Config {
            size: 1,
            seed: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("7\n").unwrap(), 7);
        assert_eq!(parse_size("  12  ").unwrap(), 12);
        assert_eq!(parse_size("0").unwrap(), 0);
        assert!(parse_size("abc").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("-3").is_err());
    }
}
