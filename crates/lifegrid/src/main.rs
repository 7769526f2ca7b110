//! `lifegrid` command-line game.
//!
//! Prompts and the running game share stdin through one reader thread:
//! prompt answers and the Enter that stops a run arrive on the same
//! channel.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lifegrid::engine::{spawn_line_reader, ChannelConsole, Game, GameConfig};
use lifegrid::save::DirStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "lifegrid",
    version,
    about = "Conway's Game of Life on a bounded arena"
)]
struct Cli {
    /// Arena length. Prompted for when omitted.
    #[arg(long, requires = "height")]
    length: Option<usize>,

    /// Arena height. Prompted for when omitted.
    #[arg(long, requires = "length")]
    height: Option<usize>,

    /// Initial seed of `0`/`1` characters in row-major order.
    #[arg(long, requires_all = ["length", "height"])]
    seed: Option<String>,

    /// Key for the random seed generator, for reproducible games.
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Stop after this many generations.
    #[arg(long)]
    max_generations: Option<u64>,

    /// Glyph for live cells.
    #[arg(long, default_value = "●")]
    live_glyph: String,

    /// Glyph for dead cells.
    #[arg(long, default_value = "◌")]
    dead_glyph: String,

    /// Keep previous frames on screen instead of clearing.
    #[arg(long)]
    no_clear: bool,

    /// Skip the load prompt on start and the save prompt on exit.
    #[arg(long)]
    no_save_prompts: bool,

    /// Directory holding `*.save.json` files.
    #[arg(long, env = "LIFEGRID_SAVE_DIR", default_value = ".")]
    save_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            length: self.length,
            height: self.height,
            tick_interval: Duration::from_millis(self.tick_ms),
            live_glyph: self.live_glyph,
            dead_glyph: self.dead_glyph,
            clear_each_frame: !self.no_clear,
            initial_seed: self.seed,
            rng_seed: self.rng_seed,
            max_generations: self.max_generations,
            save_prompts: !self.no_save_prompts,
            save_dir: self.save_dir,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = Cli::parse().into_config();
    let store = DirStore::new(config.save_dir.clone());

    let lines = spawn_line_reader(BufReader::new(io::stdin()))
        .context("failed to start the input reader")?;
    let console = ChannelConsole::new(lines.clone(), io::stdout());

    let mut game = Game::new(config, console, store).context("invalid configuration")?;
    game.start().context("failed to start the game")?;
    let summary = game.run(&lines).context("game loop failed")?;

    info!(
        generations = summary.generations,
        live = summary.live_cells,
        saved = summary.saved,
        "exiting"
    );
    Ok(())
}

/// Log to stderr so frames on stdout stay intact. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_game_defaults() {
        // The save directory is pinned so LIFEGRID_SAVE_DIR cannot leak in.
        let cli = Cli::try_parse_from(["lifegrid", "--save-dir", "."]).unwrap();
        assert_eq!(cli.into_config(), GameConfig::default());
    }

    #[test]
    fn cli_maps_every_flag() {
        let cli = Cli::try_parse_from([
            "lifegrid",
            "--length",
            "5",
            "--height",
            "4",
            "--seed",
            "00000000000000000000",
            "--rng-seed",
            "9",
            "--tick-ms",
            "50",
            "--max-generations",
            "12",
            "--no-clear",
            "--no-save-prompts",
            "--save-dir",
            "saves",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.dimensions(), Some((5, 4)));
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.max_generations, Some(12));
        assert_eq!(config.rng_seed, Some(9));
        assert!(!config.clear_each_frame);
        assert!(!config.save_prompts);
        assert_eq!(config.save_dir, PathBuf::from("saves"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn length_requires_height() {
        assert!(Cli::try_parse_from(["lifegrid", "--length", "5"]).is_err());
        assert!(Cli::try_parse_from(["lifegrid", "--seed", "000111000"]).is_err());
    }
}
