use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gridcover::game::EnvConfig;
use gridcover::modes::{HumanMode, WatchMode};

#[derive(Parser)]
#[command(name = "gridcover")]
#[command(version, about = "Grid coverage game with RL capabilities")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Curriculum level to load
    #[arg(long, default_value = "0")]
    curriculum: usize,

    /// Step budget per episode
    #[arg(long, default_value = "200")]
    max_steps: u32,

    /// Seed for the first episode's start-position draw
    #[arg(long)]
    seed: Option<u64>,

    /// Directory containing curriculum level files
    #[arg(long, default_value = "levels")]
    levels_dir: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Steer the agent with the keyboard
    Human,
    /// Watch a random policy play paced episodes
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EnvConfig {
        curriculum: cli.curriculum,
        max_steps: cli.max_steps,
        levels_dir: cli.levels_dir,
        ..EnvConfig::default()
    };

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, cli.seed)?;
            human_mode.run().await?;
        }
        Mode::Watch => {
            let mut watch_mode = WatchMode::new(config, cli.seed)?;
            watch_mode.run().await?;
        }
    }

    Ok(())
}
