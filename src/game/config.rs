use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the coverage environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Which curriculum level to load on reset
    pub curriculum: usize,
    /// Step budget before an episode is truncated
    pub max_steps: u32,
    /// Directory containing curriculum level files
    pub levels_dir: PathBuf,

    // Rewards (for RL)
    /// Reward for each step (encourages short paths)
    pub step_penalty: f32,
    /// Reward for entering a target cell for the first time
    pub target_reward: f32,
    /// Bonus added once every target has been visited
    pub completion_bonus: f32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            curriculum: 0,
            max_steps: 200,
            levels_dir: PathBuf::from("levels"),
            step_penalty: -1.0,
            target_reward: 2.0,
            completion_bonus: 30.0,
        }
    }
}

impl EnvConfig {
    /// Create a configuration for a specific curriculum level
    pub fn new(curriculum: usize) -> Self {
        Self {
            curriculum,
            ..Default::default()
        }
    }
}
