use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::Action,
    config::EnvConfig,
    error::EnvError,
    level::{Level, GRID_SIZE},
    state::{EpisodeState, Position},
};

/// Rejection-sampling budget for the start-position draw. A level with no
/// free non-target cell must fail instead of spinning forever.
const MAX_START_DRAWS: u32 = 1024;

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the move was legal and the agent actually moved
    pub moved: bool,
    /// Whether the agent landed on a cell it had never visited
    pub newly_visited: bool,
    /// Whether the agent entered a target cell for the first time
    pub reached_target: bool,
}

/// Result of one environment step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// Reward for this step (for RL training)
    pub reward: f32,
    /// Whether every target has now been covered
    pub terminated: bool,
    /// Whether the step budget ran out
    pub truncated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The engine that owns configuration and randomness and drives episodes
///
/// `reset` loads the configured curriculum level and samples a start
/// position; `step` applies one action to an [`EpisodeState`]. The engine
/// owns its RNG, so independent engines never share seed state.
pub struct CoverageEngine {
    config: EnvConfig,
    rng: StdRng,
}

impl CoverageEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: EnvConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Select which curriculum level the next reset loads
    pub fn set_curriculum(&mut self, curriculum: usize) {
        self.config.curriculum = curriculum;
    }

    /// Start a fresh episode
    ///
    /// An explicit seed makes the start-position draw reproducible; with
    /// `None` the RNG is re-derived from OS entropy. The level layout and
    /// target set are deterministic either way. Fails if the level file is
    /// missing or malformed, or if no valid start cell can be found.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<EpisodeState, EnvError> {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let level = Level::load(&self.config.levels_dir, self.config.curriculum)?;
        let start = self.sample_start(&level)?;

        Ok(EpisodeState::new(level, start, self.config.max_steps))
    }

    /// Execute one step of the episode
    ///
    /// Illegal moves (off-grid or into an obstacle) leave the agent in place
    /// but still consume a step. Reward: the step penalty by default,
    /// replaced by the target reward when a target cell is entered for the
    /// first time, plus the completion bonus once all targets are covered.
    /// A cell is checked against the visited set before the target set, so
    /// it can score the target reward only on its first entry.
    pub fn step(&self, state: &mut EpisodeState, action: Action) -> StepResult {
        let (drow, dcol) = action.delta();
        let candidate = state.agent_pos.moved_by(drow, dcol);

        let moved = state.level.is_free(candidate);
        if moved {
            state.agent_pos = candidate;
        }

        let mut reward = self.config.step_penalty;
        let newly_visited = !state.visited.contains(&state.agent_pos);
        let mut reached_target = false;

        if newly_visited {
            if state.level.targets().contains(&state.agent_pos) {
                reward = self.config.target_reward;
                reached_target = true;
            }
            state.visited.insert(state.agent_pos);
        }

        state.steps += 1;

        let terminated = state.coverage_complete();
        let truncated = state.truncated();
        if terminated {
            reward += self.config.completion_bonus;
        }

        StepResult {
            reward,
            terminated,
            truncated,
            info: StepInfo {
                moved,
                newly_visited,
                reached_target,
            },
        }
    }

    /// Draw a start position uniformly from free non-target cells
    fn sample_start(&mut self, level: &Level) -> Result<Position, EnvError> {
        for _ in 0..MAX_START_DRAWS {
            let pos = Position::new(
                self.rng.gen_range(0..GRID_SIZE as i32),
                self.rng.gen_range(0..GRID_SIZE as i32),
            );

            if level.is_free(pos) && !level.targets().contains(&pos) {
                return Ok(pos);
            }
        }

        Err(EnvError::NoStartCell)
    }
}
