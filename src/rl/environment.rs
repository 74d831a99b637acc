use burn::tensor::{backend::Backend, Tensor};

use super::observation::create_observation;
use crate::game::{Action, CoverageEngine, EnvConfig, EnvError, EpisodeState};

/// Coverage environment for reinforcement learning
///
/// Wraps the engine and provides a Burn-compatible RL interface with:
/// - Tensor observations (4-channel grid)
/// - Discrete action space (4 actions: Down, Up, Right, Left)
/// - Standard reset/step contract with separate terminated and truncated
///   flags
pub struct CoverageEnvironment<B: Backend> {
    engine: CoverageEngine,
    state: EpisodeState,
    device: B::Device,
}

impl<B: Backend> CoverageEnvironment<B> {
    /// Create a new coverage environment
    ///
    /// Runs an initial unseeded reset, so creation fails if the configured
    /// level cannot be loaded.
    pub fn new(config: EnvConfig, device: B::Device) -> Result<Self, EnvError> {
        let mut engine = CoverageEngine::new(config);
        let state = engine.reset(None)?;
        Ok(Self {
            engine,
            state,
            device,
        })
    }

    /// Reset the environment and return the initial observation
    ///
    /// An explicit seed reproduces the start-position draw. Returns:
    /// Tensor<B, 3> with shape [4, 8, 8].
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Tensor<B, 3>, EnvError> {
        self.state = self.engine.reset(seed)?;
        Ok(create_observation(&self.state, &self.device))
    }

    /// Step the environment with a discrete action index
    ///
    /// Actions: 0 = Down, 1 = Up, 2 = Right, 3 = Left. Any other index is
    /// an [`EnvError::InvalidAction`].
    ///
    /// Returns: (observation, reward, terminated, truncated)
    /// - observation: Tensor<B, 3> with shape [4, 8, 8]
    /// - reward: f32
    /// - terminated: true once every target has been visited
    /// - truncated: true once the step budget is exhausted
    pub fn step(&mut self, action_idx: usize) -> Result<(Tensor<B, 3>, f32, bool, bool), EnvError> {
        let action = Action::from_index(action_idx)?;
        let result = self.engine.step(&mut self.state, action);

        let observation = create_observation(&self.state, &self.device);

        Ok((observation, result.reward, result.terminated, result.truncated))
    }

    /// Get the current observation without stepping
    pub fn observation(&self) -> Tensor<B, 3> {
        create_observation(&self.state, &self.device)
    }

    /// Get the device used by this environment
    pub fn device(&self) -> &B::Device {
        &self.device
    }

    /// Get a read-only view of the current episode state
    pub fn state(&self) -> &EpisodeState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GRID_SIZE;
    use burn::backend::ndarray::NdArrayDevice;
    use burn::backend::NdArray;
    use std::fs;
    use tempfile::TempDir;

    type TestBackend = NdArray<f32>;

    fn env_with_level(rows: &[&str]) -> (CoverageEnvironment<TestBackend>, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let mut text = rows.join("\n");
        text.push('\n');
        fs::write(dir.path().join("curriculum_0.txt"), text).unwrap();

        let config = EnvConfig {
            levels_dir: dir.path().to_path_buf(),
            ..EnvConfig::default()
        };
        let env = CoverageEnvironment::new(config, NdArrayDevice::default()).unwrap();
        (env, dir)
    }

    fn open_level() -> Vec<&'static str> {
        vec![
            "T.......", "........", "........", "........", "........", "........", "........",
            "........",
        ]
    }

    #[test]
    fn test_environment_creation() {
        let (env, _dir) = env_with_level(&open_level());

        assert_eq!(env.state().steps, 0);
        assert_eq!(env.state().visited.len(), 1);
    }

    #[test]
    fn test_creation_fails_without_levels() {
        let dir = tempfile::tempdir().unwrap();
        let config = EnvConfig {
            levels_dir: dir.path().to_path_buf(),
            ..EnvConfig::default()
        };

        let env = CoverageEnvironment::<TestBackend>::new(config, NdArrayDevice::default());
        assert!(env.is_err());
    }

    #[test]
    fn test_reset_returns_valid_observation() {
        let (mut env, _dir) = env_with_level(&open_level());

        let obs = env.reset(None).unwrap();

        assert_eq!(obs.shape().dims, [4, GRID_SIZE, GRID_SIZE]);
    }

    #[test]
    fn test_reset_same_seed_same_observation() {
        let (mut env, _dir) = env_with_level(&open_level());

        let first = env.reset(Some(7)).unwrap();
        let start = env.state().agent_pos;
        let second = env.reset(Some(7)).unwrap();

        assert_eq!(env.state().agent_pos, start);
        assert_eq!(
            first.to_data().as_slice::<f32>().unwrap(),
            second.to_data().as_slice::<f32>().unwrap()
        );
    }

    #[test]
    fn test_step_returns_tuple() {
        let (mut env, _dir) = env_with_level(&open_level());

        let initial_steps = env.state().steps;
        let (obs, reward, terminated, _truncated) = env.step(0).unwrap();

        assert_eq!(obs.shape().dims, [4, 8, 8]);
        assert!(reward.is_finite());
        assert!(!terminated || env.state().coverage_complete());
        assert_eq!(env.state().steps, initial_steps + 1);
    }

    #[test]
    fn test_step_with_all_actions() {
        let (mut env, _dir) = env_with_level(&open_level());

        for action_idx in 0..4 {
            env.reset(None).unwrap();
            let (obs, _reward, _terminated, _truncated) = env.step(action_idx).unwrap();
            assert_eq!(obs.shape().dims, [4, 8, 8]);
        }
    }

    #[test]
    fn test_invalid_action_rejected() {
        let (mut env, _dir) = env_with_level(&open_level());

        assert!(matches!(env.step(4), Err(EnvError::InvalidAction(4))));
        // The failed call must not have consumed a step
        assert_eq!(env.state().steps, 0);
    }

    #[test]
    fn test_channel_sums_track_state() {
        let (mut env, _dir) = env_with_level(&open_level());
        env.reset(Some(3)).unwrap();

        let channel_sum = |obs: &Tensor<TestBackend, 3>, channel: usize| -> f32 {
            obs.to_data().as_slice::<f32>().unwrap()
                [channel * GRID_SIZE * GRID_SIZE..(channel + 1) * GRID_SIZE * GRID_SIZE]
                .iter()
                .sum()
        };

        let obs = env.observation();
        assert_eq!(channel_sum(&obs, 2), env.state().level.targets().len() as f32);

        let mut previous_visited = channel_sum(&obs, 3);
        assert_eq!(previous_visited, 1.0);

        for action_idx in [0, 2, 1, 3] {
            let (obs, _, _, _) = env.step(action_idx).unwrap();
            let visited = channel_sum(&obs, 3);
            assert!(visited >= previous_visited);
            assert_eq!(visited, env.state().visited.len() as f32);
            assert_eq!(channel_sum(&obs, 1), 1.0);
            previous_visited = visited;
        }
    }

    #[test]
    fn test_observation_changes_after_step() {
        let (mut env, _dir) = env_with_level(&open_level());
        env.reset(Some(11)).unwrap();

        // Pick a legal move so the agent channel actually changes
        let start = env.state().agent_pos;
        let action_idx = if start.row < 7 { 0 } else { 1 };

        let obs1 = env.observation();
        env.step(action_idx).unwrap();
        let obs2 = env.observation();

        assert_ne!(
            obs1.to_data().as_slice::<f32>().unwrap(),
            obs2.to_data().as_slice::<f32>().unwrap()
        );
    }

    #[test]
    fn test_multiple_episodes() {
        let (mut env, _dir) = env_with_level(&open_level());

        for _ in 0..2 {
            env.reset(None).unwrap();
            let mut done = false;
            let mut steps = 0;

            while !done && steps < 300 {
                let action_idx = steps % 4;
                let (_obs, _reward, terminated, truncated) = env.step(action_idx).unwrap();
                done = terminated || truncated;
                steps += 1;
            }

            assert!(done);
        }
    }

    #[test]
    fn test_agent_stays_on_free_cells() {
        let rows = vec![
            "T.......", ".####...", ".#......", ".#.#.#..", "...#....", ".####...", "........",
            "........",
        ];
        let (mut env, _dir) = env_with_level(&rows);
        env.reset(Some(5)).unwrap();

        for step in 0..50 {
            env.step(step % 4).unwrap();
            let pos = env.state().agent_pos;
            assert!(pos.in_bounds());
            assert!(env.state().level.is_free(pos));
            assert!(env.state().visited.contains(&pos));
        }
    }

    #[test]
    fn test_device_access() {
        let (env, _dir) = env_with_level(&open_level());
        let _device = env.device();
    }
}
