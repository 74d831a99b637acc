use std::time::{Duration, Instant};

/// Session metrics for the interactive modes
///
/// Tracks wall-clock time and cross-episode statistics for display only;
/// the simulation never reads these.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_return: Option<f32>,
    pub episodes_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_return: None,
            episodes_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_episode_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_episode_over(&mut self, episode_return: f32) {
        self.episodes_played += 1;
        if self.best_return.map_or(true, |best| episode_return > best) {
            self.best_return = Some(episode_return);
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_return_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_episode_over(-50.0);
        assert_eq!(metrics.best_return, Some(-50.0));
        assert_eq!(metrics.episodes_played, 1);

        metrics.on_episode_over(-80.0);
        assert_eq!(metrics.best_return, Some(-50.0)); // Should not decrease
        assert_eq!(metrics.episodes_played, 2);

        metrics.on_episode_over(25.0);
        assert_eq!(metrics.best_return, Some(25.0)); // Should update
        assert_eq!(metrics.episodes_played, 3);
    }

    #[test]
    fn test_episode_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_episode_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
