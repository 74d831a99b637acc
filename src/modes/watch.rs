//! Watch mode: paced playback of a random policy
//!
//! Runs episodes under a uniformly random policy and displays them in the
//! terminal. Useful for eyeballing level layouts and reward behavior without
//! a trained agent. Playback pacing is purely cosmetic; the environment
//! never sees the timers.
//!
//! # Controls
//!
//! - Space: Pause/unpause
//! - R: Reset episode
//! - 1-4: Speed control (1=slow, 2=normal, 3=fast, 4=very fast)
//! - Q/Esc: Quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, Interval};

use crate::game::{Action, CoverageEngine, EnvConfig, EpisodeState};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Playback speed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSpeed {
    /// Slow: 2 Hz (500ms per step)
    Slow,
    /// Normal: 8 Hz (125ms per step)
    Normal,
    /// Fast: 20 Hz (50ms per step)
    Fast,
    /// Very Fast: 60 Hz (16ms per step)
    VeryFast,
}

impl PlaybackSpeed {
    /// Get the tick interval for this speed
    fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(125),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }
}

/// Watch mode: a random agent plays paced episodes
pub struct WatchMode {
    engine: CoverageEngine,
    state: EpisodeState,
    policy_rng: StdRng,
    renderer: Renderer,
    metrics: GameMetrics,
    episode_return: f32,
    episode_count: usize,
    paused: bool,
    speed: PlaybackSpeed,
    should_quit: bool,
}

impl WatchMode {
    /// Create a new watch session
    ///
    /// The optional seed applies to the first episode's start draw; the
    /// policy itself always acts randomly.
    pub fn new(config: EnvConfig, seed: Option<u64>) -> Result<Self> {
        let mut engine = CoverageEngine::new(config);
        let state = engine
            .reset(seed)
            .context("Failed to start the first episode")?;

        Ok(Self {
            engine,
            state,
            policy_rng: StdRng::from_entropy(),
            renderer: Renderer::new(),
            metrics: GameMetrics::new(),
            episode_return: 0.0,
            episode_count: 0,
            paused: false,
            speed: PlaybackSpeed::Normal,
            should_quit: false,
        })
    }

    /// Run the playback loop
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_playback_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_playback_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Environment steps based on playback speed
        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle keyboard input
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer)?;
                    }
                }

                // Environment tick
                _ = tick_timer.tick() => {
                    if !self.paused {
                        if self.state.is_over() {
                            self.next_episode()?;
                        } else {
                            self.step_random();
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.episode_return);
                    }).context("Failed to draw frame")?;
                }

                // Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Take one uniformly random action
    fn step_random(&mut self) {
        let action = Action::ALL[self.policy_rng.gen_range(0..Action::ALL.len())];
        let result = self.engine.step(&mut self.state, action);
        self.episode_return += result.reward;

        if result.terminated || result.truncated {
            self.metrics.on_episode_over(self.episode_return);
        }
    }

    fn next_episode(&mut self) -> Result<()> {
        self.state = self
            .engine
            .reset(None)
            .context("Failed to reset the episode")?;
        self.episode_return = 0.0;
        self.episode_count += 1;
        self.metrics.on_episode_start();
        Ok(())
    }

    /// Handle keyboard events
    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) -> Result<()> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('r') => {
                    self.next_episode()?;
                }
                KeyCode::Char('1') => {
                    self.change_speed(PlaybackSpeed::Slow, tick_timer);
                }
                KeyCode::Char('2') => {
                    self.change_speed(PlaybackSpeed::Normal, tick_timer);
                }
                KeyCode::Char('3') => {
                    self.change_speed(PlaybackSpeed::Fast, tick_timer);
                }
                KeyCode::Char('4') => {
                    self.change_speed(PlaybackSpeed::VeryFast, tick_timer);
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Change the playback speed
    fn change_speed(&mut self, new_speed: PlaybackSpeed, tick_timer: &mut Interval) {
        self.speed = new_speed;
        tick_timer.reset_after(self.speed.tick_interval());
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
