//! gridcover - a grid coverage game with reinforcement learning hooks
//!
//! An agent moves through an 8x8 grid of obstacles and target cells and must
//! visit every target before its step budget runs out.
//!
//! This library provides:
//! - Core environment logic (game module): levels, episode state, the
//!   transition and reward function
//! - An RL-facing interface with tensor observations (rl module)
//! - TUI rendering (render module)
//! - Interactive and playback execution modes (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
