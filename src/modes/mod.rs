//! Execution modes: interactive play and random-policy playback

pub mod human;
pub mod watch;

pub use human::HumanMode;
pub use watch::{PlaybackSpeed, WatchMode};
