//! Reinforcement-learning interface for the coverage environment
//!
//! Provides:
//! - 4-channel grid observations (free space, agent, targets, visited)
//! - A Burn-compatible environment wrapper with discrete actions
//! - Backend-agnostic tensor encoding

pub mod backend;
pub mod environment;
pub mod observation;

pub use backend::{default_device, CpuBackend};
pub use environment::CoverageEnvironment;
pub use observation::create_observation;
