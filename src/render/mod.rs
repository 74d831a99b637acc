//! Presentation layer: read-only views of the environment state

pub mod renderer;

pub use renderer::{ascii_snapshot, Renderer};
