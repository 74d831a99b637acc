use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the environment core
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("failed to read level file {path:?}")]
    LevelRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed level: {0}")]
    MalformedLevel(String),
    #[error("no free non-target cell available as a start position")]
    NoStartCell,
    #[error("invalid action index {0}, expected 0..=3")]
    InvalidAction(usize),
}
