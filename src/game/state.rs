use std::collections::HashSet;

use super::level::{Level, GRID_SIZE};

/// A (row, col) coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by a (row, col) delta
    pub fn moved_by(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Check whether the position lies inside the grid
    pub fn in_bounds(&self) -> bool {
        self.row >= 0
            && self.row < GRID_SIZE as i32
            && self.col >= 0
            && self.col < GRID_SIZE as i32
    }
}

/// Complete state of one episode
///
/// Owns everything that varies over an episode: the level (fixed after
/// reset), the agent position, the visited set, the step counter and the
/// step budget. Constructed fresh by the engine's reset; mutated only by its
/// step. Each episode instance is independent, so environments can run side
/// by side without shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeState {
    pub level: Level,
    pub agent_pos: Position,
    pub visited: HashSet<Position>,
    pub steps: u32,
    pub max_steps: u32,
}

impl EpisodeState {
    /// Create a new episode starting at the given position
    ///
    /// The start cell counts as visited immediately.
    pub fn new(level: Level, start: Position, max_steps: u32) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);

        Self {
            level,
            agent_pos: start,
            visited,
            steps: 0,
            max_steps,
        }
    }

    /// Whether every target cell has been visited
    pub fn coverage_complete(&self) -> bool {
        self.level
            .targets()
            .iter()
            .all(|target| self.visited.contains(target))
    }

    /// Number of target cells already visited
    pub fn covered_targets(&self) -> usize {
        self.level
            .targets()
            .iter()
            .filter(|target| self.visited.contains(target))
            .count()
    }

    /// Whether the step budget is exhausted
    pub fn truncated(&self) -> bool {
        self.steps >= self.max_steps
    }

    /// Whether the episode has ended, by coverage or by budget
    pub fn is_over(&self) -> bool {
        self.coverage_complete() || self.truncated()
    }
}
