use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::EnvError;
use super::state::Position;

/// Grid side length; levels are always square
pub const GRID_SIZE: usize = 8;

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Obstacle,
}

/// An immutable level layout: the obstacle grid plus the set of target cells
///
/// Levels are parsed from a text format with one row per line:
/// `#` is an obstacle, `T` a target, and anything else (conventionally `.`)
/// free space. Trailing whitespace on a line is ignored. Targets are free
/// cells as far as movement is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    targets: HashSet<Position>,
}

impl Level {
    /// Parse a level from its textual form
    ///
    /// Expects exactly [`GRID_SIZE`] rows of [`GRID_SIZE`] symbols each.
    /// Unrecognized symbols are treated as free space; a wrong number of
    /// rows, or a row of the wrong width, is a [`EnvError::MalformedLevel`].
    pub fn parse(text: &str) -> Result<Self, EnvError> {
        let mut rows: Vec<&str> = text.lines().map(|line| line.trim_end()).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        if rows.len() != GRID_SIZE {
            return Err(EnvError::MalformedLevel(format!(
                "expected {GRID_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [[Cell::Free; GRID_SIZE]; GRID_SIZE];
        let mut targets = HashSet::new();

        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != GRID_SIZE {
                return Err(EnvError::MalformedLevel(format!(
                    "row {i} has {} symbols, expected {GRID_SIZE}",
                    row.chars().count()
                )));
            }

            for (j, symbol) in row.chars().enumerate() {
                match symbol {
                    '#' => cells[i][j] = Cell::Obstacle,
                    'T' => {
                        targets.insert(Position::new(i as i32, j as i32));
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { cells, targets })
    }

    /// Load the level for a curriculum index from a levels directory
    ///
    /// Reads `curriculum_{index}.txt`; a missing or unreadable file is a
    /// fatal [`EnvError::LevelRead`].
    pub fn load(dir: &Path, curriculum: usize) -> Result<Self, EnvError> {
        let path = dir.join(format!("curriculum_{curriculum}.txt"));
        let text = fs::read_to_string(&path).map_err(|source| EnvError::LevelRead {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The cell at (row, col); callers must pass in-bounds indices
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether a position is inside the grid and free of obstacles
    pub fn is_free(&self, pos: Position) -> bool {
        pos.in_bounds() && self.cells[pos.row as usize][pos.col as usize] == Cell::Free
    }

    /// The target cells the agent must cover
    pub fn targets(&self) -> &HashSet<Position> {
        &self.targets
    }
}
