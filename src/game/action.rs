use super::error::EnvError;

/// A move the agent can make on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Down,
    Up,
    Right,
    Left,
}

impl Action {
    /// All actions, ordered by their discrete index
    pub const ALL: [Action; 4] = [Action::Down, Action::Up, Action::Right, Action::Left];

    /// Returns the (row, col) displacement for this action
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Down => (1, 0),
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Left => (0, -1),
        }
    }

    /// Convert a discrete action index to an Action
    ///
    /// - 0 → Down
    /// - 1 → Up
    /// - 2 → Right
    /// - 3 → Left
    ///
    /// Any other index is rejected with [`EnvError::InvalidAction`].
    pub fn from_index(idx: usize) -> Result<Self, EnvError> {
        match idx {
            0 => Ok(Action::Down),
            1 => Ok(Action::Up),
            2 => Ok(Action::Right),
            3 => Ok(Action::Left),
            _ => Err(EnvError::InvalidAction(idx)),
        }
    }

    /// The discrete index of this action
    pub fn index(&self) -> usize {
        match self {
            Action::Down => 0,
            Action::Up => 1,
            Action::Right => 2,
            Action::Left => 3,
        }
    }
}
