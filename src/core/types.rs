use std::fmt;
use std::str::FromStr;

use super::error::FillError;

pub type Color = i32;
pub type Grid = Vec<Vec<Color>>;

/// `(row, col)` coordinate into a [`Grid`].
pub type Cell = (usize, usize);

/// Cardinal neighbors in push order: down, up, right, left.
pub const FOUR_WAY: &[(isize, isize)] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Cardinal plus diagonal neighbors.
pub const EIGHT_WAY: &[(isize, isize)] = &[
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Recursive,
    StackDfs,
    QueueBfs,
    OffsetStack,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::StackDfs,
        Strategy::QueueBfs,
        Strategy::OffsetStack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::StackDfs => "stack_dfs",
            Strategy::QueueBfs => "queue_bfs",
            Strategy::OffsetStack => "offset_stack",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| FillError::UnknownStrategy(s.to_string()))
    }
}
