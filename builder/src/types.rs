use std::{cmp::Ordering, fmt};

use orderly_parser::ast::SortDirection;
use serde::{Deserialize, Serialize};

/// Direction of a column ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Asc,
    Desc,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Asc => write!(f, "ASC"),
            OrderType::Desc => write!(f, "DESC"),
        }
    }
}

impl From<SortDirection> for OrderType {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => OrderType::Asc,
            SortDirection::Desc => OrderType::Desc,
        }
    }
}

/// The class an ordering directive belongs to. Directives of a higher class are emitted before
/// directives of a lower class, no matter the order in which they were requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// An explicit column or expression ordering
    Normal,
    /// Random ordering, which dominates any explicit ordering it is mixed with
    Random,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Priority::Normal => 0,
            Priority::Random => 1,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
