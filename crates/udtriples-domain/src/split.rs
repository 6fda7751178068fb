//! Data split module - train / dev / test partitions

use std::fmt;
use std::str::FromStr;

/// A named data partition
///
/// Ordering follows the conventional processing order (train, dev, test).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Split {
    /// Training data
    Train,
    /// Development (validation) data
    Dev,
    /// Held-out test data
    Test,
}

impl Split {
    /// All splits in processing order
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Lowercase name, also used as the output file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "dev" => Ok(Split::Dev),
            "test" => Ok(Split::Test),
            other => Err(format!("Unknown split '{}' (expected train, dev or test)", other)),
        }
    }
}
