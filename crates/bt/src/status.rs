use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickStatus {
    /// Not resolved yet; the caller should tick again later.
    Running,
    /// Resolved positively. Terminal for the current activation.
    Success,
    /// Resolved negatively. Terminal for the current activation.
    Failure,
}

impl TickStatus {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, TickStatus::Running)
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, TickStatus::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, TickStatus::Failure)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`; `Running` is left alone.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            TickStatus::Running => TickStatus::Running,
            TickStatus::Success => TickStatus::Failure,
            TickStatus::Failure => TickStatus::Success,
        }
    }
}

impl fmt::Display for TickStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TickStatus::Running => "running",
            TickStatus::Success => "success",
            TickStatus::Failure => "failure",
        };
        f.write_str(s)
    }
}
