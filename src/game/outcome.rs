//! Result of submitting a selection

use super::scoring::PENALTY;
use std::fmt;

/// Outcome of `GameEngine::submit`
///
/// Every `Rejected*` variant has already cost the player `PENALTY` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Empty selection; nothing scored
    Cleared,
    /// Fewer than three letters
    RejectedTooShort(String),
    /// Not one of the target words
    RejectedNotInDictionary(String),
    /// Target word that was already found
    RejectedAlreadyFound(String),
    /// Cells do not run in one straight line
    RejectedNotLinear(String),
    /// New find and the points it earned
    Accepted(String, u32),
}

impl SubmitResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(..))
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        !matches!(self, Self::Accepted(..) | Self::Cleared)
    }
}

impl fmt::Display for SubmitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleared => write!(f, "Selection cleared."),
            Self::RejectedTooShort(_) => write!(f, "Word too short. -{PENALTY} points."),
            Self::RejectedNotInDictionary(w) => write!(f, "\"{w}\" not in puzzle. -{PENALTY} points."),
            Self::RejectedAlreadyFound(w) => write!(f, "\"{w}\" already found. -{PENALTY} points."),
            Self::RejectedNotLinear(_) => write!(f, "Please select linearly. -{PENALTY} points."),
            Self::Accepted(w, points) => write!(f, "Found \"{w}\"! +{points} points"),
        }
    }
}
