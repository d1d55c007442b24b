//! Digit-rule classification (ALEA99).
//!
//! Matching digits make the result extreme in either direction: within the
//! threshold they are an absolute success, beyond it a critical failure.

use serde::{Deserialize, Serialize};

/// Success level of an ALEA99 roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alea99Level {
    /// Identical digits, within the threshold.
    AbsoluteSuccess,
    /// Distinct digits, within the threshold.
    FullSuccess,
    /// Distinct digits, above the threshold.
    FullFailure,
    /// Identical digits, above the threshold.
    CriticalFailure,
}

impl Alea99Level {
    /// Apply the four-way decision table.
    pub fn decide(digits_identical: bool, within_threshold: bool) -> Self {
        match (digits_identical, within_threshold) {
            (true, true) => Self::AbsoluteSuccess,
            (false, true) => Self::FullSuccess,
            (false, false) => Self::FullFailure,
            (true, false) => Self::CriticalFailure,
        }
    }

    /// Short code for display.
    pub fn acronym(self) -> &'static str {
        match self {
            Self::AbsoluteSuccess => "SA",
            Self::FullSuccess => "SP",
            Self::FullFailure => "FP",
            Self::CriticalFailure => "FC",
        }
    }

    /// Returns true for either success level.
    pub fn is_success(self) -> bool {
        matches!(self, Self::AbsoluteSuccess | Self::FullSuccess)
    }
}

impl std::fmt::Display for Alea99Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbsoluteSuccess => write!(f, "Absolute Success"),
            Self::FullSuccess => write!(f, "Full Success"),
            Self::FullFailure => write!(f, "Full Failure"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
        }
    }
}
