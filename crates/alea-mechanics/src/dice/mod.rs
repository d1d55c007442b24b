//! Dice types and rolling.
//!
//! ALEA uses two dice: a percentile die for the main mechanic, rolled
//! with the open-roll rule, and zero-based ten-sided dice for ALEA99 pools.

pub mod pool;
pub mod roll;

pub use pool::{D10Pool, two_lowest};
pub use roll::{OpenDirection, OpenRoll, Reroll, roll_d100};

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A die type used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Ten-sided die numbered 0-9.
    D10,
    /// Percentile die (1-100).
    D100,
}

impl Die {
    /// The inclusive range of face values.
    pub fn faces(self) -> RangeInclusive<u32> {
        match self {
            Self::D10 => 0..=9,
            Self::D100 => 1..=100,
        }
    }

    /// Roll this die once.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(self.faces())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D10 => write!(f, "d10"),
            Self::D100 => write!(f, "d100"),
        }
    }
}
