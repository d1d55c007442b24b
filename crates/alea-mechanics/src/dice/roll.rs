//! The percentile roll with the open-roll rule.
//!
//! A first draw in the critical low band (1-5) implodes: a second d100 is
//! subtracted. A first draw in the critical high band (96-100) explodes: a
//! second d100 is added. The reroll never chains, whatever it shows.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Die;

/// First draws that trigger a subtractive reroll.
pub const LOW_OPEN_BAND: RangeInclusive<u32> = 1..=5;

/// First draws that trigger an additive reroll.
pub const HIGH_OPEN_BAND: RangeInclusive<u32> = 96..=100;

/// Which way an open roll moved the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenDirection {
    /// The reroll is subtracted.
    Down,
    /// The reroll is added.
    Up,
}

/// The second draw of an open roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reroll {
    /// The value of the second d100.
    pub value: u32,
    /// Whether it was subtracted or added.
    pub direction: OpenDirection,
}

impl Reroll {
    /// The reroll's contribution to the roll total.
    pub fn signed(&self) -> i64 {
        match self.direction {
            OpenDirection::Down => -i64::from(self.value),
            OpenDirection::Up => i64::from(self.value),
        }
    }
}

/// A d100 roll after applying the open-roll rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRoll {
    /// The first draw (1-100).
    pub first: u32,
    /// The second draw, present only when the first hit a critical band.
    pub reroll: Option<Reroll>,
}

impl OpenRoll {
    /// Apply the open-roll rule to a first draw.
    ///
    /// `reroll` is called at most once, and only when `first` lies in a
    /// critical band.
    pub fn from_draws(first: u32, reroll: impl FnOnce() -> u32) -> Self {
        let direction = if LOW_OPEN_BAND.contains(&first) {
            Some(OpenDirection::Down)
        } else if HIGH_OPEN_BAND.contains(&first) {
            Some(OpenDirection::Up)
        } else {
            None
        };
        Self {
            first,
            reroll: direction.map(|direction| Reroll {
                value: reroll(),
                direction,
            }),
        }
    }

    /// Returns true if the first draw triggered a reroll.
    pub fn is_open(&self) -> bool {
        self.reroll.is_some()
    }

    /// First draw plus or minus the reroll.
    pub fn value(&self) -> i64 {
        i64::from(self.first) + self.reroll.map_or(0, |r| r.signed())
    }
}

impl std::fmt::Display for OpenRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reroll {
            Some(Reroll {
                value,
                direction: OpenDirection::Down,
            }) => write!(f, "{} - {} = {}", self.first, value, self.value()),
            Some(Reroll {
                value,
                direction: OpenDirection::Up,
            }) => write!(f, "{} + {} = {}", self.first, value, self.value()),
            None => write!(f, "{}", self.first),
        }
    }
}

/// Roll a d100 using the open-roll rule.
pub fn roll_d100<R: Rng + ?Sized>(rng: &mut R) -> OpenRoll {
    let first = Die::D100.roll(rng);
    OpenRoll::from_draws(first, || Die::D100.roll(rng))
}
