//! Status maluses from wounds, fatigue and stun.
//!
//! Each axis takes a small ordinal. Every step costs 20 points on the roll
//! up to the axis maximum; one step past it the character is incapacitated
//! and the check fails outright.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Roll penalty per status step.
pub const STATUS_STEP: i64 = 20;

/// A secondary character-state axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAxis {
    /// Physical injury.
    Wounds,
    /// Exhaustion.
    Fatigue,
    /// Dazed or stunned.
    Stun,
}

impl StatusAxis {
    /// Every axis, in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Wounds, Self::Fatigue, Self::Stun]
    }

    /// Highest ordinal that is still a numeric penalty.
    pub fn max_ordinal(self) -> u8 {
        match self {
            Self::Wounds | Self::Fatigue => 3,
            Self::Stun => 2,
        }
    }

    /// The malus for an ordinal on this axis.
    pub fn malus(self, ordinal: u8) -> StatusMalus {
        if ordinal > self.max_ordinal() {
            StatusMalus::Incapacitated
        } else {
            StatusMalus::Penalty(i64::from(ordinal) * STATUS_STEP)
        }
    }
}

impl std::fmt::Display for StatusAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wounds => write!(f, "wounds"),
            Self::Fatigue => write!(f, "fatigue"),
            Self::Stun => write!(f, "stun"),
        }
    }
}

/// The combined status penalty on a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMalus {
    /// Points added to the roll.
    Penalty(i64),
    /// At least one axis is past its maximum.
    Incapacitated,
}

impl Default for StatusMalus {
    fn default() -> Self {
        Self::Penalty(0)
    }
}

impl StatusMalus {
    /// The numeric penalty, or `None` when incapacitated.
    pub fn penalty(self) -> Option<i64> {
        match self {
            Self::Penalty(p) => Some(p),
            Self::Incapacitated => None,
        }
    }

    /// Returns true if the check must fail outright.
    pub fn is_incapacitated(self) -> bool {
        self == Self::Incapacitated
    }
}

impl Add for StatusMalus {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Penalty(a), Self::Penalty(b)) => Self::Penalty(a + b),
            _ => Self::Incapacitated,
        }
    }
}

impl Sum for StatusMalus {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, m| acc + m)
    }
}

impl std::fmt::Display for StatusMalus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Penalty(p) => write!(f, "{p:+}"),
            Self::Incapacitated => write!(f, "incapacitated"),
        }
    }
}

/// Status ordinals for one check. All zero means no malus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInputs {
    /// Wound ordinal.
    pub wounds: u8,
    /// Fatigue ordinal.
    pub fatigue: u8,
    /// Stun ordinal.
    pub stun: u8,
}

impl StatusInputs {
    /// The ordinal recorded for an axis.
    pub fn ordinal(&self, axis: StatusAxis) -> u8 {
        match axis {
            StatusAxis::Wounds => self.wounds,
            StatusAxis::Fatigue => self.fatigue,
            StatusAxis::Stun => self.stun,
        }
    }

    /// Returns true if every axis is at zero.
    pub fn is_empty(&self) -> bool {
        StatusAxis::all().iter().all(|a| self.ordinal(*a) == 0)
    }

    /// Sum of the per-axis maluses.
    pub fn malus(&self) -> StatusMalus {
        StatusAxis::all()
            .iter()
            .map(|a| a.malus(self.ordinal(*a)))
            .sum()
    }
}
