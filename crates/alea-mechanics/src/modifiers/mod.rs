//! Modifier composition: threshold, difficulty and status.
//!
//! A check's threshold is either given outright or derived from the
//! character's characteristic, skill and specialization. The difficulty
//! and the status malus are then carried alongside it; in ALEA both apply
//! to the roll, not to the threshold.

pub mod difficulty;
pub mod status;

pub use difficulty::{Difficulty, DifficultyEncoding};
pub use status::{StatusAxis, StatusInputs, StatusMalus};

use serde::{Deserialize, Serialize};

use crate::error::{AleaError, AleaResult};

/// Specialization level on the derived-threshold path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    /// No specialization (ordinal 0).
    #[default]
    None,
    /// Specialized (ordinal 1).
    Specialized,
    /// Master (ordinal 2).
    Master,
}

impl Specialization {
    /// Map an ordinal 0-2.
    pub fn from_ordinal(ordinal: u8) -> AleaResult<Self> {
        match ordinal {
            0 => Ok(Self::None),
            1 => Ok(Self::Specialized),
            2 => Ok(Self::Master),
            other => Err(AleaError::InvalidSpecialization(other)),
        }
    }

    /// Bonus added to the derived threshold.
    pub fn bonus(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Specialized => 20,
            Self::Master => 30,
        }
    }
}

/// Where a check's threshold comes from. All zero means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdInputs {
    /// Explicit threshold value; wins when nonzero.
    pub threshold: i64,
    /// Base characteristic.
    pub characteristic: i64,
    /// Skill value.
    pub skill: i64,
    /// Specialization ordinal (0, 1 or 2).
    pub specialization: u8,
}

impl ThresholdInputs {
    /// An explicit threshold.
    pub fn direct(threshold: i64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// A threshold derived from sub-attributes.
    pub fn derived(characteristic: i64, skill: i64, specialization: u8) -> Self {
        Self {
            threshold: 0,
            characteristic,
            skill,
            specialization,
        }
    }

    /// Returns true if nothing was supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Resolve to a positive threshold value.
    pub fn resolve(&self) -> AleaResult<i64> {
        if self.threshold != 0 {
            return positive(self.threshold);
        }
        let specialization = Specialization::from_ordinal(self.specialization)?;
        if self.characteristic == 0 && self.skill == 0 && specialization == Specialization::None {
            return Err(AleaError::NoThreshold);
        }
        let derived = self
            .characteristic
            .checked_add(self.skill)
            .and_then(|sum| sum.checked_add(specialization.bonus()))
            .ok_or(AleaError::ThresholdOverflow {
                characteristic: self.characteristic,
                skill: self.skill,
            })?;
        positive(derived)
    }
}

fn positive(threshold: i64) -> AleaResult<i64> {
    if threshold > 0 {
        Ok(threshold)
    } else {
        Err(AleaError::InvalidThreshold(threshold))
    }
}

/// A fully resolved set of modifiers for one ALEA check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Composition {
    /// The threshold the final roll is classified against.
    pub threshold: i64,
    /// Difficulty added to the roll.
    pub difficulty: Difficulty,
    /// Status malus added to the roll.
    pub status: StatusMalus,
}

impl Composition {
    /// Total added to the roll, or `None` when incapacitated.
    pub fn roll_modifier(&self) -> Option<i64> {
        self.status.penalty().map(|p| p + self.difficulty.modifier)
    }
}

/// Resolve the threshold and gather the roll modifiers.
pub fn compose(
    inputs: &ThresholdInputs,
    difficulty: Difficulty,
    status: &StatusInputs,
) -> AleaResult<Composition> {
    Ok(Composition {
        threshold: inputs.resolve()?,
        difficulty,
        status: status.malus(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_threshold_wins() {
        let inputs = ThresholdInputs {
            threshold: 65,
            characteristic: 30,
            skill: 10,
            specialization: 9,
        };
        assert_eq!(inputs.resolve().unwrap(), 65);
    }

    #[test]
    fn derived_threshold() {
        assert_eq!(ThresholdInputs::derived(30, 25, 0).resolve().unwrap(), 55);
        assert_eq!(ThresholdInputs::derived(30, 25, 1).resolve().unwrap(), 75);
        assert_eq!(ThresholdInputs::derived(30, 25, 2).resolve().unwrap(), 85);
    }

    #[test]
    fn specialization_alone_is_enough() {
        assert_eq!(ThresholdInputs::derived(0, 0, 2).resolve().unwrap(), 30);
    }

    #[test]
    fn bad_specialization() {
        assert!(matches!(
            ThresholdInputs::derived(30, 25, 3).resolve(),
            Err(AleaError::InvalidSpecialization(3))
        ));
    }

    #[test]
    fn nothing_supplied() {
        assert!(ThresholdInputs::default().is_empty());
        assert!(matches!(
            ThresholdInputs::default().resolve(),
            Err(AleaError::NoThreshold)
        ));
    }

    #[test]
    fn negative_threshold() {
        assert!(matches!(
            ThresholdInputs::direct(-10).resolve(),
            Err(AleaError::InvalidThreshold(-10))
        ));
        assert!(matches!(
            ThresholdInputs::derived(-40, 10, 0).resolve(),
            Err(AleaError::InvalidThreshold(-30))
        ));
    }

    #[test]
    fn derived_overflow_is_rejected() {
        let err = ThresholdInputs::derived(i64::MAX, 1, 0).resolve().unwrap_err();
        assert!(matches!(err, AleaError::ThresholdOverflow { .. }));
        assert_eq!(err.kind(), crate::error::ErrorKind::Input);
        assert!(matches!(
            ThresholdInputs::derived(i64::MAX - 10, 0, 1).resolve(),
            Err(AleaError::ThresholdOverflow { .. })
        ));
        assert!(matches!(
            ThresholdInputs::derived(i64::MIN, -1, 0).resolve(),
            Err(AleaError::ThresholdOverflow { .. })
        ));
    }

    #[test]
    fn compose_collects_modifiers() {
        let status = StatusInputs {
            wounds: 1,
            ..StatusInputs::default()
        };
        let difficulty = Difficulty::parse("H").unwrap();
        let c = compose(&ThresholdInputs::direct(70), difficulty, &status).unwrap();
        assert_eq!(c.threshold, 70);
        assert_eq!(c.status, StatusMalus::Penalty(20));
        assert_eq!(c.roll_modifier(), Some(40));
    }

    #[test]
    fn compose_incapacitated() {
        let status = StatusInputs {
            stun: 5,
            ..StatusInputs::default()
        };
        let c = compose(&ThresholdInputs::direct(70), Difficulty::default(), &status).unwrap();
        assert_eq!(c.roll_modifier(), None);
    }
}
