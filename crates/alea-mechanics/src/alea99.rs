//! The ALEA99 variant: a pool of d10s read as a two-digit number.
//!
//! Roll 2 to 5 zero-based d10s and keep the two lowest. The smaller die is
//! always the tens digit. The difficulty is added to the threshold here,
//! the opposite polarity of the main mechanic.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::dice::{D10Pool, two_lowest};
use crate::error::{AleaError, AleaResult};
use crate::modifiers::Difficulty;
use crate::resolution::Alea99Level;

/// Permitted pool sizes.
pub const DICE_COUNT: RangeInclusive<u32> = 2..=5;

/// Permitted base thresholds.
pub const THRESHOLD_RANGE: RangeInclusive<i64> = 0..=99;

/// The outcome of an ALEA99 roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alea99Result {
    /// Number of dice rolled.
    pub dice_count: u32,
    /// Every die, in draw order.
    pub all_rolls: Vec<u32>,
    /// The two smallest dice, ascending.
    pub two_lowest: (u32, u32),
    /// `10 * two_lowest.0 + two_lowest.1`.
    pub result_value: u32,
    /// The base threshold.
    pub threshold_value: i64,
    /// The difficulty modifier.
    pub difficulty_level: i64,
    /// Threshold plus difficulty.
    pub effective_threshold: i64,
    /// Whether both digits match.
    pub digits_identical: bool,
    /// The classified level.
    pub success_level: Alea99Level,
    /// Short code of the level.
    pub acronym: &'static str,
}

impl Alea99Result {
    /// Classify an already-rolled pool.
    pub fn from_rolls(
        all_rolls: Vec<u32>,
        threshold: i64,
        difficulty: Difficulty,
    ) -> AleaResult<Self> {
        let dice_count = u32::try_from(all_rolls.len()).unwrap_or(u32::MAX);
        validate(dice_count, threshold)?;
        if let Some(bad) = all_rolls.iter().find(|v| **v > 9) {
            return Err(AleaError::OutOfRange {
                name: "die",
                value: i64::from(*bad),
                min: 0,
                max: 9,
            });
        }
        let (tens, units) = two_lowest(&all_rolls).ok_or(AleaError::InvalidDiceCount(dice_count))?;
        let result_value = tens * 10 + units;
        let effective_threshold = threshold + difficulty.modifier;
        let digits_identical = tens == units;
        let success_level =
            Alea99Level::decide(digits_identical, i64::from(result_value) <= effective_threshold);
        Ok(Self {
            dice_count,
            all_rolls,
            two_lowest: (tens, units),
            result_value,
            threshold_value: threshold,
            difficulty_level: difficulty.modifier,
            effective_threshold,
            digits_identical,
            success_level,
            acronym: success_level.acronym(),
        })
    }
}

impl std::fmt::Display for Alea99Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02} vs {}: {} ({})",
            self.result_value, self.effective_threshold, self.success_level, self.acronym
        )
    }
}

fn validate(dice_count: u32, threshold: i64) -> AleaResult<()> {
    if !DICE_COUNT.contains(&dice_count) {
        return Err(AleaError::InvalidDiceCount(dice_count));
    }
    if !THRESHOLD_RANGE.contains(&threshold) {
        return Err(AleaError::OutOfRange {
            name: "threshold",
            value: threshold,
            min: *THRESHOLD_RANGE.start(),
            max: *THRESHOLD_RANGE.end(),
        });
    }
    Ok(())
}

/// Roll and classify an ALEA99 check.
pub fn roll_alea99<R: Rng + ?Sized>(
    dice_count: u32,
    threshold: i64,
    difficulty: Difficulty,
    rng: &mut R,
) -> AleaResult<Alea99Result> {
    validate(dice_count, threshold)?;
    let rolls = D10Pool::new(dice_count).roll(rng);
    Alea99Result::from_rolls(rolls, threshold, difficulty)
}
