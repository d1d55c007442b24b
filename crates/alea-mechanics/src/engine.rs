//! The resolution engine: one immutable threshold table, many checks.
//!
//! [`AleaEngine`] holds no mutable state. Build it once at startup and share
//! it by reference; every method takes its randomness from the caller.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::alea99::{self, Alea99Result};
use crate::config::EngineConfig;
use crate::dice::{OpenDirection, OpenRoll, roll_d100};
use crate::error::{AleaError, AleaResult};
use crate::modifiers::{Difficulty, StatusInputs, StatusMalus, ThresholdInputs, compose};
use crate::resolution::{self, Classification, ScaledLevel};
use crate::table::{LevelSummary, ThresholdTable};

/// Inputs for one ALEA check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AleaCheck {
    /// Threshold, given outright or derived.
    pub threshold: ThresholdInputs,
    /// Difficulty added to the roll.
    pub difficulty: Difficulty,
    /// Status ordinals.
    pub status: StatusInputs,
    /// First-die value that forces the best level.
    pub lucky_number: Option<u32>,
}

impl AleaCheck {
    /// A check against an explicit threshold.
    pub fn against(threshold: i64) -> Self {
        Self {
            threshold: ThresholdInputs::direct(threshold),
            ..Self::default()
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the status ordinals.
    pub fn with_status(mut self, status: StatusInputs) -> Self {
        self.status = status;
        self
    }

    /// Set the lucky number.
    pub fn with_lucky_number(mut self, lucky: u32) -> Self {
        self.lucky_number = Some(lucky);
        self
    }

    /// Returns true if no threshold, difficulty or status was given.
    ///
    /// Such a check is rolled but not classified.
    pub fn is_unparameterized(&self) -> bool {
        self.threshold.is_empty() && self.difficulty.modifier == 0 && self.status.is_empty()
    }
}

/// The outcome of an ALEA check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollResult {
    /// The first d100 draw.
    pub first_roll: u32,
    /// The open-roll second draw, if any.
    pub reroll: Option<u32>,
    /// Whether the reroll was subtracted or added.
    pub open_direction: Option<OpenDirection>,
    /// Whether the first draw triggered an open roll.
    pub is_open_roll: bool,
    /// First draw, ± reroll, + difficulty, + numeric status malus.
    pub final_roll: i64,
    /// The resolved threshold; 0 when unclassified.
    pub threshold_value: i64,
    /// Difficulty modifier applied to the roll.
    pub difficulty_level: i64,
    /// Status malus applied to the roll.
    pub status_malus: StatusMalus,
    /// Whether the lucky number came up.
    pub lucky: bool,
    /// The level reached, `None` for an unparameterized roll.
    pub classification: Option<Classification>,
}

impl RollResult {
    /// Label of the level reached.
    pub fn result_label(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.label.as_str())
    }

    /// Short code of the level reached.
    pub fn result_acronym(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.acronym.as_str())
    }

    fn base(roll: OpenRoll) -> Self {
        Self {
            first_roll: roll.first,
            reroll: roll.reroll.map(|r| r.value),
            open_direction: roll.reroll.map(|r| r.direction),
            is_open_roll: roll.is_open(),
            final_roll: roll.value(),
            threshold_value: 0,
            difficulty_level: 0,
            status_malus: StatusMalus::default(),
            lucky: false,
            classification: None,
        }
    }
}

/// Stateless resolver over an immutable threshold table.
#[derive(Debug, Clone, Default)]
pub struct AleaEngine {
    table: ThresholdTable,
}

impl AleaEngine {
    /// Create an engine over a table.
    pub fn new(table: ThresholdTable) -> Self {
        Self { table }
    }

    /// Create an engine from configuration, loading its table.
    pub fn from_config(config: &EngineConfig) -> AleaResult<Self> {
        Ok(Self::new(config.load_table()?))
    }

    /// The table this engine classifies against.
    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    /// Roll and resolve an ALEA check.
    pub fn roll_alea<R: Rng + ?Sized>(
        &self,
        check: &AleaCheck,
        rng: &mut R,
    ) -> AleaResult<RollResult> {
        let roll = roll_d100(rng);
        self.resolve(roll, check)
    }

    /// Resolve an ALEA check against an already-drawn roll.
    pub fn resolve(&self, roll: OpenRoll, check: &AleaCheck) -> AleaResult<RollResult> {
        if let Some(lucky) = check.lucky_number.filter(|n| !(1..=100).contains(n)) {
            return Err(AleaError::InvalidLuckyNumber(lucky));
        }
        let mut result = RollResult::base(roll);
        if check.is_unparameterized() {
            debug!(first = roll.first, final_roll = result.final_roll, "unclassified roll");
            return Ok(result);
        }

        let composition = compose(&check.threshold, check.difficulty, &check.status)?;
        let threshold = composition.threshold;
        result.threshold_value = threshold;
        result.difficulty_level = composition.difficulty.modifier;
        result.status_malus = composition.status;
        result.final_roll = roll.value()
            + composition.difficulty.modifier
            + composition.status.penalty().unwrap_or(0);
        result.lucky = check.lucky_number == Some(roll.first);

        let classification = if composition.status.is_incapacitated() {
            Classification::worst(&self.table, threshold)
        } else if result.lucky {
            Classification::best(&self.table, threshold)
        } else {
            resolution::classify(result.final_roll, threshold, &self.table)?
        };
        debug!(
            first = roll.first,
            final_roll = result.final_roll,
            threshold,
            level = %classification.acronym,
            "resolved check"
        );
        result.classification = Some(classification);
        Ok(result)
    }

    /// Roll and resolve an ALEA99 check.
    pub fn roll_alea99<R: Rng + ?Sized>(
        &self,
        dice_count: u32,
        threshold: i64,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> AleaResult<Alea99Result> {
        let result = alea99::roll_alea99(dice_count, threshold, difficulty, rng)?;
        debug!(
            rolls = ?result.all_rolls,
            value = result.result_value,
            level = result.acronym,
            "resolved alea99 check"
        );
        Ok(result)
    }

    /// Classify a final roll against a threshold.
    pub fn classify(&self, final_roll: i64, threshold: i64) -> AleaResult<Classification> {
        resolution::classify(final_roll, threshold, &self.table)
    }

    /// The table as percentages, independent of any threshold.
    pub fn format_success_levels(&self) -> Vec<LevelSummary> {
        self.table.levels()
    }

    /// Every level at a threshold, marking where `final_roll` lands.
    pub fn scaled_levels(
        &self,
        threshold: i64,
        final_roll: Option<i64>,
    ) -> AleaResult<Vec<ScaledLevel>> {
        let selected = final_roll
            .map(|value| self.classify(value, threshold).map(|c| c.index))
            .transpose()?;
        resolution::scale(&self.table, threshold, selected)
    }

    /// Every level at the result's threshold, marking the level it reached.
    ///
    /// Returns an empty list for an unclassified roll.
    pub fn result_levels(&self, result: &RollResult) -> AleaResult<Vec<ScaledLevel>> {
        match &result.classification {
            Some(c) => resolution::scale(&self.table, result.threshold_value, Some(c.index)),
            None => Ok(Vec::new()),
        }
    }
}
