//! Difficulty levels and their encodings.
//!
//! A difficulty can be written four ways, tried in this order:
//!
//! | Encoding | Example | Modifier |
//! |----------|---------|----------|
//! | numeric | `-40`, `20` | as written; multiples of 20 within ±60 |
//! | narrative short | `VH` | +40 |
//! | narrative long | `very hard` | +40 |
//! | narrative scaled | `2` | 2 × 20 = +40 |
//!
//! Numeric wins where the two number forms overlap, which only happens
//! for `0`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AleaError, AleaResult};

/// Modifier change per narrative step.
pub const DIFFICULTY_STEP: i64 = 20;

/// Largest narrative step in either direction.
pub const MAX_NARRATIVE: i64 = 3;

/// Narrative steps from -3 to +3 with their short and long names.
const NARRATIVE: [(i64, &str, &str); 7] = [
    (-3, "TR", "trivial"),
    (-2, "E", "easy"),
    (-1, "R", "routine"),
    (0, "N", "normal"),
    (1, "H", "hard"),
    (2, "VH", "very hard"),
    (3, "X", "extreme"),
];

/// How a difficulty was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyEncoding {
    /// A raw modifier such as `-20`.
    Numeric,
    /// A short code such as `H`.
    NarrativeShort,
    /// A word such as `hard`.
    NarrativeLong,
    /// A step number such as `1`, scaled by 20.
    NarrativeScaled,
}

type Parser = fn(&str) -> Option<i64>;

const PARSERS: [(DifficultyEncoding, Parser); 4] = [
    (DifficultyEncoding::Numeric, parse_numeric),
    (DifficultyEncoding::NarrativeShort, parse_short),
    (DifficultyEncoding::NarrativeLong, parse_long),
    (DifficultyEncoding::NarrativeScaled, parse_scaled),
];

/// A normalized difficulty modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// The modifier, a multiple of 20 within ±60.
    pub modifier: i64,
    /// The form it was parsed from.
    pub encoding: DifficultyEncoding,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            modifier: 0,
            encoding: DifficultyEncoding::Numeric,
        }
    }
}

impl Difficulty {
    /// Parse any supported encoding. Blank input means no modifier.
    pub fn parse(input: &str) -> AleaResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }
        PARSERS
            .iter()
            .find_map(|(encoding, parse)| {
                parse(input).map(|modifier| Self {
                    modifier,
                    encoding: *encoding,
                })
            })
            .ok_or_else(|| AleaError::UnknownDifficulty(input.to_string()))
    }

    /// Build from a raw modifier, rejecting values off the 20-step grid.
    pub fn from_modifier(modifier: i64) -> AleaResult<Self> {
        if is_on_grid(modifier) {
            Ok(Self {
                modifier,
                encoding: DifficultyEncoding::Numeric,
            })
        } else {
            Err(AleaError::UnknownDifficulty(modifier.to_string()))
        }
    }

    /// The narrative step, -3 to +3.
    pub fn step(&self) -> i64 {
        self.modifier / DIFFICULTY_STEP
    }

    /// The long narrative name, e.g. "very hard".
    pub fn name(&self) -> &'static str {
        NARRATIVE
            .iter()
            .find(|(step, _, _)| *step == self.step())
            .map_or("normal", |(_, _, long)| *long)
    }
}

impl FromStr for Difficulty {
    type Err = AleaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+} ({})", self.modifier, self.name())
    }
}

fn is_on_grid(modifier: i64) -> bool {
    let limit = MAX_NARRATIVE * DIFFICULTY_STEP;
    (-limit..=limit).contains(&modifier) && modifier % DIFFICULTY_STEP == 0
}

fn parse_numeric(input: &str) -> Option<i64> {
    input.parse::<i64>().ok().filter(|m| is_on_grid(*m))
}

fn parse_short(input: &str) -> Option<i64> {
    let code = input.to_uppercase();
    NARRATIVE
        .iter()
        .find(|(_, short, _)| *short == code)
        .map(|(step, _, _)| step * DIFFICULTY_STEP)
}

fn parse_long(input: &str) -> Option<i64> {
    let word = input
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    NARRATIVE
        .iter()
        .find(|(_, _, long)| *long == word)
        .map(|(step, _, _)| step * DIFFICULTY_STEP)
}

fn parse_scaled(input: &str) -> Option<i64> {
    input
        .parse::<i64>()
        .ok()
        .filter(|step| (-MAX_NARRATIVE..=MAX_NARRATIVE).contains(step))
        .map(|step| step * DIFFICULTY_STEP)
}
