//! Resolution engine for ALEA dice checks.
//!
//! Provides the open-roll percentile die, modifier composition (explicit or
//! derived thresholds, difficulty encodings, status maluses), configurable
//! threshold tables, degree-of-success classification with display ranges,
//! and the ALEA99 two-digit variant. Everything is synchronous and pure
//! apart from the caller-supplied random source.

pub mod alea99;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod modifiers;
pub mod resolution;
pub mod table;

pub use alea99::{Alea99Result, roll_alea99};
pub use config::{EngineConfig, TableSource};
pub use dice::{Die, OpenRoll, roll_d100};
pub use engine::{AleaCheck, AleaEngine, RollResult};
pub use error::{AleaError, AleaResult, ErrorKind};
pub use modifiers::{
    Composition, Difficulty, Specialization, StatusAxis, StatusInputs, StatusMalus,
    ThresholdInputs, compose,
};
pub use resolution::{Alea99Level, Classification, RangeText, ScaledLevel, classify};
pub use table::{LevelSummary, ThresholdEntry, ThresholdTable};
