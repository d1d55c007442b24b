//! Error types for the resolution engine.

use std::path::PathBuf;

/// Broad category of an [`AleaError`].
///
/// `Config` errors are fatal at startup; `Input` and `Validation` errors
/// reject a single request and leave the engine usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The threshold table is absent or malformed.
    Config,
    /// A request could not be interpreted.
    Input,
    /// A request value is outside its permitted range.
    Validation,
}

/// Errors that can occur while loading configuration or resolving a check.
#[derive(Debug, thiserror::Error)]
pub enum AleaError {
    /// The threshold table source does not exist.
    #[error("threshold table not found: {}", .0.display())]
    TableNotFound(PathBuf),

    /// The threshold table source could not be read.
    #[error("failed to read threshold table: {0}")]
    TableIo(#[from] std::io::Error),

    /// The threshold table source is not valid JSON.
    #[error("invalid threshold table JSON: {0}")]
    TableJson(#[from] serde_json::Error),

    /// The threshold table source has no content.
    #[error("threshold table is empty")]
    EmptyTable,

    /// Every row of the threshold table was rejected.
    #[error("threshold table has no valid rows")]
    NoValidRows,

    /// Neither an explicit threshold nor any sub-attribute was supplied.
    #[error("no threshold derivable: supply a threshold value or characteristic/skill")]
    NoThreshold,

    /// Characteristic, skill and specialization bonus do not fit in an `i64`.
    #[error("derived threshold overflows: characteristic {characteristic} + skill {skill}")]
    ThresholdOverflow {
        /// The characteristic supplied.
        characteristic: i64,
        /// The skill supplied.
        skill: i64,
    },

    /// An explicit threshold is not usable for classification.
    #[error("threshold must be positive, got {0}")]
    InvalidThreshold(i64),

    /// A specialization ordinal outside 0..=2.
    #[error("invalid specialization ordinal {0} (expected 0, 1 or 2)")]
    InvalidSpecialization(u8),

    /// A difficulty encoding that none of the parsers recognised.
    #[error("unrecognized difficulty: '{0}'")]
    UnknownDifficulty(String),

    /// An ALEA99 dice count outside 2..=5.
    #[error("invalid dice count {0} (expected 2 to 5)")]
    InvalidDiceCount(u32),

    /// A lucky number outside the d100 range.
    #[error("invalid lucky number {0} (expected 1 to 100)")]
    InvalidLuckyNumber(u32),

    /// A value outside its permitted range.
    #[error("{name} {value} out of range {min}..={max}")]
    OutOfRange {
        /// Which input was out of range.
        name: &'static str,
        /// The offending value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

impl AleaError {
    /// The taxonomy category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TableNotFound(_)
            | Self::TableIo(_)
            | Self::TableJson(_)
            | Self::EmptyTable
            | Self::NoValidRows => ErrorKind::Config,
            Self::NoThreshold
            | Self::ThresholdOverflow { .. }
            | Self::InvalidThreshold(_)
            | Self::InvalidSpecialization(_)
            | Self::UnknownDifficulty(_)
            | Self::InvalidDiceCount(_)
            | Self::InvalidLuckyNumber(_) => ErrorKind::Input,
            Self::OutOfRange { .. } => ErrorKind::Validation,
        }
    }
}

/// Convenience result type for engine operations.
pub type AleaResult<T> = Result<T, AleaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(AleaError::NoValidRows.kind(), ErrorKind::Config);
        assert_eq!(AleaError::InvalidSpecialization(3).kind(), ErrorKind::Input);
        assert_eq!(AleaError::InvalidDiceCount(6).kind(), ErrorKind::Input);
        let err = AleaError::OutOfRange {
            name: "threshold",
            value: 120,
            min: 0,
            max: 99,
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn display() {
        let err = AleaError::OutOfRange {
            name: "threshold",
            value: 120,
            min: 0,
            max: 99,
        };
        assert_eq!(err.to_string(), "threshold 120 out of range 0..=99");
        assert_eq!(
            AleaError::UnknownDifficulty("zz".to_string()).to_string(),
            "unrecognized difficulty: 'zz'"
        );
    }
}
