//! The standard ALEA threshold table.
//!
//! Produces the same [`ThresholdTable`] that loading `data/thresholds.csv`
//! would, without requiring a file.

use super::{SENTINEL_PERCENT, ThresholdEntry, ThresholdTable};

impl ThresholdTable {
    /// Four degrees of success and four of failure.
    ///
    /// | Level | Up to |
    /// |-------|-------|
    /// | S4 Critical Success | 10% |
    /// | S3 Full Success | 50% |
    /// | S2 Partial Success | 90% |
    /// | S1 Minimal Success | 100% |
    /// | F1 Minimal Failure | 110% |
    /// | F2 Partial Failure | 150% |
    /// | F3 Full Failure | 190% |
    /// | F4 Critical Failure | beyond |
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ThresholdEntry::from_percent(10, "Critical Success", "S4"),
                ThresholdEntry::from_percent(50, "Full Success", "S3"),
                ThresholdEntry::from_percent(90, "Partial Success", "S2"),
                ThresholdEntry::from_percent(100, "Minimal Success", "S1"),
                ThresholdEntry::from_percent(110, "Minimal Failure", "F1"),
                ThresholdEntry::from_percent(150, "Partial Failure", "F2"),
                ThresholdEntry::from_percent(190, "Full Failure", "F3"),
                ThresholdEntry::from_percent(SENTINEL_PERCENT, "Critical Failure", "F4"),
            ],
        }
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}
