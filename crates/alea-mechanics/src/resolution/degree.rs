//! Degree-table classification (ALEA).
//!
//! Each bounded entry of the table covers values up to and including
//! `round(threshold * cutoff_ratio)`. A value exactly on a boundary belongs
//! to the more successful level. Anything past the last boundary falls into
//! the sentinel.

use serde::{Serialize, Serializer};

use crate::error::{AleaError, AleaResult};
use crate::table::ThresholdTable;

/// The band of values a level covers, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeText {
    /// The table has a single level, which covers everything.
    Any,
    /// The first level: up to and including `high`.
    Below {
        /// Upper boundary.
        high: i64,
    },
    /// A middle level: `low..=high`.
    Between {
        /// Previous boundary plus one.
        low: i64,
        /// Upper boundary.
        high: i64,
    },
    /// The sentinel: past `low`.
    Above {
        /// The last boundary.
        low: i64,
    },
}

impl RangeText {
    /// The range of the level at `index`, given the bounded levels' boundaries.
    pub fn for_index(boundaries: &[i64], index: usize) -> Self {
        match (boundaries.len(), index) {
            (0, _) => Self::Any,
            (_, 0) => Self::Below {
                high: boundaries[0],
            },
            (n, i) if i >= n => Self::Above {
                low: boundaries[n - 1],
            },
            (_, i) => Self::Between {
                low: boundaries[i - 1].saturating_add(1),
                high: boundaries[i],
            },
        }
    }

    /// Render with a unit after each number, e.g. `"%"`.
    pub fn with_unit(&self, unit: &str) -> String {
        match self {
            Self::Any => "any value".to_string(),
            Self::Below { high } => format!("less than {high}{unit}"),
            Self::Between { low, high } => format!("{low}{unit}–{high}{unit}"),
            Self::Above { low } => format!("more than {low}{unit}"),
        }
    }
}

impl std::fmt::Display for RangeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.with_unit(""))
    }
}

impl Serialize for RangeText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The level a final roll landed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Position in the table, 0 = most successful.
    pub index: usize,
    /// Display label.
    pub label: String,
    /// Short code.
    pub acronym: String,
    /// The range of values this level covers at the given threshold.
    pub range: RangeText,
}

impl Classification {
    fn at(table: &ThresholdTable, boundaries: &[i64], index: usize) -> Self {
        let entry = table.get(index).unwrap_or_else(|| table.sentinel());
        Self {
            index,
            label: entry.label.clone(),
            acronym: entry.acronym.clone(),
            range: RangeText::for_index(boundaries, index),
        }
    }

    /// The most successful level, regardless of the roll.
    pub fn best(table: &ThresholdTable, threshold: i64) -> Self {
        Self::at(table, &table.boundaries(threshold), 0)
    }

    /// The sentinel level, regardless of the roll.
    pub fn worst(table: &ThresholdTable, threshold: i64) -> Self {
        Self::at(table, &table.boundaries(threshold), table.sentinel_index())
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label, self.acronym, self.range)
    }
}

/// Index of the first boundary at or above `value`, or the sentinel index.
fn select(boundaries: &[i64], value: i64) -> usize {
    boundaries
        .iter()
        .position(|boundary| value <= *boundary)
        .unwrap_or(boundaries.len())
}

/// Classify a final roll against a threshold.
///
/// Fails with [`AleaError::InvalidThreshold`] when `threshold` is not
/// positive: every boundary would collapse to zero.
pub fn classify(
    final_roll: i64,
    threshold: i64,
    table: &ThresholdTable,
) -> AleaResult<Classification> {
    if threshold <= 0 {
        return Err(AleaError::InvalidThreshold(threshold));
    }
    let boundaries = table.boundaries(threshold);
    let index = select(&boundaries, final_roll);
    Ok(Classification::at(table, &boundaries, index))
}

/// One row of the verbose enumeration of a table at a given threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaledLevel {
    /// Position in the table.
    pub index: usize,
    /// Display label.
    pub label: String,
    /// Short code.
    pub acronym: String,
    /// Inclusive upper boundary, `None` for the sentinel.
    pub boundary: Option<i64>,
    /// The range of values this level covers.
    pub range: RangeText,
    /// Whether the classified roll landed here.
    pub selected: bool,
}

/// Enumerate every level of the table at a threshold, marking `selected`.
///
/// Uses the same boundaries as [`classify`], so the row marked for an index
/// carries the same range text a classification at that index reports.
pub fn scale(
    table: &ThresholdTable,
    threshold: i64,
    selected: Option<usize>,
) -> AleaResult<Vec<ScaledLevel>> {
    if threshold <= 0 {
        return Err(AleaError::InvalidThreshold(threshold));
    }
    let boundaries = table.boundaries(threshold);
    Ok(table
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| ScaledLevel {
            index,
            label: entry.label.clone(),
            acronym: entry.acronym.clone(),
            boundary: boundaries.get(index).copied(),
            range: RangeText::for_index(&boundaries, index),
            selected: selected == Some(index),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ThresholdEntry;

    fn standard() -> ThresholdTable {
        ThresholdTable::standard()
    }

    #[test]
    fn on_boundary_is_inclusive() {
        let c = classify(50, 100, &standard()).unwrap();
        assert_eq!(c.label, "Full Success");
        assert_eq!(c.acronym, "S3");
        assert_eq!(c.range, RangeText::Between { low: 11, high: 50 });
    }

    #[test]
    fn one_past_boundary_moves_down() {
        let c = classify(51, 100, &standard()).unwrap();
        assert_eq!(c.acronym, "S2");
    }

    #[test]
    fn first_level() {
        let c = classify(-37, 100, &standard()).unwrap();
        assert_eq!(c.index, 0);
        assert_eq!(c.range.to_string(), "less than 10");
    }

    #[test]
    fn past_every_boundary_is_sentinel() {
        let c = classify(191, 100, &standard()).unwrap();
        assert_eq!(c.label, "Critical Failure");
        assert_eq!(c.range.to_string(), "more than 190");
        // The sentinel's own 999% cutoff plays no part.
        let c = classify(5000, 100, &standard()).unwrap();
        assert_eq!(c.acronym, "F4");
    }

    #[test]
    fn scaled_boundaries_round() {
        // 45 * 0.1 = 4.5 rounds to 5; 45 * 1.1 = 49.5 rounds to 50.
        let table = standard();
        assert_eq!(classify(5, 45, &table).unwrap().acronym, "S4");
        assert_eq!(classify(50, 45, &table).unwrap().acronym, "F1");
    }

    #[test]
    fn zero_threshold_rejected() {
        assert!(matches!(
            classify(10, 0, &standard()),
            Err(AleaError::InvalidThreshold(0))
        ));
    }

    #[test]
    fn single_level_table() {
        let table =
            ThresholdTable::new(vec![ThresholdEntry::from_percent(100, "Done", "D")]).unwrap();
        let c = classify(-500, 40, &table).unwrap();
        assert_eq!(c.index, 0);
        assert_eq!(c.range, RangeText::Any);
        assert_eq!(c.range.to_string(), "any value");
    }

    #[test]
    fn range_text_forms() {
        let b = [10, 50, 90];
        assert_eq!(RangeText::for_index(&b, 0).to_string(), "less than 10");
        assert_eq!(RangeText::for_index(&b, 1).to_string(), "11–50");
        assert_eq!(RangeText::for_index(&b, 2).to_string(), "51–90");
        assert_eq!(RangeText::for_index(&b, 3).to_string(), "more than 90");
        assert_eq!(RangeText::for_index(&b, 1).with_unit("%"), "11%–50%");
    }

    #[test]
    fn scale_matches_classify() {
        let table = standard();
        let c = classify(95, 80, &table).unwrap();
        let rows = scale(&table, 80, Some(c.index)).unwrap();
        assert_eq!(rows.len(), 8);
        let marked: Vec<_> = rows.iter().filter(|r| r.selected).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].range, c.range);
        assert_eq!(marked[0].acronym, c.acronym);
        assert_eq!(rows[7].boundary, None);
        assert_eq!(rows[0].boundary, Some(8));
    }

    #[test]
    fn best_and_worst() {
        let table = standard();
        assert_eq!(Classification::best(&table, 60).acronym, "S4");
        assert_eq!(Classification::worst(&table, 60).acronym, "F4");
        assert_eq!(
            Classification::worst(&table, 60).range.to_string(),
            "more than 114"
        );
    }

    #[test]
    fn range_serializes_as_text() {
        let json = serde_json::to_string(&RangeText::Above { low: 190 }).unwrap();
        assert_eq!(json, "\"more than 190\"");
    }
}
