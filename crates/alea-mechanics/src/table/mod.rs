//! Threshold tables: the ordered degrees of success and failure.
//!
//! A [`ThresholdTable`] lists cutoffs as fractions of the threshold value,
//! ascending. Every entry but the last is bounded above by
//! `round(threshold * cutoff_ratio)`. The last entry is the open-ended
//! sentinel: it catches every value beyond the previous boundary, whatever
//! its own cutoff says.
//!
//! Tables are built once at startup with [`ThresholdTable::from_path`],
//! [`ThresholdTable::parse`] or [`ThresholdTable::standard`] and are
//! read-only afterwards.

pub mod loader;
pub mod preset;

use serde::{Deserialize, Serialize};

use crate::error::{AleaError, AleaResult};
use crate::resolution::RangeText;

/// Largest cutoff accepted by the loader, in percent. Also marks the sentinel.
pub const SENTINEL_PERCENT: u32 = 999;

/// One degree of success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    /// Upper bound as a fraction of the threshold (0.10 for 10%).
    pub cutoff_ratio: f64,
    /// Display label, e.g. "Full Success".
    pub label: String,
    /// Short code, e.g. "S3".
    pub acronym: String,
}

impl ThresholdEntry {
    /// Create an entry from a whole-number percentage.
    pub fn from_percent(
        percent: u32,
        label: impl Into<String>,
        acronym: impl Into<String>,
    ) -> Self {
        Self {
            cutoff_ratio: f64::from(percent) / 100.0,
            label: label.into(),
            acronym: acronym.into(),
        }
    }

    /// The cutoff as a whole-number percentage.
    pub fn percent(&self) -> u32 {
        (self.cutoff_ratio * 100.0).round() as u32
    }

    /// The upper boundary of this entry for a given threshold.
    pub fn boundary(&self, threshold: i64) -> i64 {
        (threshold as f64 * self.cutoff_ratio).round() as i64
    }
}

/// An ordered, non-empty list of threshold entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    entries: Vec<ThresholdEntry>,
}

impl ThresholdTable {
    /// Build a table from entries, sorting them ascending by cutoff.
    ///
    /// The sort is stable, so entries with equal cutoffs keep their order.
    pub fn new(mut entries: Vec<ThresholdEntry>) -> AleaResult<Self> {
        if entries.is_empty() {
            return Err(AleaError::NoValidRows);
        }
        entries.sort_by(|a, b| a.cutoff_ratio.total_cmp(&b.cutoff_ratio));
        Ok(Self { entries })
    }

    /// All entries, ascending.
    pub fn entries(&self) -> &[ThresholdEntry] {
        &self.entries
    }

    /// Number of entries, sentinel included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a table holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`.
    pub fn get(&self, index: usize) -> Option<&ThresholdEntry> {
        self.entries.get(index)
    }

    /// The most successful entry.
    pub fn first(&self) -> &ThresholdEntry {
        &self.entries[0]
    }

    /// Index of the open-ended last entry.
    pub fn sentinel_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// The open-ended last entry.
    pub fn sentinel(&self) -> &ThresholdEntry {
        &self.entries[self.sentinel_index()]
    }

    /// Entries that carry a numeric boundary (everything but the sentinel).
    pub fn bounded(&self) -> &[ThresholdEntry] {
        &self.entries[..self.sentinel_index()]
    }

    /// Upper boundaries of the bounded entries for a given threshold.
    pub fn boundaries(&self, threshold: i64) -> Vec<i64> {
        self.bounded().iter().map(|e| e.boundary(threshold)).collect()
    }

    /// Percentage view of the table, independent of any threshold.
    pub fn levels(&self) -> Vec<LevelSummary> {
        let percents: Vec<i64> = self
            .bounded()
            .iter()
            .map(|e| i64::from(e.percent()))
            .collect();
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| LevelSummary {
                index,
                label: entry.label.clone(),
                acronym: entry.acronym.clone(),
                cutoff_percent: percents.get(index).map(|p| *p as u32),
                range: RangeText::for_index(&percents, index),
            })
            .collect()
    }
}

/// One row of the percentage view of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    /// Position in the table, 0 = most successful.
    pub index: usize,
    /// Display label.
    pub label: String,
    /// Short code.
    pub acronym: String,
    /// Upper bound in percent, `None` for the sentinel.
    pub cutoff_percent: Option<u32>,
    /// The band this level covers, in percent of the threshold.
    pub range: RangeText,
}
