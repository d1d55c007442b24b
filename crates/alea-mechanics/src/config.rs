//! Engine configuration, read once at startup.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::AleaResult;
use crate::table::ThresholdTable;

/// Where the threshold table comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// The built-in standard table.
    #[default]
    Standard,
    /// A delimited-text or JSON file.
    Path(PathBuf),
}

/// Configuration for an engine and its random source.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Threshold table to load.
    pub table: TableSource,
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Load the table from a file instead of the standard one.
    pub fn with_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.table = TableSource::Path(path.into());
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the configured threshold table.
    pub fn load_table(&self) -> AleaResult<ThresholdTable> {
        match &self.table {
            TableSource::Standard => Ok(ThresholdTable::standard()),
            TableSource::Path(path) => ThresholdTable::from_path(path),
        }
    }

    /// Build the random source.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.table, TableSource::Standard);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.load_table().unwrap(), ThresholdTable::standard());
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(123)
            .with_table_path("levels.csv");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.table, TableSource::Path(PathBuf::from("levels.csv")));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = EngineConfig::default().with_seed(7);
        let a: u32 = cfg.rng().random();
        let b: u32 = cfg.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_table_file() {
        let cfg = EngineConfig::default().with_table_path("/definitely/not/here.csv");
        let err = cfg.load_table().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }
}
