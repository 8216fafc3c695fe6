//! Configuration loading functionality.
//!
//! This module provides the [`RatesLoader`] type for loading contribution
//! rate sets from YAML files.

use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::ContributionRates;

use super::types::{JurisdictionMetadata, RateConfig, RatesConfig};

/// Loads and provides access to contribution rate configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ontario/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// └── rates/
///     ├── 2024-01-01.yaml # Rates effective from this date
///     └── 2025-01-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use labour_cost_engine::config::RatesLoader;
/// use chrono::NaiveDate;
///
/// let loader = RatesLoader::load("./config/ontario").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let rates = loader.rates_for_date(date).unwrap();
/// println!("CPP employer rate: {}%", rates.cpp_employer_pct);
/// ```
#[derive(Debug, Clone)]
pub struct RatesLoader {
    config: RatesConfig,
}

impl RatesLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `RatesLoader` on success, or an error if:
    /// - `jurisdiction.yaml` or the `rates` directory is missing
    /// - the `rates` directory holds no `.yaml` files
    /// - any file contains invalid YAML or is missing a required field
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        info!(
            jurisdiction = %metadata.code,
            rate_sets = rates.len(),
            path = %path.display(),
            "Loaded contribution rate configuration"
        );

        Ok(Self {
            config: RatesConfig::new(metadata, rates),
        })
    }

    /// Creates a loader holding only the built-in 2025 Ontario rates.
    pub fn builtin() -> Self {
        Self::from_rates(
            JurisdictionMetadata::ontario(),
            &[ContributionRates::ontario_2025()],
        )
    }

    /// Creates a loader from in-memory rate sets, each effective from
    /// January 1st of its year.
    pub fn from_rates(metadata: JurisdictionMetadata, rates: &[ContributionRates]) -> Self {
        let rates = rates.iter().map(RateConfig::from).collect();
        Self {
            config: RatesConfig::new(metadata, rates),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<RateConfig>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying rate configuration.
    pub fn config(&self) -> &RatesConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns every configured rate set, oldest first.
    pub fn rate_sets(&self) -> Vec<ContributionRates> {
        self.config
            .rates()
            .iter()
            .map(RateConfig::contribution_rates)
            .collect()
    }

    /// Gets the rate set in force on a given date.
    ///
    /// The most recent rate configuration effective on or before `date` is
    /// used.
    pub fn rates_for_date(&self, date: NaiveDate) -> EngineResult<ContributionRates> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .map(RateConfig::contribution_rates)
            .ok_or(EngineError::RatesNotFound { date })
    }

    /// Gets the rate set whose effective date falls in `year`.
    ///
    /// When a year has several rate files the latest one wins.
    pub fn rates_for_year(&self, year: i32) -> EngineResult<ContributionRates> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date.year() == year)
            .map(RateConfig::contribution_rates)
            .ok_or_else(|| EngineError::RatesNotFound {
                date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
            })
    }

    /// Returns the most recently effective rate set.
    pub fn latest(&self) -> EngineResult<ContributionRates> {
        self.config
            .rates()
            .last()
            .map(RateConfig::contribution_rates)
            .ok_or(EngineError::RatesNotFound {
                date: NaiveDate::MAX,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ontario"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = RatesLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.jurisdiction().code, "ON");
        assert_eq!(loader.jurisdiction().name, "Ontario");
        assert_eq!(loader.rate_sets().len(), 2);
    }

    #[test]
    fn test_loaded_2025_rates_match_builtin() {
        let loader = RatesLoader::load(config_path()).unwrap();
        let rates = loader.rates_for_year(2025).unwrap();
        assert_eq!(rates, ContributionRates::ontario_2025());
    }

    #[test]
    fn test_rates_for_date_picks_latest_effective() {
        let loader = RatesLoader::load(config_path()).unwrap();

        let mid_2024 = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let rates = loader.rates_for_date(mid_2024).unwrap();
        assert_eq!(rates.year, 2024);
        assert_eq!(rates.cpp_max_annual, dec("3867.50"));

        let mid_2025 = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(loader.rates_for_date(mid_2025).unwrap().year, 2025);
    }

    #[test]
    fn test_rates_not_found_for_date_before_effective() {
        let loader = RatesLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.rates_for_date(date) {
            Err(EngineError::RatesNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected RatesNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_rates_for_unknown_year() {
        let loader = RatesLoader::builtin();
        assert!(matches!(
            loader.rates_for_year(1999),
            Err(EngineError::RatesNotFound { .. })
        ));
    }

    #[test]
    fn test_latest_returns_newest_set() {
        let loader = RatesLoader::load(config_path()).unwrap();
        assert_eq!(loader.latest().unwrap().year, 2025);
    }

    #[test]
    fn test_builtin_loader() {
        let loader = RatesLoader::builtin();
        assert_eq!(loader.jurisdiction().code, "ON");
        assert_eq!(loader.latest().unwrap(), ContributionRates::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match RatesLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("jurisdiction.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_rates_directory_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("jurisdiction.yaml"),
            "code: \"ON\"\nname: Ontario\nsource_url: https://example.com\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("rates")).unwrap();

        match RatesLoader::load(dir.path()) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no rate files found"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_rate_file_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("jurisdiction.yaml"),
            "code: \"ON\"\nname: Ontario\nsource_url: https://example.com\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("rates")).unwrap();
        fs::write(
            dir.path().join("rates").join("2025-01-01.yaml"),
            "effective_date: 2025-01-01\ncpp: [not, a, map]\n",
        )
        .unwrap();

        match RatesLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("2025-01-01.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
