//! Contribution rate configuration.
//!
//! This module loads CPP and EI rate sets from YAML files, one file per
//! effective date, and selects the set in force for a given date or year.
//!
//! # Example
//!
//! ```no_run
//! use labour_cost_engine::config::RatesLoader;
//!
//! let loader = RatesLoader::load("./config/ontario").unwrap();
//! println!("Loaded rates for: {}", loader.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::RatesLoader;
pub use types::{CppRateConfig, EiRateConfig, JurisdictionMetadata, RateConfig, RatesConfig};
