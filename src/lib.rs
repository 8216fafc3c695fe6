//! Labour Cost Engine for Ontario Employers
//!
//! This crate computes the fully-loaded hourly and annual cost of an
//! employee: the blended wage, vacation pay, CPP and EI contributions (with
//! annual maximums), WSIB premiums and the employer's benefits and
//! allowances. It also provides a YAML rate configuration, a profile store,
//! CSV report export and an HTTP API over the engine.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
