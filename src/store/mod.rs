//! Employee profile persistence.
//!
//! A profile is a saved [`CompensationInput`] keyed by name. The cost engine
//! never touches the store; callers load a profile, validate it and hand it
//! to the engine.

mod json_file;
mod memory;

use std::collections::BTreeMap;

use crate::error::EngineResult;
use crate::models::CompensationInput;

pub use json_file::JsonFileProfileStore;
pub use memory::InMemoryProfileStore;

/// All saved profiles, ordered by name.
pub type Profiles = BTreeMap<String, CompensationInput>;

/// A keyed store of employee profiles.
pub trait ProfileStore: Send + Sync {
    /// Returns every saved profile.
    fn list(&self) -> EngineResult<Profiles>;

    /// Returns the profile with the given name, if any.
    fn get(&self, name: &str) -> EngineResult<Option<CompensationInput>>;

    /// Inserts or replaces the profile stored under `name`.
    fn upsert(&self, name: &str, profile: CompensationInput) -> EngineResult<()>;

    /// Removes the profile stored under `name`.
    ///
    /// Returns `false` when no such profile existed.
    fn delete(&self, name: &str) -> EngineResult<bool>;
}
