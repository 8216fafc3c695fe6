//! In-memory profile store.

use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationInput;

use super::{ProfileStore, Profiles};

/// A profile store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<Profiles>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> EngineError {
        EngineError::ProfileStore {
            path: "<memory>".to_string(),
            message: "profile lock poisoned".to_string(),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn list(&self) -> EngineResult<Profiles> {
        let profiles = self.profiles.read().map_err(|_| Self::poisoned())?;
        Ok(profiles.clone())
    }

    fn get(&self, name: &str) -> EngineResult<Option<CompensationInput>> {
        let profiles = self.profiles.read().map_err(|_| Self::poisoned())?;
        Ok(profiles.get(name).cloned())
    }

    fn upsert(&self, name: &str, profile: CompensationInput) -> EngineResult<()> {
        let mut profiles = self.profiles.write().map_err(|_| Self::poisoned())?;
        profiles.insert(name.to_string(), profile);
        Ok(())
    }

    fn delete(&self, name: &str) -> EngineResult<bool> {
        let mut profiles = self.profiles.write().map_err(|_| Self::poisoned())?;
        Ok(profiles.remove(name).is_some())
    }
}
