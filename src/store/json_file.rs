//! JSON file profile store.
//!
//! All profiles live in one JSON object keyed by profile name:
//!
//! ```json
//! {
//!     "Alice": {
//!         "name": "Alice",
//!         "employment_type": "full_time",
//!         "base_wage": "20.00",
//!         ...
//!     }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationInput;

use super::{ProfileStore, Profiles};

/// A profile store backed by a single JSON file.
///
/// Every operation re-reads the file, so edits made by other processes are
/// picked up. Writes go to a sibling temporary file that is then renamed over
/// the original. A missing file is treated as an empty store.
#[derive(Debug)]
pub struct JsonFileProfileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileProfileStore {
    /// Creates a store reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl Into<String>) -> EngineError {
        EngineError::ProfileStore {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }

    fn read_profiles(&self) -> EngineResult<Profiles> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Profiles::new()),
            Err(e) => return Err(self.error(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Profiles::new());
        }

        serde_json::from_str(&content).map_err(|e| self.error(format!("invalid JSON: {}", e)))
    }

    fn write_profiles(&self, profiles: &Profiles) -> EngineResult<()> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        profiles
            .serialize(&mut serializer)
            .map_err(|e| self.error(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &buffer).map_err(|e| self.error(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.error(e.to_string()))?;

        debug!(path = %self.path.display(), profiles = profiles.len(), "Profiles written");
        Ok(())
    }

    fn with_lock<T>(&self, f: impl FnOnce() -> EngineResult<T>) -> EngineResult<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| self.error("profile lock poisoned"))?;
        f()
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn list(&self) -> EngineResult<Profiles> {
        self.with_lock(|| self.read_profiles())
    }

    fn get(&self, name: &str) -> EngineResult<Option<CompensationInput>> {
        self.with_lock(|| Ok(self.read_profiles()?.remove(name)))
    }

    fn upsert(&self, name: &str, profile: CompensationInput) -> EngineResult<()> {
        self.with_lock(|| {
            let mut profiles = self.read_profiles()?;
            profiles.insert(name.to_string(), profile);
            self.write_profiles(&profiles)?;
            info!(profile = %name, "Profile saved");
            Ok(())
        })
    }

    fn delete(&self, name: &str) -> EngineResult<bool> {
        self.with_lock(|| {
            let mut profiles = self.read_profiles()?;
            if profiles.remove(name).is_none() {
                return Ok(false);
            }
            self.write_profiles(&profiles)?;
            info!(profile = %name, "Profile deleted");
            Ok(true)
        })
    }
}
