//! File-backed preference store.
//!
//! One small JSON file under the app data dir, read once at startup and
//! written through on every change. A missing or corrupt file yields an
//! empty store; preference persistence is never fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PortfolioError, PortfolioResult};

/// Key under which the selected theme name is stored
pub const THEME_KEY: &str = "portfolioTheme";

const PREFS_FILE: &str = "prefs.json";

/// String key-value preference store
pub struct Preferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Preferences {
    /// Load preferences from `<dir>/prefs.json`
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(PREFS_FILE);
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt preference file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    /// Read a preference value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a preference value and write the file through
    pub fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// The persisted theme name, if any
    pub fn theme(&self) -> Option<&str> {
        self.get(THEME_KEY)
    }

    /// Persist the chosen theme name
    pub fn set_theme(&mut self, name: &str) -> PortfolioResult<()> {
        self.set(THEME_KEY, name)
    }

    fn persist(&self) -> PortfolioResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| PortfolioError::Serialization(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
