//! Tiny JSON-file persistence for UI preference flags, the equivalent of the
//! browser's local storage. Deliberately not a storage layer: two flags and a
//! blob, written whole on every save.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardPrefs {
    #[serde(default)]
    pub banner_dismissed: bool,

    /// The "pick up where you left off" task card, stored as an opaque blob
    /// because the task shapes change with every release.
    #[serde(default)]
    pub active_task: Option<serde_json::Value>,
}

impl DashboardPrefs {
    /// Loads saved prefs, falling back to defaults when the file has never
    /// been written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
