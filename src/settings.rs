//! Add-on settings, persisted through the host settings store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::host::Host;
use crate::logger::log_warn;

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Fields written by other versions of the add-on survive a
    /// load/save round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            enabled: true,
            extra: Map::new(),
        }
    }
}

impl Settings {
    /// Load from the host store. Absent or unreadable data falls back to
    /// defaults; this is a fresh install, not an error.
    pub fn load(host: &dyn Host) -> Settings {
        match host.read_settings() {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                log_warn(
                    "settings",
                    format!("stored settings unreadable, using defaults: {}", e),
                );
                Settings::default()
            }),
            None => Settings::default(),
        }
    }

    /// Write the whole record back. The host debounces persistence.
    pub fn save(&self, host: &dyn Host) {
        match serde_json::to_value(self) {
            Ok(value) => host.write_settings(value),
            Err(e) => log_warn("settings", format!("failed to serialize settings: {}", e)),
        }
    }
}
