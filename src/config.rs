// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{DEFAULT_DEVICE_PATH, MATCH_KEY};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Persisted virtual camera settings
///
/// These three fields are the whole schema of the settings group. Missing
/// fields take their defaults, and values are kept as written: normalization
/// happens when the settings model loads them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualCameraConfig {
    /// Virtual camera output enabled (disabled by default)
    pub enabled: bool,
    /// v4l2loopback device node to write to
    pub device_path: String,
    /// Preset key, custom "WxH" key, or "match"
    pub resolution_key: String,
}

impl Default for VirtualCameraConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            device_path: DEFAULT_DEVICE_PATH.to_string(),
            resolution_key: MATCH_KEY.to_string(),
        }
    }
}

impl VirtualCameraConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a pretty-printed JSON document
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
