// SPDX-License-Identifier: GPL-3.0-only

//! Virtual camera output settings
//!
//! This library holds the settings model behind a v4l2loopback virtual camera
//! output panel: resolution presets and "WxH" keys, device path
//! normalization, the advisory setup command, and a model that keeps the
//! panel in sync with persisted configuration.
//!
//! # Architecture
//!
//! - [`virtual_camera`]: resolution catalog, device path policy and the settings model
//! - [`config`]: persisted settings schema
//! - [`constants`]: defaults and panel text
//! - [`errors`]: errors of the command-line front end
//!
//! # Example
//!
//! ```
//! use vcam_output::{OutputSettingsModel, VirtualCameraConfig};
//!
//! let mut model = OutputSettingsModel::new();
//! model.load(&VirtualCameraConfig {
//!     enabled: true,
//!     device_path: " /dev/video7 ".into(),
//!     resolution_key: "1280x720".into(),
//! });
//! assert_eq!(model.device_path(), "/dev/video7");
//! assert!(model.setup_command().contains("video_nr=7"));
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod virtual_camera;

// Re-export commonly used types
pub use config::VirtualCameraConfig;
pub use virtual_camera::{OutputSettingsEvent, OutputSettingsModel, Resolution};
