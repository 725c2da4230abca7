// SPDX-License-Identifier: GPL-3.0-only

//! Virtual camera output settings
//!
//! Everything the output panel needs besides its widgets:
//!
//! ```text
//!  resolution ── presets, "WxH" keys, labels
//!  device ────── path normalization, v4l2loopback setup command
//!        │
//!        ▼
//!  settings ──── OutputSettingsModel: state, notifications, bulk load
//! ```
//!
//! Nothing here touches the filesystem or the kernel module; loading the
//! driver and probing for it are left to the caller.

pub mod device;
pub mod resolution;
pub mod settings;

pub use resolution::{KeyResolution, Resolution, ResolutionPreset};
pub use settings::{
    OutputSettingsEvent, OutputSettingsModel, ResolutionEntry, StatusLine, SubscriptionId,
};
