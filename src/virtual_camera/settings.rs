// SPDX-License-Identifier: GPL-3.0-only

//! Settings model behind the virtual camera output panel
//!
//! The panel reads its displayed state from [`OutputSettingsModel`] and
//! forwards user input to the interactive setters, each of which notifies
//! subscribers exactly once. Restoring persisted configuration goes through
//! [`OutputSettingsModel::load`], which builds the complete next state first
//! and then swaps it in, so no notification can be raised from a load.

use super::device;
use super::resolution::{self, KeyResolution, Resolution};
use crate::config::VirtualCameraConfig;
use crate::constants::ui;
use std::fmt;
use tracing::{debug, info, warn};

/// Change notifications raised by user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSettingsEvent {
    /// Enable toggle changed
    VirtualCameraToggled(bool),
    /// Device path field edited; read the new value back from the model
    DevicePathEdited,
    /// Resolution selector changed
    ResolutionChanged { index: usize, key: String },
}

/// One item of the resolution selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEntry {
    pub key: String,
    pub label: String,
    /// Display-only entry for a loaded key outside the preset table
    pub custom: bool,
}

/// Status text reported by the availability checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    /// Colour hint, passed through verbatim
    pub color: Option<String>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: ui::DEFAULT_STATUS.to_string(),
            color: None,
        }
    }
}

/// Handle returned by [`OutputSettingsModel::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&OutputSettingsModel, &OutputSettingsEvent)>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SettingsState {
    enabled: bool,
    /// Device path as typed; normalized on read
    device_path: String,
    entries: Vec<ResolutionEntry>,
    selected: usize,
}

impl SettingsState {
    fn preset_entries() -> Vec<ResolutionEntry> {
        resolution::presets()
            .iter()
            .map(|preset| ResolutionEntry {
                key: preset.key.to_string(),
                label: preset.label(),
                custom: false,
            })
            .collect()
    }

    /// Index of the sentinel entry, which is always present
    fn match_index(entries: &[ResolutionEntry]) -> usize {
        let match_key = resolution::match_preset().key;
        entries
            .iter()
            .position(|entry| entry.key == match_key)
            .unwrap_or_default()
    }

    /// Build the complete state described by a configuration
    fn from_config(config: &VirtualCameraConfig) -> Self {
        let mut entries = Self::preset_entries();
        let key = config.resolution_key.as_str();

        let selected = match entries.iter().position(|entry| entry.key == key) {
            Some(index) => index,
            None => match resolution::parse_key(key) {
                KeyResolution::Fixed(size) => {
                    entries.push(ResolutionEntry {
                        key: key.to_string(),
                        label: resolution::label_for_custom_size(size.width, size.height),
                        custom: true,
                    });
                    entries.len() - 1
                }
                KeyResolution::MatchSource | KeyResolution::Unparseable => {
                    Self::match_index(&entries)
                }
            },
        };

        Self {
            enabled: config.enabled,
            device_path: config.device_path.clone(),
            entries,
            selected,
        }
    }

    fn selected_entry(&self) -> &ResolutionEntry {
        &self.entries[self.selected]
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        let entries = Self::preset_entries();
        let selected = Self::match_index(&entries);
        Self {
            enabled: false,
            device_path: String::new(),
            entries,
            selected,
        }
    }
}

/// Virtual camera output settings
///
/// Single-threaded: subscribers run synchronously inside the setter that
/// raised the event and receive the already-updated model to read back.
/// Repeating a setter with an unchanged value notifies again; there is no
/// de-duplication.
#[derive(Default)]
pub struct OutputSettingsModel {
    state: SettingsState,
    status: StatusLine,
    available: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for OutputSettingsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSettingsModel")
            .field("state", &self.state)
            .field("status", &self.status)
            .field("available", &self.available)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl OutputSettingsModel {
    /// Create a model with output disabled, an empty device field and "match" selected
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback for change notifications
    ///
    /// The callback gets read access to the model, so a payload-less event
    /// such as [`OutputSettingsEvent::DevicePathEdited`] can be followed by
    /// a read of the new value.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&OutputSettingsModel, &OutputSettingsEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn emit(&mut self, event: OutputSettingsEvent) {
        // Observers only get `&Self`, so none can be added or removed meanwhile
        let mut observers = std::mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer(self, &event);
        }
        self.observers = observers;
    }

    // =========================================================================
    // Interactive mutation
    // =========================================================================

    /// Enable toggle changed by the user
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        debug!(enabled, "Virtual camera toggled");
        self.emit(OutputSettingsEvent::VirtualCameraToggled(enabled));
    }

    /// Device path field edited by the user
    ///
    /// The text is stored as typed; [`device_path`](Self::device_path)
    /// normalizes it.
    pub fn set_device_path_from_user(&mut self, raw: impl Into<String>) {
        self.state.device_path = raw.into();
        debug!(path = %self.state.device_path, "Virtual camera device path edited");
        self.emit(OutputSettingsEvent::DevicePathEdited);
    }

    /// Resolution selector changed by the user
    ///
    /// Returns false and raises nothing if `index` is not an entry of
    /// [`resolution_entries`](Self::resolution_entries).
    pub fn set_resolution_from_user(&mut self, index: usize) -> bool {
        let Some(entry) = self.state.entries.get(index) else {
            warn!(
                index,
                entries = self.state.entries.len(),
                "Ignoring out-of-range resolution selection"
            );
            return false;
        };
        let key = entry.key.clone();

        self.state.selected = index;
        debug!(index, key = %key, "Virtual camera resolution changed");
        self.emit(OutputSettingsEvent::ResolutionChanged { index, key });
        true
    }

    /// Select the entry with exactly this key, as the user would
    pub fn select_resolution_key(&mut self, key: &str) -> bool {
        match self.state.entries.iter().position(|entry| entry.key == key) {
            Some(index) => self.set_resolution_from_user(index),
            None => {
                warn!(key, "No resolution entry with this key");
                false
            }
        }
    }

    // =========================================================================
    // Bulk load
    // =========================================================================

    /// Restore persisted settings without notifying subscribers
    ///
    /// A resolution key outside the preset table is kept as a custom entry
    /// when it parses, otherwise the sentinel is selected.
    pub fn load(&mut self, config: &VirtualCameraConfig) {
        let next = SettingsState::from_config(config);

        let selected = next.selected_entry();
        if resolution::parse_key(&config.resolution_key) == KeyResolution::Unparseable {
            warn!(
                key = %config.resolution_key,
                "Unusable virtual camera resolution, using preview resolution"
            );
        } else if selected.custom {
            info!(key = %selected.key, "Loaded custom virtual camera resolution");
        }

        self.state = next;
        info!(
            enabled = self.state.enabled,
            device = %self.device_path(),
            resolution = %self.resolution_key(),
            "Virtual camera settings loaded"
        );
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// Normalized device path, never empty
    pub fn device_path(&self) -> String {
        device::normalize(&self.state.device_path)
    }

    /// Device path exactly as last typed or loaded
    pub fn device_path_text(&self) -> &str {
        &self.state.device_path
    }

    /// Placeholder for an empty device path field
    pub fn device_path_placeholder(&self) -> &'static str {
        crate::constants::DEFAULT_DEVICE_PATH
    }

    /// Key of the selected resolution entry
    pub fn resolution_key(&self) -> &str {
        &self.state.selected_entry().key
    }

    /// Label of the selected resolution entry
    pub fn resolution_label(&self) -> &str {
        &self.state.selected_entry().label
    }

    /// Items of the resolution selector, presets first
    pub fn resolution_entries(&self) -> &[ResolutionEntry] {
        &self.state.entries
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected
    }

    /// Fixed size of the selected entry, `None` when following the preview
    pub fn selected_size(&self) -> Option<Resolution> {
        resolution::size_for_key(self.resolution_key())
    }

    /// Frame size the virtual camera should emit for a given preview size
    pub fn output_size(&self, preview: Resolution) -> Resolution {
        self.selected_size().unwrap_or(preview)
    }

    /// Advisory command for creating the configured loopback device
    pub fn setup_command(&self) -> String {
        device::setup_command_for(&self.device_path())
    }

    /// Normalized settings for the configuration store
    pub fn snapshot(&self) -> VirtualCameraConfig {
        VirtualCameraConfig {
            enabled: self.is_enabled(),
            device_path: self.device_path(),
            resolution_key: self.resolution_key().to_string(),
        }
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Show availability status; the text doubles as the toggle tooltip
    pub fn set_status(&mut self, text: impl Into<String>, color: impl Into<String>) {
        self.status = StatusLine {
            text: text.into(),
            color: Some(color.into()),
        };
        debug!(text = %self.status.text, "Virtual camera status updated");
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Tooltip of the enable toggle
    pub fn enable_tooltip(&self) -> &str {
        &self.status.text
    }

    /// Record whether the loopback driver is available
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
        debug!(available, "Virtual camera availability updated");
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}
