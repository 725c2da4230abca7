// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for inspecting virtual camera settings
//!
//! This module provides command-line functionality for:
//! - Listing resolution presets
//! - Interpreting resolution keys
//! - Normalizing device paths
//! - Loading a settings document into the settings model

use std::path::PathBuf;
use tracing::info;
use vcam_output::VirtualCameraConfig;
use vcam_output::constants::ui;
use vcam_output::errors::AppResult;
use vcam_output::virtual_camera::resolution::{self, KeyResolution};
use vcam_output::virtual_camera::{OutputSettingsModel, device};

/// List all built-in presets
pub fn list_presets() -> Result<(), Box<dyn std::error::Error>> {
    println!("Resolution presets:");
    println!();
    for (index, preset) in resolution::presets().iter().enumerate() {
        println!("  [{}] {:<10} {}", index, preset.key, preset.label());
    }
    Ok(())
}

/// Show how a key is interpreted
pub fn resolve_key(key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = match resolution::parse_key(key) {
        KeyResolution::MatchSource => "match preview resolution".to_string(),
        KeyResolution::Fixed(size) if resolution::find_key(key) => format!("preset {}", size),
        KeyResolution::Fixed(size) => format!("custom {}", size),
        KeyResolution::Unparseable => "unparseable, falls back to preview resolution".to_string(),
    };

    println!("Key:    {:?}", key);
    println!("Result: {}", outcome);
    println!("Label:  {}", resolution::label_for_key(key));
    Ok(())
}

/// Show the normalized device path and its setup command
pub fn show_device(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let normalized = device::normalize(path);

    println!("Device: {}", normalized);
    match device::video_nr(&normalized) {
        Some(nr) => println!("Index:  {}", nr),
        None => println!("Index:  (not a /dev/video<N> path, using fallback)"),
    }
    println!();
    println!("{}", device::setup_command_for(&normalized));
    Ok(())
}

/// Load a settings document and print the panel state
pub fn load_settings(
    json: Option<String>,
    file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(json, file)?;

    let mut model = OutputSettingsModel::new();
    model.load(&config);

    let enabled_marker = if model.is_enabled() { 'x' } else { ' ' };
    let device_text = match model.device_path_text() {
        "" => format!("({})", model.device_path_placeholder()),
        text => text.to_string(),
    };

    println!("{}", ui::SECTION_HEADER);
    println!();
    println!("  [{}] {}", enabled_marker, ui::ENABLE_LABEL);
    println!("  {}: {}", ui::DEVICE_PATH_LABEL, device_text);
    println!("  {}", model.status().text);
    println!("  {}: {}", ui::RESOLUTION_LABEL, model.resolution_label());
    for (index, entry) in model.resolution_entries().iter().enumerate() {
        let marker = if index == model.selected_index() { '*' } else { ' ' };
        println!("    {} [{}] {}", marker, index, entry.label);
    }
    println!("  {}", ui::RESOLUTION_HINT);
    println!();
    println!("Device: {}", model.device_path());
    println!("Setup: {}", model.setup_command());
    println!();
    println!("{}", model.snapshot().to_json()?);
    Ok(())
}

fn read_config(json: Option<String>, file: Option<PathBuf>) -> AppResult<VirtualCameraConfig> {
    match (json, file) {
        (Some(json), _) => VirtualCameraConfig::from_json(&json),
        (None, Some(path)) => {
            info!(path = %path.display(), "Reading settings file");
            let json = std::fs::read_to_string(&path)?;
            VirtualCameraConfig::from_json(&json)
        }
        (None, None) => Ok(VirtualCameraConfig::default()),
    }
}
