// SPDX-License-Identifier: GPL-3.0-only

//! Output resolution presets and "WxH" key translation
//!
//! Resolution choices are persisted as plain strings: either the `"match"`
//! sentinel (follow the preview resolution) or `"<width>x<height>"`. Keys
//! that are not in the preset table are still usable when they parse.

use crate::constants::{MATCH_KEY, ui};
use std::fmt;

/// A fixed output frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A built-in resolution choice
///
/// The sentinel preset has a zero width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPreset {
    pub key: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ResolutionPreset {
    /// Whether this is the "match preview resolution" sentinel
    pub fn is_match(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Fixed size of this preset, `None` for the sentinel
    pub fn size(&self) -> Option<Resolution> {
        (!self.is_match()).then(|| Resolution::new(self.width, self.height))
    }

    /// Display label for this preset
    pub fn label(&self) -> String {
        label_for(self)
    }
}

/// Built-in presets in display order: sentinel first, then ascending by pixel count
pub const PRESETS: [ResolutionPreset; 4] = [
    ResolutionPreset {
        key: MATCH_KEY,
        width: 0,
        height: 0,
    },
    ResolutionPreset {
        key: "960x540",
        width: 960,
        height: 540,
    },
    ResolutionPreset {
        key: "1280x720",
        width: 1280,
        height: 720,
    },
    ResolutionPreset {
        key: "1920x1080",
        width: 1920,
        height: 1080,
    },
];

/// Outcome of interpreting a resolution key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResolution {
    /// Empty or "match": use the preview resolution
    MatchSource,
    /// A valid "WxH" key
    Fixed(Resolution),
    /// Anything else
    Unparseable,
}

impl KeyResolution {
    /// Fixed size, if any
    ///
    /// Both `MatchSource` and `Unparseable` mean "no usable fixed size".
    pub fn size(&self) -> Option<Resolution> {
        match self {
            KeyResolution::Fixed(size) => Some(*size),
            KeyResolution::MatchSource | KeyResolution::Unparseable => None,
        }
    }
}

/// The built-in presets
pub fn presets() -> &'static [ResolutionPreset] {
    &PRESETS
}

/// The sentinel preset
pub fn match_preset() -> &'static ResolutionPreset {
    &PRESETS[0]
}

/// Label for a preset, e.g. "1080p (1920 x 1080)"
pub fn label_for(preset: &ResolutionPreset) -> String {
    if preset.is_match() {
        return ui::MATCH_LABEL.to_string();
    }
    format!("{}p ({} x {})", preset.height, preset.width, preset.height)
}

/// Label for a size that is not in the preset table
pub fn label_for_custom_size(width: u32, height: u32) -> String {
    format!("Custom ({} x {})", width, height)
}

/// Key for an arbitrary fixed size
pub fn custom_key(width: u32, height: u32) -> String {
    Resolution::new(width, height).to_string()
}

/// Interpret a resolution key
///
/// The separator is matched case-insensitively and the key is split on its
/// first occurrence. Both halves must be strictly positive integers.
pub fn parse_key(key: &str) -> KeyResolution {
    if key.is_empty() || key.eq_ignore_ascii_case(MATCH_KEY) {
        return KeyResolution::MatchSource;
    }

    let normalized = key.trim().replace('X', "x");
    let Some((width, height)) = normalized.split_once('x') else {
        return KeyResolution::Unparseable;
    };

    match (parse_dimension(width), parse_dimension(height)) {
        (Some(width), Some(height)) => KeyResolution::Fixed(Resolution::new(width, height)),
        _ => KeyResolution::Unparseable,
    }
}

/// Fixed size for a key, `None` for "match" and for unparseable keys
pub fn size_for_key(key: &str) -> Option<Resolution> {
    parse_key(key).size()
}

fn parse_dimension(text: &str) -> Option<u32> {
    let value: i32 = text.trim().parse().ok()?;
    u32::try_from(value).ok().filter(|v| *v > 0)
}

/// Whether `key` is exactly a built-in preset key (case-sensitive)
pub fn find_key(key: &str) -> bool {
    find_preset(key).is_some()
}

/// Built-in preset with exactly this key
pub fn find_preset(key: &str) -> Option<&'static ResolutionPreset> {
    PRESETS.iter().find(|preset| preset.key == key)
}

/// Label for any key: preset label, custom label, or the sentinel label
pub fn label_for_key(key: &str) -> String {
    if let Some(preset) = find_preset(key) {
        return label_for(preset);
    }
    match parse_key(key) {
        KeyResolution::Fixed(size) => label_for_custom_size(size.width, size.height),
        KeyResolution::MatchSource | KeyResolution::Unparseable => label_for(match_preset()),
    }
}
