// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Device path used when the configured path is empty or whitespace
pub const DEFAULT_DEVICE_PATH: &str = "/dev/video42";

/// Directory prefix of a v4l2 video node, followed by its index
pub const VIDEO_DEVICE_PREFIX: &str = "/dev/video";

/// Device index suggested for the setup command when the path carries none
pub const FALLBACK_VIDEO_NR: &str = "42";

/// Card label the v4l2loopback device is created with
pub const CARD_LABEL: &str = "OBSBOT Virtual Camera";

/// Resolution key meaning "use the preview resolution"
pub const MATCH_KEY: &str = "match";

/// Panel text
pub mod ui {
    /// Section header above the virtual camera controls
    pub const SECTION_HEADER: &str = "Virtual Camera";

    /// Label of the enable toggle
    pub const ENABLE_LABEL: &str = "Enable virtual camera output";

    /// Label next to the device path field
    pub const DEVICE_PATH_LABEL: &str = "Device path";

    /// Label next to the resolution selector
    pub const RESOLUTION_LABEL: &str = "Output resolution";

    /// Status shown until an availability check reports something else
    pub const DEFAULT_STATUS: &str =
        "Virtual camera support requires the v4l2loopback kernel module.";

    /// Hint below the resolution selector
    pub const RESOLUTION_HINT: &str =
        "Pick a fixed size to keep Zoom and other apps happy when you change preview quality.";

    /// Label of the sentinel preset
    pub const MATCH_LABEL: &str = "Match preview resolution";
}
