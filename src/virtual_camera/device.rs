// SPDX-License-Identifier: GPL-3.0-only

//! Device path handling for the v4l2loopback output node

use crate::constants::{CARD_LABEL, DEFAULT_DEVICE_PATH, FALLBACK_VIDEO_NR, VIDEO_DEVICE_PREFIX};

/// Normalize a user-supplied device path
///
/// Surrounding whitespace is removed and an empty result falls back to the
/// default device. Any other string is accepted as-is.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_DEVICE_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Device index of a `/dev/video<N>` path
///
/// Returns `None` unless the whole trimmed path is the prefix followed by
/// one or more ASCII digits.
pub fn video_nr(path: &str) -> Option<&str> {
    let digits = path.trim().strip_prefix(VIDEO_DEVICE_PREFIX)?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Command an operator can run to create the loopback device for `path`
///
/// Advisory text only. Paths that don't name a numbered video node get the
/// fallback index.
pub fn setup_command_for(path: &str) -> String {
    let video_nr = video_nr(path).unwrap_or(FALLBACK_VIDEO_NR);
    format!(
        "sudo modprobe v4l2loopback video_nr={} card_label=\"{}\" exclusive_caps=1",
        video_nr, CARD_LABEL
    )
}
