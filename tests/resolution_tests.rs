// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the resolution catalog

use vcam_output::virtual_camera::resolution::{
    self, KeyResolution, Resolution, ResolutionPreset, find_key, label_for,
    label_for_custom_size, parse_key, size_for_key,
};

#[test]
fn test_preset_order() {
    let keys: Vec<&str> = resolution::presets().iter().map(|p| p.key).collect();
    assert_eq!(keys, ["match", "960x540", "1280x720", "1920x1080"]);
}

#[test]
fn test_presets_resolve_to_their_size() {
    for preset in resolution::presets().iter().filter(|p| !p.is_match()) {
        assert_eq!(
            size_for_key(preset.key),
            Some(Resolution::new(preset.width, preset.height)),
            "Preset {} should parse to its own size",
            preset.key
        );
    }
}

#[test]
fn test_match_keys_have_no_fixed_size() {
    for key in ["match", "", "MATCH", "Match"] {
        assert_eq!(parse_key(key), KeyResolution::MatchSource, "{key:?}");
        assert_eq!(size_for_key(key), None);
    }
}

#[test]
fn test_fixed_keys() {
    assert_eq!(size_for_key("1280x720"), Some(Resolution::new(1280, 720)));
    assert_eq!(
        size_for_key("1280X720"),
        Some(Resolution::new(1280, 720)),
        "Separator is case-insensitive"
    );
}

#[test]
fn test_unparseable_keys() {
    for key in ["abcxdef", "x720", "1280x-5", "1280", "1280x0", "-1280x720"] {
        assert_eq!(
            parse_key(key),
            KeyResolution::Unparseable,
            "{key:?} should be unparseable"
        );
        assert_eq!(size_for_key(key), None);
    }
}

#[test]
fn test_labels() {
    assert_eq!(label_for(resolution::match_preset()), "Match preview resolution");

    let full_hd = ResolutionPreset {
        key: "1920x1080",
        width: 1920,
        height: 1080,
    };
    assert_eq!(label_for(&full_hd), "1080p (1920 x 1080)");
}

#[test]
fn test_builtin_keys_found() {
    for preset in resolution::presets() {
        assert!(find_key(preset.key), "{} should be a built-in key", preset.key);
    }
    assert!(!find_key("MATCH"), "Lookup is case-sensitive");
    assert!(!find_key("1280X720"), "Lookup is case-sensitive");
}

#[test]
fn test_custom_key() {
    assert!(!find_key("640x480"));
    assert_eq!(size_for_key("640x480"), Some(Resolution::new(640, 480)));
    assert_eq!(label_for_custom_size(640, 480), "Custom (640 x 480)");
}
