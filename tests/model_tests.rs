// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the output settings model

use std::cell::RefCell;
use std::rc::Rc;
use vcam_output::virtual_camera::resolution;
use vcam_output::{OutputSettingsEvent, OutputSettingsModel, Resolution, VirtualCameraConfig};

/// Model with a subscriber that records every event
fn recording_model() -> (OutputSettingsModel, Rc<RefCell<Vec<OutputSettingsEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut model = OutputSettingsModel::new();
    let sink = Rc::clone(&events);
    model.subscribe(move |_, event| sink.borrow_mut().push(event.clone()));
    (model, events)
}

fn config(enabled: bool, device_path: &str, resolution_key: &str) -> VirtualCameraConfig {
    VirtualCameraConfig {
        enabled,
        device_path: device_path.to_string(),
        resolution_key: resolution_key.to_string(),
    }
}

#[test]
fn test_new_model_defaults() {
    let model = OutputSettingsModel::new();
    assert!(!model.is_enabled());
    assert_eq!(model.device_path(), "/dev/video42");
    assert_eq!(model.device_path_text(), "");
    assert_eq!(model.resolution_key(), "match");
    assert_eq!(model.selected_index(), 0);
    assert_eq!(model.resolution_entries().len(), resolution::PRESETS.len());
}

#[test]
fn test_set_enabled_notifies_once_per_call() {
    let (mut model, events) = recording_model();

    model.set_enabled(true);
    assert_eq!(
        *events.borrow(),
        vec![OutputSettingsEvent::VirtualCameraToggled(true)]
    );

    // No de-duplication: the same value notifies again
    model.set_enabled(true);
    assert_eq!(events.borrow().len(), 2);
    assert!(model.is_enabled());
}

#[test]
fn test_device_path_edit_notifies_without_payload() {
    let (mut model, events) = recording_model();

    model.set_device_path_from_user("  /dev/video5 ");
    assert_eq!(*events.borrow(), vec![OutputSettingsEvent::DevicePathEdited]);
    assert_eq!(model.device_path(), "/dev/video5");
    assert_eq!(model.device_path_text(), "  /dev/video5 ");
    assert!(model.setup_command().contains("video_nr=5 "));
}

#[test]
fn test_subscriber_reads_back_edited_device_path() {
    let mut model = OutputSettingsModel::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    model.subscribe(move |model, event| {
        if *event == OutputSettingsEvent::DevicePathEdited {
            sink.borrow_mut()
                .push((model.device_path(), model.setup_command()));
        }
    });

    model.set_device_path_from_user(" /dev/video5 ");
    model.set_device_path_from_user("");

    assert_eq!(
        *seen.borrow(),
        vec![
            (
                "/dev/video5".to_string(),
                "sudo modprobe v4l2loopback video_nr=5 card_label=\"OBSBOT Virtual Camera\" exclusive_caps=1".to_string()
            ),
            (
                "/dev/video42".to_string(),
                "sudo modprobe v4l2loopback video_nr=42 card_label=\"OBSBOT Virtual Camera\" exclusive_caps=1".to_string()
            ),
        ]
    );
}

#[test]
fn test_subscribers_see_updated_state_and_stay_registered() {
    let mut model = OutputSettingsModel::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    model.subscribe(move |model, _| {
        sink.borrow_mut()
            .push((model.is_enabled(), model.resolution_key().to_string()));
    });

    model.set_enabled(true);
    model.set_resolution_from_user(3);

    assert_eq!(
        *seen.borrow(),
        vec![(true, "match".to_string()), (true, "1920x1080".to_string())]
    );
    assert!(format!("{:?}", model).contains("observers: 1"));
}

#[test]
fn test_cleared_device_path_reads_default() {
    let mut model = OutputSettingsModel::new();
    model.set_device_path_from_user("");
    assert_eq!(model.device_path(), "/dev/video42");
}

#[test]
fn test_unusual_device_path_is_kept() {
    let mut model = OutputSettingsModel::new();
    model.set_device_path_from_user("/dev/videoX");
    assert_eq!(model.device_path(), "/dev/videoX");
    assert!(model.setup_command().contains("video_nr=42 "));
}

#[test]
fn test_resolution_selection_notifies_index_and_key() {
    let (mut model, events) = recording_model();

    assert!(model.set_resolution_from_user(2));
    assert_eq!(
        *events.borrow(),
        vec![OutputSettingsEvent::ResolutionChanged {
            index: 2,
            key: "1280x720".to_string(),
        }]
    );
    assert_eq!(model.resolution_key(), "1280x720");
    assert_eq!(model.selected_size(), Some(Resolution::new(1280, 720)));
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let (mut model, events) = recording_model();

    assert!(!model.set_resolution_from_user(99));
    assert!(events.borrow().is_empty());
    assert_eq!(model.resolution_key(), "match");
}

#[test]
fn test_select_resolution_key() {
    let (mut model, events) = recording_model();

    assert!(model.select_resolution_key("1920x1080"));
    assert_eq!(model.selected_index(), 3);
    assert!(!model.select_resolution_key("640x480"));
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_load_raises_no_notifications() {
    let (mut model, events) = recording_model();

    model.load(&config(true, "/dev/video3", "1920x1080"));
    assert!(events.borrow().is_empty());
    assert!(model.is_enabled());
    assert_eq!(model.device_path(), "/dev/video3");
    assert_eq!(model.resolution_key(), "1920x1080");
}

#[test]
fn test_load_is_idempotent() {
    let (mut model, events) = recording_model();
    let state = config(true, " /dev/video8 ", "640x480");

    model.load(&state);
    let first = (
        model.snapshot(),
        model.resolution_entries().to_vec(),
        model.selected_index(),
    );
    model.load(&state);
    let second = (
        model.snapshot(),
        model.resolution_entries().to_vec(),
        model.selected_index(),
    );

    assert_eq!(first, second);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_load_custom_key_adds_display_entry() {
    let mut model = OutputSettingsModel::new();
    model.load(&config(false, "", "640x480"));

    assert_eq!(model.resolution_key(), "640x480");
    assert_eq!(model.resolution_label(), "Custom (640 x 480)");
    assert_eq!(model.selected_index(), resolution::PRESETS.len());
    assert_eq!(model.selected_size(), Some(Resolution::new(640, 480)));
    assert!(model.resolution_entries()[model.selected_index()].custom);
}

#[test]
fn test_load_invalid_key_falls_back_to_match() {
    for key in ["abcxdef", "x720", "1280x-5", "1280", "MATCH", ""] {
        let mut model = OutputSettingsModel::new();
        model.load(&config(false, "", key));
        assert_eq!(model.resolution_key(), "match", "{key:?} should fall back");
        assert_eq!(model.resolution_label(), "Match preview resolution");
        assert_eq!(model.resolution_entries().len(), resolution::PRESETS.len());
    }
}

#[test]
fn test_notifications_resume_after_failed_load() {
    let (mut model, events) = recording_model();

    model.load(&config(false, "", "not-a-size"));
    model.set_enabled(true);
    model.set_device_path_from_user("/dev/video1");
    model.set_resolution_from_user(1);

    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn test_user_can_select_loaded_custom_entry() {
    let (mut model, events) = recording_model();
    model.load(&config(false, "", "800x600"));
    model.set_resolution_from_user(0);
    let custom_index = model.resolution_entries().len() - 1;

    assert!(model.set_resolution_from_user(custom_index));
    assert_eq!(model.resolution_key(), "800x600");
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn test_output_size_follows_preview_for_match() {
    let mut model = OutputSettingsModel::new();
    let preview = Resolution::new(1600, 900);
    assert_eq!(model.output_size(preview), preview);

    model.set_resolution_from_user(1);
    assert_eq!(model.output_size(preview), Resolution::new(960, 540));
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let (mut model, events) = recording_model();
    let extra = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&extra);
    let id = model.subscribe(move |_, _| *counter.borrow_mut() += 1);

    model.set_enabled(false);
    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));
    model.set_enabled(true);

    assert_eq!(*extra.borrow(), 1);
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn test_status_is_stored_verbatim() {
    let mut model = OutputSettingsModel::new();
    model.set_status("v4l2loopback not loaded", "#e01b24");
    model.set_available(false);

    assert_eq!(model.status().text, "v4l2loopback not loaded");
    assert_eq!(model.status().color.as_deref(), Some("#e01b24"));
    assert_eq!(model.enable_tooltip(), "v4l2loopback not loaded");
    assert!(!model.is_available());

    model.set_available(true);
    assert!(model.is_available());
}
