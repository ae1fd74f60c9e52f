#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{character, save_tree, scenario_catalog};
use havensave_core::compare::compare_all;
use havensave_core::errors::HavenError;
use havensave_core::logging_facility::test_capture::init_test_capture;
use havensave_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use havensave_core::{compare, log_op_end, log_op_error, log_op_start, scan};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, archive = "20240601_1-savegames.zip");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("archive"), Some("20240601_1-savegames.zip"));
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = HavenError::ArchiveMissing {
        path: "old.zip".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field("err.code"), Some("ERR_ARCHIVE_MISSING"));
    assert_eq!(events[0].field("err.kind"), Some("ArchiveMissing"));
}

#[test]
fn test_scan_emits_start_and_end() {
    let capture = init_test_capture();
    let tree = save_tree("logged", vec![character("1", &[999], &[])]);

    scan(&tree, &scenario_catalog());

    capture.assert_event_exists("scan", EVENT_START);
    capture.assert_event_exists("scan", EVENT_END);
    let unknown_warnings = capture.count_events(|e| {
        e.fields.get("message").is_some_and(|m| m == "unknown identifier")
            && e.field("id_value") == Some("999")
    });
    assert!(unknown_warnings >= 1);
}

#[test]
fn test_compare_failure_logged_as_end_error() {
    let capture = init_test_capture();

    let _ = compare(None, None, 3);

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("compare")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err.code") == Some("ERR_PARSE_UNAVAILABLE")
    });
    assert!(errors >= 1);
}

#[test]
fn test_compare_all_walk_failure_logged_as_end_error() {
    let capture = init_test_capture();
    let dir = tempfile::tempdir().unwrap();

    let err = compare_all(&dir.path().join("no_such_saves"), None, 3).unwrap_err();
    assert!(matches!(err, HavenError::Io { .. }));

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("compare_all")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err.code") == Some("ERR_IO")
    });
    assert!(errors >= 1);
}
