#![allow(clippy::unwrap_used, clippy::expect_used)]

use snapy_core::errors::SnapyError;
use snapy_core::logging_facility::test_capture::init_test_capture;
use snapy_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND,
};
use snapy_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, user_id = "u1");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("user_id"), Some("u1"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
    assert!(events[0].field(FIELD_COMPONENT).is_some());
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SnapyError::ProjectNotFound {
        project_id: "p1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(events[0].field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(events[0].level, tracing::Level::ERROR);
}

#[test]
fn test_start_end_pair_for_one_op() {
    let capture = init_test_capture();
    let op_name = "test_boundary_pair_unique_4";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1, project_id = "p1");

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some(op_name)),
        2
    );
}
