#![allow(clippy::unwrap_used, clippy::expect_used)]

use snapy_core::logging_facility::test_capture::init_test_capture;
use snapy_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
};
use snapy_core::{NewUser, ProjectPatch};
use snapy_engine::SharedStore;

// Single test per binary: the capture buffer is process-wide.
#[test]
fn test_boundary_events_for_success_and_failure() {
    let capture = init_test_capture();
    let shared = SharedStore::default();

    shared
        .create_user(NewUser::new("erin", "erin@example.com", "pw"))
        .unwrap();
    capture.assert_event_exists("create_user", EVENT_START);
    capture.assert_event_exists("create_user", EVENT_END);

    let end = capture
        .events_for_op("create_user")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert!(end.field(FIELD_DURATION_MS).is_some());
    assert_eq!(end.field(FIELD_COMPONENT), Some("snapy_engine::shared_store"));

    let _ = shared.update_project("missing", ProjectPatch::title("x"));
    let failures: Vec<_> = capture
        .events_for_op("update_project")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].level, tracing::Level::ERROR);
    assert_eq!(failures[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}
