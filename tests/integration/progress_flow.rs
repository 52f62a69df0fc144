use filedag::progress::{
    ChunkTiming, ChunkedWork, ProgressHandle, ProgressState, ProgressTracker, WorkOutcome,
};
use filedag::{DagError, FileDag, FileRecord};
use std::time::Duration;

#[test]
fn scan_progress_then_failure() {
    let mut tracker = ProgressTracker::new();

    tracker.start("scan", None).unwrap();
    assert!(tracker.is_running());
    assert_eq!(tracker.progress(), None);

    tracker.update_progress(42.0, None).unwrap();
    assert_eq!(tracker.progress(), Some(42.0));
    assert_eq!(tracker.operation(), Some("scan"));

    tracker.fail("permission denied").unwrap();
    assert!(!tracker.is_running());
    assert_eq!(tracker.error(), Some("permission denied"));
    assert_eq!(tracker.progress(), None);
}

#[test]
fn failed_tracker_restarts_only_through_start() {
    let handle = ProgressHandle::new();
    handle.start("scan", None).unwrap();
    handle.fail("boom").unwrap();

    assert!(matches!(
        handle.update_details("retrying"),
        Err(DagError::InvalidTransition {
            state: "failed",
            ..
        })
    ));

    handle
        .start("scan", Some("second attempt".to_string()))
        .unwrap();
    assert_eq!(
        handle.snapshot(),
        ProgressState::Running {
            operation: "scan".to_string(),
            details: Some("second attempt".to_string()),
            progress: None,
        }
    );
    handle.complete().unwrap();
    assert_eq!(handle.snapshot(), ProgressState::Idle);
}

#[tokio::test]
async fn chunked_build_commits_dataset() {
    let records = vec![
        FileRecord::folder("A", "a", &[]),
        FileRecord::file("B", "b", "text/plain", &["A"]),
    ];
    let handle = ProgressHandle::new();
    let mut work = ChunkedWork::new(ChunkTiming::default()).with_progress(handle.clone(), "build");

    let outcome = work
        .run(|| Ok::<_, DagError>(FileDag::from_records(&records)))
        .await;

    assert!(matches!(outcome, WorkOutcome::Completed { padded: false, .. }));
    assert_eq!(work.result().map(|dag| dag.len()), Some(2));
    assert_eq!(handle.snapshot(), ProgressState::Idle);
}

#[tokio::test]
async fn custom_timing_pads_with_configured_delay() {
    let timing = ChunkTiming {
        slow_threshold_ms: 5,
        min_visible_ms: 30,
    };
    let mut work = ChunkedWork::new(timing);
    let started = std::time::Instant::now();
    let outcome = work
        .run(|| {
            std::thread::sleep(Duration::from_millis(20));
            Ok::<_, String>(())
        })
        .await;

    assert!(matches!(outcome, WorkOutcome::Completed { padded: true, .. }));
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn failing_build_surfaces_no_result() {
    let cyclic = vec![FileRecord::folder("s", "s", &["s"])];
    let mut work = ChunkedWork::default();

    let outcome = work
        .run(|| FileDag::build(&cyclic, filedag::tree::CyclePolicy::Reject))
        .await;

    match outcome {
        WorkOutcome::Failed { message } => assert!(message.contains("Cycle detected")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(work.result().is_none());
    assert!(!work.is_processing());
}
