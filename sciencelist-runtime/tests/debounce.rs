use sciencelist_runtime::{RefreshKind, UpdateDebouncer};
use std::time::{Duration, Instant};

#[test]
fn take_due_returns_nothing_before_due_time() {
    let t0 = Instant::now();
    let mut debouncer = UpdateDebouncer::new(Duration::from_secs(1));

    debouncer.schedule(t0, false);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take_due(t0), None);
    assert_eq!(debouncer.take_due(t0 + Duration::from_millis(999)), None);
    assert!(debouncer.is_pending());
}

#[test]
fn consumption_clears_request_and_flag() {
    let t0 = Instant::now();
    let mut debouncer = UpdateDebouncer::new(Duration::from_secs(1));

    debouncer.schedule(t0, true);
    assert_eq!(
        debouncer.take_due(t0 + Duration::from_secs(1)),
        Some(RefreshKind::FullRebuild)
    );
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.take_due(t0 + Duration::from_secs(2)), None);

    // The sticky flag must not leak into the next request.
    debouncer.schedule(t0 + Duration::from_secs(2), false);
    assert_eq!(
        debouncer.take_due(t0 + Duration::from_secs(3)),
        Some(RefreshKind::Incremental)
    );
}

#[test]
fn rescheduling_replaces_due_time() {
    let t0 = Instant::now();
    let mut debouncer = UpdateDebouncer::new(Duration::from_secs(1));

    debouncer.schedule(t0, false);
    debouncer.schedule(t0 + Duration::from_millis(800), false);

    // The first deadline has passed, but the request was pushed out.
    assert_eq!(debouncer.take_due(t0 + Duration::from_millis(1200)), None);
    assert_eq!(
        debouncer.take_due(t0 + Duration::from_millis(1800)),
        Some(RefreshKind::Incremental)
    );
}

#[test]
fn full_rebuild_dominates_until_consumed() {
    let t0 = Instant::now();
    let mut debouncer = UpdateDebouncer::new(Duration::from_secs(1));

    debouncer.schedule(t0, false);
    debouncer.schedule(t0 + Duration::from_millis(100), true);
    debouncer.schedule(t0 + Duration::from_millis(200), false);

    assert_eq!(
        debouncer.take_due(t0 + Duration::from_secs(2)),
        Some(RefreshKind::FullRebuild)
    );
}
