use std::time::{Duration, Instant};

use log::info;
use sciencelist_core::{ChecklistWindow, HostServices};

use crate::debounce::{RefreshKind, UpdateDebouncer};

/// Outcome of polling a task for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task did its bounded work and stays scheduled.
    Pending,
    /// The task finished; its handle slot should be cleared.
    Done,
}

/// Waits for the host's research and part-catalog subsystems to come up,
/// then primes the window's experiment cache exactly once per session.
///
/// `cache_primed` carries the re-entry guard: when the controller restarts
/// this task for a session whose cache was already built, readiness resolves
/// into a no-op instead of a second rebuild.
#[derive(Debug)]
pub struct ReadinessWait;

impl ReadinessWait {
    pub fn poll(
        &self,
        host: &impl HostServices,
        window: &mut impl ChecklistWindow,
        cache_primed: bool,
    ) -> TaskStatus {
        if !host.research_ready() || !host.part_catalog_ready() {
            return TaskStatus::Pending;
        }
        if !cache_primed {
            info!("host services ready, priming experiment cache");
            window.refresh_experiment_cache();
        }
        TaskStatus::Done
    }
}

/// Consumes due refresh requests from the debouncer while the window is
/// shown. Exactly one window operation fires per consumed request; requests
/// wait out hidden periods instead of being dropped.
#[derive(Debug)]
pub struct ExperimentUpdater;

impl ExperimentUpdater {
    pub fn poll(
        &self,
        now: Instant,
        debouncer: &mut UpdateDebouncer,
        window: &mut impl ChecklistWindow,
    ) {
        if !window.is_visible() {
            return;
        }
        match debouncer.take_due(now) {
            Some(RefreshKind::FullRebuild) => window.refresh_experiment_cache(),
            Some(RefreshKind::Incremental) => window.update_experiments(),
            None => {}
        }
    }
}

/// Rate-limits filter refreshes to one per interval, independent of the
/// experiment-update cadence. The pending flag lives on the controller so
/// events can set it whether or not this task is running.
#[derive(Debug)]
pub struct FilterRefresher {
    next_check: Instant,
    interval: Duration,
}

impl FilterRefresher {
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self {
            next_check: now,
            interval,
        }
    }

    pub fn poll(&mut self, now: Instant, pending: &mut bool, window: &mut impl ChecklistWindow) {
        if !window.is_visible() || !*pending || now <= self.next_check {
            return;
        }
        self.next_check = now + self.interval;
        window.refresh_filter();
        *pending = false;
    }
}
