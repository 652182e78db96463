use std::time::{Duration, Instant};

/// Which window operation a consumed refresh request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Incremental,
    FullRebuild,
}

/// Collapses bursts of "something changed" notifications into a single
/// pending refresh request.
///
/// Only one request is outstanding at a time: scheduling again before the
/// previous request fired replaces the due-time, while the full-rebuild flag
/// is sticky until the request is consumed. Full rebuild dominates
/// incremental.
#[derive(Debug)]
pub struct UpdateDebouncer {
    delay: Duration,
    due: Option<Instant>,
    full_rebuild: bool,
}

impl UpdateDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            due: None,
            full_rebuild: false,
        }
    }

    /// Registers a refresh request due `delay` from `now`, replacing any
    /// request already pending.
    pub fn schedule(&mut self, now: Instant, full_rebuild: bool) {
        self.due = Some(now + self.delay);
        if full_rebuild {
            self.full_rebuild = true;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Consumes the pending request if its due-time has been reached.
    /// Consumption clears both the due-time and the full-rebuild flag.
    pub fn take_due(&mut self, now: Instant) -> Option<RefreshKind> {
        let due = self.due?;
        if due > now {
            return None;
        }
        self.due = None;
        let kind = if self.full_rebuild {
            RefreshKind::FullRebuild
        } else {
            RefreshKind::Incremental
        };
        self.full_rebuild = false;
        Some(kind)
    }
}
