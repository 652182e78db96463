use std::time::Instant;

use log::{info, trace};
use sciencelist_core::{
    ChecklistWindow, EventAction, HostEvent, HostServices, SchedulerSettings, SessionMode,
    ToolbarButton,
};

use crate::debounce::UpdateDebouncer;
use crate::tasks::{ExperimentUpdater, FilterRefresher, ReadinessWait, TaskStatus};

/// Whether the addon is live for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Inactive,
    Active,
}

/// Top-level lifecycle state machine of the addon.
///
/// Owns the window, toolbar button and host handle, decides whether the
/// current session activates the addon, starts and stops the polling tasks,
/// and routes host events into the debouncer. Everything runs on the host's
/// frame loop; every entry point takes the host-supplied `now` so the core
/// never reads a clock of its own.
///
/// A task slot holding `Some` is a running task. `deactivate` drops the
/// slots; a dropped task is never polled again and leaves no partial state
/// behind.
pub struct AddonController<W, B, H> {
    window: W,
    button: B,
    host: H,
    settings: SchedulerSettings,
    activation: Activation,
    launcher_visible: bool,
    window_toggled: bool,
    next_situation_check: Instant,
    cache_primed: bool,
    filter_pending: bool,
    debouncer: UpdateDebouncer,
    readiness: Option<ReadinessWait>,
    updater: Option<ExperimentUpdater>,
    filter: Option<FilterRefresher>,
}

impl<W, B, H> AddonController<W, B, H>
where
    W: ChecklistWindow,
    B: ToolbarButton,
    H: HostServices,
{
    pub fn new(window: W, button: B, host: H, settings: SchedulerSettings, now: Instant) -> Self {
        let debouncer = UpdateDebouncer::new(settings.update_delay());
        Self {
            window,
            button,
            host,
            settings,
            activation: Activation::Inactive,
            launcher_visible: false,
            window_toggled: false,
            next_situation_check: now,
            cache_primed: false,
            filter_pending: false,
            debouncer,
            readiness: None,
            updater: None,
            filter: None,
        }
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    fn is_active(&self) -> bool {
        self.activation == Activation::Active
    }

    /// Brings the addon up for a session. Invoked when the host's launcher
    /// surface becomes ready; the host is known to fire that hook more than
    /// once per session, so re-entry only restarts the readiness wait.
    pub fn activate(&mut self, mode: SessionMode, now: Instant) {
        if self.is_active() {
            info!("already active, restarting readiness wait");
            self.readiness = Some(ReadinessWait);
            return;
        }
        if !mode.supports_checklist() {
            info!("session mode {mode:?} has no science progression, staying inactive");
            return;
        }

        info!("session mode {mode:?}, activating");
        self.activation = Activation::Active;
        self.cache_primed = false;

        self.button.add();

        self.launcher_visible = true;
        self.host.add_launcher_callbacks();

        self.readiness = Some(ReadinessWait);
        self.updater = Some(ExperimentUpdater);
        self.filter = Some(FilterRefresher::new(now, self.settings.filter_interval()));
    }

    /// Tears the addon down. Invoked when the host destroys its launcher
    /// surface; symmetric to `activate` and idempotent.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            info!("already inactive");
            return;
        }
        info!("deactivating");
        self.activation = Activation::Inactive;

        self.button.remove();

        self.host.remove_launcher_callbacks();
        self.launcher_visible = false;

        self.readiness = None;
        self.updater = None;
        self.filter = None;
    }

    /// Routes a host event into the debouncer or the filter flag. Not gated
    /// on activation: a request accumulated while inactive simply waits until
    /// the tasks run again.
    pub fn handle_event(&mut self, event: HostEvent, now: Instant) {
        trace!("event {event:?}");
        match event.action() {
            EventAction::RefreshFilter => self.filter_pending = true,
            EventAction::ScheduleUpdate { full_rebuild } => self.schedule_update(now, full_rebuild),
            EventAction::Ignore => {}
        }
    }

    fn schedule_update(&mut self, now: Instant, full_rebuild: bool) {
        self.debouncer.schedule(now, full_rebuild);
    }

    /// Once-per-frame callback. Polls the running tasks, then rate-limits the
    /// situation recalculation to once per interval while the window is shown.
    pub fn tick(&mut self, now: Instant) {
        if self.is_active() {
            if let Some(readiness) = self.readiness.take() {
                match readiness.poll(&self.host, &mut self.window, self.cache_primed) {
                    TaskStatus::Done => self.cache_primed = true,
                    TaskStatus::Pending => self.readiness = Some(readiness),
                }
            }
            if let Some(updater) = &self.updater {
                updater.poll(now, &mut self.debouncer, &mut self.window);
            }
            if let Some(filter) = &mut self.filter {
                filter.poll(now, &mut self.filter_pending, &mut self.window);
            }
        }

        if !self.window.is_visible() {
            return;
        }
        if now < self.next_situation_check {
            return;
        }
        self.next_situation_check = now + self.settings.situation_interval();
        self.window.recalculate_situation();
    }

    /// Host launcher surface became visible.
    pub fn launcher_shown(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        trace!("launcher shown");
        self.launcher_visible = true;
        self.update_visibility(now);
    }

    /// Host launcher surface was hidden.
    pub fn launcher_hidden(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        trace!("launcher hidden");
        self.launcher_visible = false;
        self.update_visibility(now);
    }

    /// Toolbar button toggled on.
    pub fn button_opened(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        trace!("button opened");
        self.window_toggled = true;
        self.update_visibility(now);
    }

    /// Toolbar button toggled off.
    pub fn button_closed(&mut self, now: Instant) {
        if !self.is_active() {
            return;
        }
        trace!("button closed");
        self.window_toggled = false;
        self.update_visibility(now);
    }

    /// The window was closed from its own close control. The window already
    /// hid itself, so visibility is not re-derived; only the toggle source
    /// and the button state are brought back in line.
    pub fn window_closed(&mut self) {
        trace!("window closed by user");
        self.window_toggled = false;
        self.button.set_off();
    }

    /// The window is shown iff the launcher surface is visible and the button
    /// is toggled on. An incremental update is scheduled on every transition
    /// so that becoming visible catches up on refreshes missed while hidden.
    fn update_visibility(&mut self, now: Instant) {
        let visible = self.launcher_visible && self.window_toggled;
        self.window.set_visible(visible);
        self.schedule_update(now, false);
    }
}
