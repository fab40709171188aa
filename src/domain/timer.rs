use super::enums::{SessionMode, TimerPhase};
use crate::ticker::TICK_INTERVAL;
use std::time::Instant;
use tracing::debug;

/// A scheduled repeating one-second tick.
///
/// Owned exclusively by [`TimerEngine`]; dropping it cancels the schedule.
#[derive(Debug)]
pub struct TickHandle {
    next_due: Instant,
}

impl TickHandle {
    fn schedule(now: Instant) -> Self {
        Self {
            next_due: now + TICK_INTERVAL,
        }
    }

    /// Consume one due tick, if `now` has reached it
    fn take_due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due += TICK_INTERVAL;
            true
        } else {
            false
        }
    }
}

/// Raised exactly once when a countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFinished {
    pub mode: SessionMode,
}

/// Countdown state machine for WORK/BREAK sessions
#[derive(Debug)]
pub struct TimerEngine {
    mode: SessionMode,
    phase: TimerPhase,
    remaining_secs: u32,
    tick: Option<TickHandle>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self {
            mode: SessionMode::Work,
            phase: TimerPhase::Idle,
            remaining_secs: SessionMode::Work.duration_secs(),
            tick: None,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Whether a tick schedule is currently live
    #[cfg(test)]
    pub fn has_active_tick(&self) -> bool {
        self.tick.is_some()
    }

    /// Fraction of the configured duration already elapsed (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.mode.duration_secs());
        if total == 0.0 {
            return 0.0;
        }
        (1.0 - f64::from(self.remaining_secs) / total).clamp(0.0, 1.0)
    }

    /// Remaining time as "MM:SS"
    pub fn remaining_formatted(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start counting down with the first tick due one interval after `now`.
    /// A second start while running keeps the existing schedule.
    pub fn start_at(&mut self, now: Instant) {
        if self.phase == TimerPhase::Running || self.remaining_secs == 0 {
            return;
        }
        self.phase = TimerPhase::Running;
        self.tick = Some(TickHandle::schedule(now));
        debug!(mode = self.mode.to_tag(), remaining = self.remaining_secs, "timer started");
    }

    pub fn pause(&mut self) {
        self.cancel_tick();
        self.phase = TimerPhase::Paused;
        debug!(phase = self.phase.to_tag(), remaining = self.remaining_secs, "timer paused");
    }

    pub fn reset(&mut self) {
        self.pause();
        self.phase = TimerPhase::Idle;
        self.remaining_secs = self.mode.duration_secs();
    }

    /// Toggle WORK/BREAK and stand by with the new mode's full duration
    pub fn switch_mode(&mut self) {
        self.select_mode(self.mode.toggled());
    }

    /// Manually pick a mode; same reset semantics as [`switch_mode`](Self::switch_mode)
    pub fn select_mode(&mut self, mode: SessionMode) {
        self.cancel_tick();
        self.mode = mode;
        self.remaining_secs = mode.duration_secs();
        self.phase = TimerPhase::Idle;
        debug!(mode = mode.to_tag(), "timer mode selected");
    }

    /// Toggle between running and paused
    pub fn toggle_run_pause(&mut self) {
        match self.phase {
            TimerPhase::Idle | TimerPhase::Paused => self.start(),
            TimerPhase::Running => self.pause(),
        }
    }

    /// Apply every tick that has come due by `now`.
    ///
    /// Returns the finished event when the countdown reaches zero; ticking
    /// stops at that point even if more intervals have elapsed.
    pub fn advance(&mut self, now: Instant) -> Option<SessionFinished> {
        while let Some(handle) = self.tick.as_mut() {
            if !handle.take_due(now) {
                break;
            }
            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                return Some(self.complete());
            }
        }
        None
    }

    fn complete(&mut self) -> SessionFinished {
        self.cancel_tick();
        self.phase = TimerPhase::Idle;
        self.remaining_secs = 0;
        debug!(mode = self.mode.to_tag(), "session finished");
        SessionFinished { mode: self.mode }
    }

    fn cancel_tick(&mut self) {
        self.tick = None;
    }
}
