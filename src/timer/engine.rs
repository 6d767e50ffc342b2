//! The Pomodoro state machine.
//!
//! [`TimerEngine`] owns the countdown, the active mode, the running flag and
//! the number of finished work sessions. It is driven either by calling
//! [`TimerEngine::tick`] once per elapsed second, or by calling
//! [`TimerEngine::advance`] whenever convenient and letting the engine work
//! out from its [`Clock`] how many seconds have passed.
//!
//! The decrement process is a single deadline (`next_tick`). Starting an
//! already running engine leaves that deadline alone, and pausing clears it,
//! so there is never more than one source of ticks.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::mode::Mode;
use super::settings::{Preferences, Settings};
use crate::notify::{Notifier, SilentNotifier};

/// Time between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delay between a completed countdown and the automatic start of the next one.
pub const AUTO_START_DELAY: Duration = Duration::from_secs(1);

/// Every n-th finished work session is followed by a long break.
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

/// Observable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Active mode.
    pub mode: Mode,
    /// Seconds left in the current countdown.
    pub seconds_remaining: u32,
    /// Whether the countdown is running.
    pub running: bool,
    /// Number of work sessions counted down to zero.
    pub completed_work_sessions: u32,
}

/// A countdown that reached zero and the transition it caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Mode whose countdown finished.
    pub finished: Mode,
    /// Mode the engine switched to.
    pub next: Mode,
    /// Work session count after the transition.
    pub completed_work_sessions: u32,
    /// Whether the next countdown will start by itself.
    pub auto_start: bool,
}

/// The timer state machine.
pub struct TimerEngine<C: Clock = SystemClock> {
    clock: C,
    settings: Settings,
    preferences: Preferences,
    state: TimerState,
    long_break_interval: u32,
    next_tick: Option<Instant>,
    auto_start_at: Option<Instant>,
    notifier: Box<dyn Notifier>,
}

impl TimerEngine<SystemClock> {
    /// Create an engine driven by the system clock.
    #[must_use]
    pub fn with_system_clock(settings: Settings, preferences: Preferences) -> Self {
        Self::new(settings, preferences, SystemClock)
    }
}

impl<C: Clock> TimerEngine<C> {
    /// Create an idle engine in work mode with a full countdown.
    #[must_use]
    pub fn new(settings: Settings, preferences: Preferences, clock: C) -> Self {
        Self {
            clock,
            settings,
            preferences,
            state: TimerState {
                mode: Mode::Work,
                seconds_remaining: settings.seconds(Mode::Work),
                running: false,
                completed_work_sessions: 0,
            },
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
            next_tick: None,
            auto_start_at: None,
            notifier: Box::new(SilentNotifier),
        }
    }

    /// Replace the completion notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Change how many work sessions lead up to a long break.
    #[must_use]
    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval.max(1);
        self
    }

    /// Start the countdown.
    ///
    /// Does nothing if the engine is already running or nothing is left to
    /// count down. A pending automatic start is absorbed.
    pub fn start(&mut self) {
        if self.state.running || self.state.seconds_remaining == 0 {
            return;
        }
        let now = self.clock.now();
        self.begin(now);
    }

    /// Stop the countdown. Idempotent.
    pub fn pause(&mut self) {
        if self.state.running {
            tracing::debug!(mode = %self.state.mode, remaining = self.state.seconds_remaining, "Paused");
        }
        self.state.running = false;
        self.next_tick = None;
        self.auto_start_at = None;
    }

    /// Start if idle, pause if running.
    pub fn toggle(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Pause and refill the countdown for the current mode.
    pub fn reset(&mut self) {
        self.pause();
        self.state.seconds_remaining = self.settings.seconds(self.state.mode);
    }

    /// Pause and switch to another mode with a full countdown.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.pause();
        self.state.mode = mode;
        self.state.seconds_remaining = self.settings.seconds(mode);
        tracing::debug!(%mode, "Switched mode");
    }

    /// Count down one second.
    ///
    /// Returns the completion if this tick brought the countdown to zero.
    /// Ticks while paused are ignored. A manual tick consumes the pending
    /// deadline, so mixing `tick` and [`TimerEngine::advance`] never counts
    /// a second twice.
    pub fn tick(&mut self) -> Option<Completion> {
        if self.state.running {
            self.next_tick = self.next_tick.map(|at| at + TICK_INTERVAL);
        }
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Deliver every tick and automatic start that is due by now.
    ///
    /// Late callers catch up: if three seconds passed since the last call,
    /// three ticks are applied.
    pub fn advance(&mut self) -> Vec<Completion> {
        let now = self.clock.now();
        let mut completions = Vec::new();

        loop {
            if let Some(at) = self.next_tick.filter(|at| *at <= now) {
                self.next_tick = Some(at + TICK_INTERVAL);
                if let Some(completion) = self.tick_at(at) {
                    completions.push(completion);
                }
                continue;
            }

            if let Some(at) = self.auto_start_at.filter(|at| *at <= now) {
                self.auto_start_at = None;
                if !self.state.running && self.state.seconds_remaining > 0 {
                    tracing::debug!(mode = %self.state.mode, "Auto-starting next countdown");
                    self.begin(at);
                }
                continue;
            }

            break;
        }

        completions
    }

    /// Replace the durations and refill the current countdown from them.
    ///
    /// The running flag is left as it is.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.state.seconds_remaining = settings.seconds(self.state.mode);
        tracing::info!(
            work = settings.work,
            short_break = settings.short_break,
            long_break = settings.long_break,
            "Settings updated"
        );
    }

    /// Replace the preferences. Turning auto-start off cancels a pending one.
    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
        if !preferences.auto_start_next {
            self.auto_start_at = None;
        }
    }

    /// Snapshot of the observable state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Current durations.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Current preferences.
    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Active mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Seconds left in the countdown.
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.state.seconds_remaining
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Number of finished work sessions.
    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.state.completed_work_sessions
    }

    /// Full length of the current mode in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.settings.seconds(self.state.mode)
    }

    /// Fraction of the countdown still left, from 1.0 (full) to 0.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        super::format::progress_fraction(self.state.seconds_remaining, self.total_seconds())
    }

    /// Whether a completed countdown is waiting to start the next one.
    #[must_use]
    pub const fn pending_auto_start(&self) -> bool {
        self.auto_start_at.is_some()
    }

    /// The engine's clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn begin(&mut self, at: Instant) {
        self.state.running = true;
        self.next_tick = Some(at + TICK_INTERVAL);
        self.auto_start_at = None;
        tracing::debug!(mode = %self.state.mode, remaining = self.state.seconds_remaining, "Started");
    }

    fn tick_at(&mut self, at: Instant) -> Option<Completion> {
        if !self.state.running {
            return None;
        }

        self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);
        if self.state.seconds_remaining > 0 {
            return None;
        }

        self.state.running = false;
        self.next_tick = None;
        Some(self.complete(at))
    }

    fn complete(&mut self, at: Instant) -> Completion {
        let finished = self.state.mode;
        let next = match finished {
            Mode::Work => {
                self.state.completed_work_sessions =
                    self.state.completed_work_sessions.saturating_add(1);
                if self.state.completed_work_sessions % self.long_break_interval == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        };

        self.state.mode = next;
        self.state.seconds_remaining = self.settings.seconds(next);

        let auto_start = self.preferences.auto_start_next;
        self.auto_start_at = auto_start.then(|| at + AUTO_START_DELAY);

        let completion = Completion {
            finished,
            next,
            completed_work_sessions: self.state.completed_work_sessions,
            auto_start,
        };

        tracing::info!(
            %finished,
            %next,
            completed = completion.completed_work_sessions,
            auto_start,
            "Countdown complete"
        );

        if self.preferences.sound_enabled {
            if let Err(e) = self.notifier.notify(&completion) {
                tracing::warn!(error = %e, "Completion cue failed");
            }
        }

        completion
    }
}
