use super::speed::{SpeedLimits, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SPEED_INCREMENT};

/// Sampled playback position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickSample {
    /// Current tick, in `0..total_ticks` (0 for an empty timeline).
    pub tick: u64,

    /// Progress from `tick` toward `tick + 1`, in `[0, 1]`.
    pub progress: f64,
}

impl TickSample {
    /// Continuous position on the timeline, for interpolated rendering.
    #[inline]
    pub fn position(&self) -> f64 {
        self.tick as f64 + self.progress
    }
}

/// Derived playback state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaybackPhase {
    Paused,
    PlayingMid,
    /// Playing on the last tick with progress saturated. The next sample
    /// that integrates time pauses the clock.
    PlayingAtEnd,
}

/// Change notifications for UI mirrors (slider, number input, play icon).
///
/// Queued by the clock and drained with [`PlaybackClock::take_events`]. At
/// most one event of each kind is pending; a newer one replaces the older.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClockEvent {
    TickChanged(u64),
    PlayingChanged(bool),
    SpeedChanged(f64),
    TotalTicksChanged(u64),
}

/// Playback clock for a tick-indexed timeline.
///
/// Owns the current tick, the fractional progress within it, the playback
/// speed and the play/pause flag. Commands mutate state synchronously and
/// never fail: out-of-range input is ignored or clamped.
///
/// Time only enters through [`sample`](Self::sample), which takes an explicit
/// timestamp in milliseconds. Call it once per rendered frame; calling it
/// twice per frame integrates the elapsed time twice.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    tick: u64,
    progress: f64,
    speed: f64,
    playing: bool,
    last_sample_ms: Option<f64>,
    total_ticks: u64,
    events: Vec<ClockEvent>,
}

impl PlaybackClock {
    /// Creates a paused clock at tick 0 for a timeline of `total_ticks` ticks.
    pub fn new(total_ticks: u64) -> Self {
        Self {
            tick: 0,
            progress: 0.0,
            speed: DEFAULT_SPEED,
            playing: false,
            last_sample_ms: None,
            total_ticks,
            events: Vec::new(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Index of the last tick, or `None` for an empty timeline.
    pub fn last_tick(&self) -> Option<u64> {
        self.total_ticks.checked_sub(1)
    }

    pub fn is_at_last_tick(&self) -> bool {
        self.last_tick() == Some(self.tick)
    }

    /// Current position without integrating time.
    pub fn snapshot(&self) -> TickSample {
        TickSample {
            tick: self.tick,
            progress: self.progress,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        if !self.playing {
            PlaybackPhase::Paused
        } else if self.is_at_last_tick() && self.progress >= 1.0 {
            PlaybackPhase::PlayingAtEnd
        } else {
            PlaybackPhase::PlayingMid
        }
    }

    /// Drains pending mirror notifications, oldest kind first.
    pub fn take_events(&mut self) -> Vec<ClockEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Timeline ──────────────────────────────────────────────────────────

    /// Records the timeline length. A different length resets the clock.
    pub fn set_total_ticks(&mut self, total_ticks: u64) {
        if total_ticks == self.total_ticks {
            return;
        }
        log::debug!("timeline length {} -> {}", self.total_ticks, total_ticks);
        self.total_ticks = total_ticks;
        self.notify(ClockEvent::TotalTicksChanged(total_ticks));
        self.reset();
    }

    /// Returns to tick 0 with no progress and forgets the sample timestamp.
    ///
    /// Speed and the play flag are kept.
    pub fn reset(&mut self) {
        self.write_tick(0);
        self.progress = 0.0;
        self.last_sample_ms = None;
    }

    // ── Seeking ───────────────────────────────────────────────────────────

    /// Slider path: clamps `value` into the timeline. Progress is kept.
    pub fn set_tick(&mut self, value: i64) {
        let last = self.last_tick().unwrap_or(0);
        let tick = u64::try_from(value).unwrap_or(0).min(last);
        self.write_tick(tick);
    }

    /// Number-input path: applies `value` only if it is a valid index.
    ///
    /// Returns whether the seek was applied. Progress is kept.
    pub fn seek_to_tick(&mut self, value: i64) -> bool {
        match u64::try_from(value) {
            Ok(tick) if tick < self.total_ticks => {
                self.write_tick(tick);
                true
            }
            _ => {
                log::debug!("ignoring seek to {value} (timeline has {} ticks)", self.total_ticks);
                false
            }
        }
    }

    pub fn step_forward(&mut self) {
        if self.tick + 1 < self.total_ticks {
            self.write_tick(self.tick + 1);
            self.progress = 0.0;
        }
    }

    pub fn step_backward(&mut self) {
        if self.tick > 0 {
            self.write_tick(self.tick - 1);
            self.progress = 0.0;
        }
    }

    pub fn seek_to_start(&mut self) {
        self.write_tick(0);
        self.progress = 0.0;
    }

    /// Jumps to the last tick with full progress.
    ///
    /// On an empty timeline the tick is left alone but progress still
    /// saturates to 1.
    pub fn seek_to_end(&mut self) {
        if let Some(last) = self.last_tick() {
            self.write_tick(last);
        }
        self.progress = 1.0;
    }

    // ── Play state ────────────────────────────────────────────────────────

    /// Sets the play flag. Any transition forgets the sample timestamp, so
    /// the first sample after resuming only anchors time.
    pub fn set_playing(&mut self, playing: bool) {
        if self.playing == playing {
            return;
        }
        self.playing = playing;
        self.last_sample_ms = None;
        self.notify(ClockEvent::PlayingChanged(playing));
        log::debug!("playback {}", if playing { "started" } else { "paused" });
    }

    pub fn play(&mut self) {
        self.set_playing(true);
    }

    /// Starts playing and anchors time at `now_ms`, so the next sample
    /// already integrates the time since this call.
    ///
    /// Does nothing while already playing; the existing anchor is kept.
    pub fn play_at(&mut self, now_ms: f64) {
        if self.playing {
            return;
        }
        self.set_playing(true);
        self.last_sample_ms = Some(now_ms);
    }

    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    pub fn toggle_play(&mut self) {
        self.set_playing(!self.playing);
    }

    // ── Speed ─────────────────────────────────────────────────────────────

    /// Slider / number-input path: accepts any finite positive speed.
    ///
    /// Returns whether the value was accepted.
    pub fn set_speed(&mut self, value: f64) -> bool {
        if !(value.is_finite() && value > 0.0) {
            log::debug!("ignoring speed {value}");
            return false;
        }
        self.write_speed(value);
        true
    }

    /// Stepper button: one increment up while below the maximum.
    pub fn speed_up(&mut self) {
        if self.speed < MAX_SPEED {
            self.write_speed(SpeedLimits::STEPPER.clamp(self.speed + SPEED_INCREMENT));
        }
    }

    /// Stepper button: one increment down while above the minimum.
    pub fn speed_down(&mut self) {
        if self.speed > MIN_SPEED {
            self.write_speed(SpeedLimits::STEPPER.clamp(self.speed - SPEED_INCREMENT));
        }
    }

    /// Keyboard path: adds `delta` and clamps to [`SpeedLimits::KEYBOARD`].
    pub fn adjust_speed(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.write_speed(SpeedLimits::KEYBOARD.clamp(self.speed + delta));
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Integrates the time elapsed since the previous sample and reports the
    /// current position.
    ///
    /// While paused nothing moves. The first sample after a play transition
    /// only records `now_ms`. Reaching the end of the timeline pauses
    /// playback with progress saturated at 1.
    pub fn sample(&mut self, now_ms: f64) -> TickSample {
        if !self.playing {
            self.last_sample_ms = None;
            return self.snapshot();
        }

        let Some(last_ms) = self.last_sample_ms.replace(now_ms) else {
            return self.snapshot();
        };

        let dt = (now_ms - last_ms) / 1000.0;
        if !(dt > 0.0) {
            if dt < 0.0 {
                log::warn!("time source went backwards by {:.3}s; skipping frame", -dt);
            }
            return self.snapshot();
        }

        self.progress += dt * self.speed;

        if self.progress > 1.0 {
            match self.last_tick() {
                Some(last) if self.tick < last && !self.progress.is_finite() => {
                    // Overflowed: a jump past the end lands on the last tick.
                    self.write_tick(last);
                    self.progress = 1.0;
                }
                Some(last) if self.tick < last => {
                    let advance = self.progress.floor() as u64;
                    self.write_tick(self.tick.saturating_add(advance).min(last));
                    self.progress = self.progress.fract();
                }
                _ => {
                    self.set_playing(false);
                    self.progress = 1.0;
                    log::info!("reached end of timeline at tick {}; playback paused", self.tick);
                }
            }
        }

        log::trace!("sample t={now_ms:.1}ms -> tick {} + {:.3}", self.tick, self.progress);
        self.snapshot()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn write_tick(&mut self, tick: u64) {
        self.tick = tick;
        self.notify(ClockEvent::TickChanged(tick));
    }

    fn write_speed(&mut self, speed: f64) {
        self.speed = speed;
        self.notify(ClockEvent::SpeedChanged(speed));
    }

    /// Queues `event`, dropping a pending event of the same kind.
    fn notify(&mut self, event: ClockEvent) {
        let kind = std::mem::discriminant(&event);
        self.events.retain(|e| std::mem::discriminant(e) != kind);
        self.events.push(event);
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(0)
    }
}
