use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Timestamp in milliseconds, suitable for `PlaybackClock::sample`.
    pub now_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces one `FrameTime` per presented frame.
pub trait TimeSource {
    fn frame(&mut self) -> FrameTime;
}

/// Monotonic wall clock.
///
/// Timestamps are milliseconds since the clock was created (or last reset).
/// Unlike a simulation frame clock, deltas are never clamped: playback speed
/// is defined against real elapsed time.
#[derive(Debug, Clone)]
pub struct WallClock {
    origin: Instant,
    frame_index: u64,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frame_index: 0,
        }
    }

    /// Resets the clock baseline and frame counter.
    pub fn reset(&mut self) {
        self.origin = Instant::now();
        self.frame_index = 0;
    }

    /// Milliseconds elapsed since the baseline, without advancing the frame counter.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn frame(&mut self) -> FrameTime {
        let ft = FrameTime {
            now_ms: self.now_ms(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

/// Deterministic clock advancing a fixed step per frame.
///
/// Used for headless playback and tests. `frame()` reports the current time
/// and then moves it forward by `step_ms`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
    frame_index: u64,
}

impl ManualClock {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms,
            frame_index: 0,
        }
    }

    /// Clock starting at zero that advances one frame of `fps` per call.
    pub fn at_fps(fps: u32) -> Self {
        Self::new(0.0, 1000.0 / f64::from(fps.max(1)))
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Moves time forward without producing a frame (e.g. time spent paused).
    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    /// Jumps to an absolute timestamp. Going backwards is allowed; it models a
    /// misbehaving time source.
    pub fn set(&mut self, ms: f64) {
        self.now_ms = ms;
    }
}

impl TimeSource for ManualClock {
    fn frame(&mut self) -> FrameTime {
        let ft = FrameTime {
            now_ms: self.now_ms,
            frame_index: self.frame_index,
        };
        self.now_ms += self.step_ms;
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
