//! Time subsystem.
//!
//! Converts wall-clock time into tick advancement without coupling to a runtime.
//! Intended usage:
//! - one `PlaybackClock` per viewer, fed by a `TimeSource`
//! - call `PlaybackClock::sample(now_ms)` once per presented frame

mod playback_clock;
mod speed;
mod wall_clock;

pub use playback_clock::{ClockEvent, PlaybackClock, PlaybackPhase, TickSample};
pub use speed::{SpeedLimits, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SPEED_INCREMENT};
pub use wall_clock::{FrameTime, ManualClock, TimeSource, WallClock};
