//! Tickplay engine crate.
//!
//! Playback core for tick-indexed replay and simulation viewers. The UI layer
//! stays outside: it issues commands, forwards key presses and renders the
//! per-frame sample.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`time`] | `PlaybackClock`, speed limits, wall/manual time sources |
//! | [`command`] | `Command`, `CommandTable`, `CommandError` |
//! | [`input`] | `Key`, `KeyEvent`, `KeyBindings` |
//! | [`timeline`] | `TimelineSource`, `FixedTimeline`, `ReplaySummary` |
//! | [`session`] | `PlaybackSession`, `FrameReport` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use tickplay_engine::time::PlaybackClock;
//!
//! let mut clock = PlaybackClock::new(10);
//! clock.play();
//! clock.sample(0.0); // first frame after play only anchors time
//! let s = clock.sample(500.0); // 0.5s at 3 ticks/s
//! assert_eq!(s.tick, 1);
//! assert!((s.progress - 0.5).abs() < 1e-9);
//! ```

pub mod command;
pub mod input;
pub mod logging;
pub mod session;
pub mod time;
pub mod timeline;

pub use command::{Command, CommandError, CommandTable};
pub use session::{FrameReport, PlaybackSession};
pub use time::{PlaybackClock, TickSample};
pub use timeline::TimelineSource;
