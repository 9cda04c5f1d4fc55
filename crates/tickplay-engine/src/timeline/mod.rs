//! Timeline sources.
//!
//! The clock never owns replay data. It only needs the tick count, and the
//! viewer needs the winner label for the end-of-replay display.

mod replay;

pub use replay::ReplaySummary;

/// External provider of the timeline being played back.
pub trait TimelineSource {
    /// Number of ticks N. May change between frames (a new replay loaded).
    fn total_ticks(&self) -> u64;

    /// Label shown once playback reaches the last tick, if any.
    fn winner_label(&self) -> Option<String> {
        None
    }
}

/// In-memory timeline of a fixed length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedTimeline {
    pub total_ticks: u64,
    pub winner: Option<String>,
}

impl FixedTimeline {
    pub fn new(total_ticks: u64) -> Self {
        Self {
            total_ticks,
            winner: None,
        }
    }

    pub fn with_winner(mut self, winner: impl Into<String>) -> Self {
        self.winner = Some(winner.into());
        self
    }
}

impl TimelineSource for FixedTimeline {
    fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    fn winner_label(&self) -> Option<String> {
        self.winner.clone()
    }
}

impl<T: TimelineSource + ?Sized> TimelineSource for Box<T> {
    fn total_ticks(&self) -> u64 {
        (**self).total_ticks()
    }

    fn winner_label(&self) -> Option<String> {
        (**self).winner_label()
    }
}
