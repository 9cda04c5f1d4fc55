//! Viewer session.
//!
//! Ties one [`PlaybackClock`] to a [`TimelineSource`], key bindings and a
//! command table. A host calls [`PlaybackSession::frame`] once per rendered
//! frame and forwards its input through [`handle_key`](PlaybackSession::handle_key)
//! or [`dispatch`](PlaybackSession::dispatch).

use crate::command::{Command, CommandError, CommandTable};
use crate::input::{Binding, KeyBindings, KeyEvent};
use crate::time::{ClockEvent, PlaybackClock, PlaybackPhase, TickSample};
use crate::timeline::TimelineSource;

/// Everything a renderer and the UI mirrors need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub sample: TickSample,
    pub phase: PlaybackPhase,
    pub speed: f64,
    pub total_ticks: u64,
    /// Winner label while the last tick is displayed.
    pub winner: Option<String>,
    /// Mirror notifications since the previous frame.
    pub events: Vec<ClockEvent>,
}

impl FrameReport {
    pub fn is_playing(&self) -> bool {
        self.phase != PlaybackPhase::Paused
    }
}

#[derive(Debug)]
pub struct PlaybackSession<S> {
    clock: PlaybackClock,
    source: S,
    bindings: KeyBindings,
    commands: CommandTable,
}

impl<S: TimelineSource> PlaybackSession<S> {
    /// Session with standard key bindings and the standard command table.
    pub fn new(source: S) -> Self {
        Self {
            clock: PlaybackClock::new(source.total_ticks()),
            source,
            bindings: KeyBindings::standard(),
            commands: CommandTable::standard(),
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_commands(mut self, commands: CommandTable) -> Self {
        self.commands = commands;
        self
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut PlaybackClock {
        &mut self.clock
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn commands_mut(&mut self) -> &mut CommandTable {
        &mut self.commands
    }

    /// Swaps in a new timeline and resets the clock, returning the old source.
    pub fn replace_source(&mut self, source: S) -> S {
        let old = std::mem::replace(&mut self.source, source);
        self.clock.set_total_ticks(self.source.total_ticks());
        self.clock.reset();
        old
    }

    /// Re-reads the tick count from the source. A changed count resets the clock.
    pub fn sync(&mut self) {
        self.clock.set_total_ticks(self.source.total_ticks());
    }

    /// Samples the clock for one rendered frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        self.sync();
        let sample = self.clock.sample(now_ms);
        let winner = if self.clock.is_at_last_tick() {
            self.source.winner_label()
        } else {
            None
        };

        FrameReport {
            sample,
            phase: self.clock.phase(),
            speed: self.clock.speed(),
            total_ticks: self.clock.total_ticks(),
            winner,
            events: self.clock.take_events(),
        }
    }

    pub fn apply(&mut self, command: Command) {
        self.sync();
        command.apply(&mut self.clock);
    }

    /// Runs the command bound to `event`, if any, and returns the binding so
    /// the UI can give its control visual feedback.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Binding> {
        let binding = self.bindings.resolve(event)?;
        self.apply(binding.command);
        Some(binding)
    }

    pub fn dispatch(&mut self, name: &str, arg: Option<f64>) -> Result<(), CommandError> {
        self.sync();
        self.commands.dispatch(&mut self.clock, name, arg)
    }

    pub fn dispatch_line(&mut self, line: &str) -> Result<(), CommandError> {
        self.sync();
        self.commands.dispatch_line(&mut self.clock, line)
    }
}
