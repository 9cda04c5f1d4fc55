use std::collections::HashMap;
use std::fmt;

use crate::time::PlaybackClock;

use super::{split_line, Command, CommandError};

/// Handler registered under an action name.
pub type Handler = Box<dyn FnMut(&mut PlaybackClock, Option<f64>) -> Result<(), CommandError>>;

/// Action name → handler dispatch table.
///
/// UI layers map their own input (buttons, menu items, scripted lines) onto
/// action names and dispatch through the table. [`CommandTable::standard`]
/// registers every built-in [`Command`]; entries can be overridden or added.
///
/// ```rust
/// use tickplay_engine::command::CommandTable;
/// use tickplay_engine::time::PlaybackClock;
///
/// let mut clock = PlaybackClock::new(10);
/// let mut table = CommandTable::standard();
/// table.dispatch(&mut clock, "seek_tick", Some(4.0)).unwrap();
/// table.dispatch_line(&mut clock, "step_forward").unwrap();
/// assert_eq!(clock.tick(), 5);
/// ```
pub struct CommandTable {
    handlers: HashMap<String, Handler>,
}

impl CommandTable {
    /// Empty table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Table with every built-in command registered under its action name.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for name in Command::names() {
            table.insert(name, move |clock: &mut PlaybackClock, arg: Option<f64>| {
                Command::from_parts(name, arg)?.apply(clock);
                Ok(())
            });
        }
        table
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn on<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnMut(&mut PlaybackClock, Option<f64>) -> Result<(), CommandError> + 'static,
    {
        self.insert(name, f);
        self
    }

    /// Registers `f` under `name`, replacing any previous handler.
    pub fn insert<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: FnMut(&mut PlaybackClock, Option<f64>) -> Result<(), CommandError> + 'static,
    {
        self.handlers.insert(name.into(), Box::new(f));
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs the handler registered under `name`.
    pub fn dispatch(
        &mut self,
        clock: &mut PlaybackClock,
        name: &str,
        arg: Option<f64>,
    ) -> Result<(), CommandError> {
        let Some(handler) = self.handlers.get_mut(name) else {
            return Err(CommandError::UnknownCommand(name.to_string()));
        };
        handler(clock, arg)
    }

    /// Parses `"name [argument]"` and dispatches it.
    pub fn dispatch_line(&mut self, clock: &mut PlaybackClock, line: &str) -> Result<(), CommandError> {
        let (name, arg) = split_line(line)?;
        self.dispatch(clock, name, arg)
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTable")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn standard_table_has_every_command() {
        let table = CommandTable::standard();
        for name in Command::names() {
            assert!(table.contains(name), "missing {name}");
        }
        assert_eq!(table.names().len(), Command::names().count());
    }

    #[test]
    fn dispatch_drives_clock() {
        let mut clock = PlaybackClock::new(10);
        let mut table = CommandTable::standard();

        table.dispatch(&mut clock, "seek_end", None).unwrap();
        assert_eq!(clock.tick(), 9);
        assert_eq!(clock.progress(), 1.0);

        table.dispatch(&mut clock, "set_tick", Some(2.0)).unwrap();
        table.dispatch_line(&mut clock, "speed_up").unwrap();
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.speed(), 3.5);
    }

    #[test]
    fn dispatch_reports_unknown_and_bad_arguments() {
        let mut clock = PlaybackClock::new(10);
        let mut table = CommandTable::standard();

        assert_eq!(
            table.dispatch(&mut clock, "warp", None),
            Err(CommandError::UnknownCommand("warp".into()))
        );
        assert_eq!(
            table.dispatch(&mut clock, "set_speed", None),
            Err(CommandError::MissingArgument("set_speed"))
        );
        assert_eq!(table.dispatch_line(&mut clock, "   "), Err(CommandError::Empty));
    }

    #[test]
    fn custom_handlers_override_and_extend() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();

        let mut clock = PlaybackClock::new(10);
        let mut table = CommandTable::standard()
            .on("step_forward", |clock: &mut PlaybackClock, _| {
                clock.seek_to_end();
                Ok(())
            })
            .on("ping", move |_: &mut PlaybackClock, _| {
                seen.set(seen.get() + 1);
                Ok(())
            });

        table.dispatch(&mut clock, "step_forward", None).unwrap();
        assert_eq!(clock.tick(), 9);

        table.dispatch(&mut clock, "ping", None).unwrap();
        assert_eq!(calls.get(), 1);

        assert!(table.remove("ping"));
        assert!(!table.contains("ping"));
    }

    #[test]
    fn custom_handler_takes_line_argument() {
        let mut clock = PlaybackClock::new(10);
        let mut table = CommandTable::standard().on("jump", |clock: &mut PlaybackClock, arg| {
            let by = arg.ok_or(CommandError::MissingArgument("jump"))?;
            clock.set_tick(clock.tick() as i64 + by as i64);
            Ok(())
        });

        table.dispatch(&mut clock, "jump", Some(4.0)).unwrap();
        table.dispatch_line(&mut clock, "jump 3").unwrap();
        assert_eq!(clock.tick(), 7);

        assert_eq!(
            table.dispatch_line(&mut clock, "warp 3"),
            Err(CommandError::UnknownCommand("warp".into()))
        );
    }
}
