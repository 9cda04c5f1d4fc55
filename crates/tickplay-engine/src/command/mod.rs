//! Playback commands.
//!
//! Every control a viewer offers maps onto one [`Command`]. Commands have a
//! stable action name so that UI layers (buttons, keyboard, scripts) can route
//! their own events through a [`CommandTable`] instead of touching the clock
//! directly.

mod error;
mod table;

use std::fmt;
use std::str::FromStr;

use crate::time::PlaybackClock;

pub use error::CommandError;
pub use table::{CommandTable, Handler};

/// A discrete playback command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    TogglePlay,
    StepForward,
    StepBackward,
    SeekToStart,
    SeekToEnd,
    /// Number-input seek; ignored when out of range.
    SeekToTick(i64),
    /// Slider seek; clamped into the timeline.
    SetTick(i64),
    /// Direct speed; ignored unless positive.
    SetSpeed(f64),
    /// Keyboard speed change; clamped to `[1, 20]`.
    AdjustSpeed(f64),
    SpeedUp,
    SpeedDown,
    Reset,
}

/// How a command is built from its optional argument.
#[derive(Copy, Clone)]
enum Form {
    Nullary(Command),
    Tick(fn(i64) -> Command),
    Speed(fn(f64) -> Command),
}

const TABLE: &[(&str, Form)] = &[
    ("play", Form::Nullary(Command::Play)),
    ("pause", Form::Nullary(Command::Pause)),
    ("toggle_play", Form::Nullary(Command::TogglePlay)),
    ("step_forward", Form::Nullary(Command::StepForward)),
    ("step_backward", Form::Nullary(Command::StepBackward)),
    ("seek_start", Form::Nullary(Command::SeekToStart)),
    ("seek_end", Form::Nullary(Command::SeekToEnd)),
    ("seek_tick", Form::Tick(Command::SeekToTick)),
    ("set_tick", Form::Tick(Command::SetTick)),
    ("set_speed", Form::Speed(Command::SetSpeed)),
    ("adjust_speed", Form::Speed(Command::AdjustSpeed)),
    ("speed_up", Form::Nullary(Command::SpeedUp)),
    ("speed_down", Form::Nullary(Command::SpeedDown)),
    ("reset", Form::Nullary(Command::Reset)),
];

impl Command {
    /// Every action name, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|(name, _)| *name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Pause => "pause",
            Command::TogglePlay => "toggle_play",
            Command::StepForward => "step_forward",
            Command::StepBackward => "step_backward",
            Command::SeekToStart => "seek_start",
            Command::SeekToEnd => "seek_end",
            Command::SeekToTick(_) => "seek_tick",
            Command::SetTick(_) => "set_tick",
            Command::SetSpeed(_) => "set_speed",
            Command::AdjustSpeed(_) => "adjust_speed",
            Command::SpeedUp => "speed_up",
            Command::SpeedDown => "speed_down",
            Command::Reset => "reset",
        }
    }

    pub fn argument(&self) -> Option<f64> {
        match *self {
            Command::SeekToTick(t) | Command::SetTick(t) => Some(t as f64),
            Command::SetSpeed(v) | Command::AdjustSpeed(v) => Some(v),
            _ => None,
        }
    }

    /// Builds a command from its action name and optional numeric argument.
    ///
    /// Tick arguments must be whole numbers.
    pub fn from_parts(name: &str, arg: Option<f64>) -> Result<Command, CommandError> {
        let Some(&(name, form)) = TABLE.iter().find(|(n, _)| *n == name) else {
            return Err(CommandError::UnknownCommand(name.to_string()));
        };

        match (form, arg) {
            (Form::Nullary(command), None) => Ok(command),
            (Form::Nullary(_), Some(_)) => {
                Err(CommandError::UnexpectedArgument(name.to_string()))
            }
            (Form::Tick(_) | Form::Speed(_), None) => Err(CommandError::MissingArgument(name)),
            (Form::Tick(make), Some(v)) => {
                whole_tick(v)
                    .map(make)
                    .ok_or_else(|| CommandError::InvalidArgument {
                        command: name.to_string(),
                        value: v.to_string(),
                    })
            }
            (Form::Speed(make), Some(v)) => Ok(make(v)),
        }
    }

    /// Applies the command to `clock`.
    pub fn apply(self, clock: &mut PlaybackClock) {
        log::debug!("command {self}");
        match self {
            Command::Play => clock.play(),
            Command::Pause => clock.pause(),
            Command::TogglePlay => clock.toggle_play(),
            Command::StepForward => clock.step_forward(),
            Command::StepBackward => clock.step_backward(),
            Command::SeekToStart => clock.seek_to_start(),
            Command::SeekToEnd => clock.seek_to_end(),
            Command::SeekToTick(t) => {
                clock.seek_to_tick(t);
            }
            Command::SetTick(t) => clock.set_tick(t),
            Command::SetSpeed(v) => {
                clock.set_speed(v);
            }
            Command::AdjustSpeed(d) => clock.adjust_speed(d),
            Command::SpeedUp => clock.speed_up(),
            Command::SpeedDown => clock.speed_down(),
            Command::Reset => clock.reset(),
        }
    }
}

fn whole_tick(v: f64) -> Option<i64> {
    // i64::MAX is not representable in f64; the strict upper bound keeps the cast exact.
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Splits `"name [argument]"` and parses the argument as a number.
///
/// Purely syntactic: whether `name` exists is up to the caller.
pub(crate) fn split_line(line: &str) -> Result<(&str, Option<f64>), CommandError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or(CommandError::Empty)?;
    let Some(raw) = parts.next() else {
        return Ok((name, None));
    };
    if parts.next().is_some() {
        return Err(CommandError::UnexpectedArgument(name.to_string()));
    }
    let value = raw.parse::<f64>().map_err(|_| CommandError::InvalidArgument {
        command: name.to_string(),
        value: raw.to_string(),
    })?;
    Ok((name, Some(value)))
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses `"name"` or `"name argument"`, e.g. `"seek_tick 12"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = split_line(s)?;
        Command::from_parts(name, arg)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SeekToTick(t) | Command::SetTick(t) => write!(f, "{} {t}", self.name()),
            Command::SetSpeed(v) | Command::AdjustSpeed(v) => write!(f, "{} {v}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_nullary_commands() {
        assert_eq!("play".parse::<Command>(), Ok(Command::Play));
        assert_eq!("  seek_end ".parse::<Command>(), Ok(Command::SeekToEnd));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
    }

    #[test]
    fn parses_arguments() {
        assert_eq!("seek_tick 12".parse::<Command>(), Ok(Command::SeekToTick(12)));
        assert_eq!("set_tick -4".parse::<Command>(), Ok(Command::SetTick(-4)));
        assert_eq!("set_speed 2.5".parse::<Command>(), Ok(Command::SetSpeed(2.5)));
        assert_eq!("adjust_speed -0.5".parse::<Command>(), Ok(Command::AdjustSpeed(-0.5)));
    }

    #[test]
    fn every_name_round_trips_through_display() {
        for name in Command::names() {
            let arg = match name {
                "seek_tick" | "set_tick" => Some(3.0),
                "set_speed" | "adjust_speed" => Some(1.5),
                _ => None,
            };
            let cmd = Command::from_parts(name, arg).unwrap();
            assert_eq!(cmd.name(), name);
            assert_eq!(cmd.argument(), arg);
            assert_eq!(cmd.to_string().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "rewind".parse::<Command>(),
            Err(CommandError::UnknownCommand("rewind".into()))
        );
        assert_eq!(
            "seek_tick".parse::<Command>(),
            Err(CommandError::MissingArgument("seek_tick"))
        );
        assert_eq!(
            "play 3".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("play".into()))
        );
        assert_eq!(
            "set_speed 1 2".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("set_speed".into()))
        );
        assert!(matches!(
            "seek_tick 1.5".parse::<Command>(),
            Err(CommandError::InvalidArgument { command, .. }) if command == "seek_tick"
        ));
        assert!(matches!(
            "set_speed fast".parse::<Command>(),
            Err(CommandError::InvalidArgument { command, .. }) if command == "set_speed"
        ));
        assert_eq!(
            "rewind 3".parse::<Command>(),
            Err(CommandError::UnknownCommand("rewind".into()))
        );
    }

    #[test]
    fn split_line_does_not_check_names() {
        assert_eq!(split_line("jump 6"), Ok(("jump", Some(6.0))));
        assert_eq!(split_line("  ping "), Ok(("ping", None)));
        assert_eq!(
            split_line("jump 1 2"),
            Err(CommandError::UnexpectedArgument("jump".into()))
        );
    }

    #[test]
    fn table_and_variants_agree() {
        let commands = [
            Command::Play,
            Command::Pause,
            Command::TogglePlay,
            Command::StepForward,
            Command::StepBackward,
            Command::SeekToStart,
            Command::SeekToEnd,
            Command::SeekToTick(2),
            Command::SetTick(2),
            Command::SetSpeed(2.0),
            Command::AdjustSpeed(2.0),
            Command::SpeedUp,
            Command::SpeedDown,
            Command::Reset,
        ];
        assert_eq!(commands.len(), Command::names().count());
        for cmd in commands {
            assert_eq!(Command::from_parts(cmd.name(), cmd.argument()), Ok(cmd));
        }
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_routes_to_clock() {
        let mut clock = PlaybackClock::new(10);
        Command::SeekToTick(4).apply(&mut clock);
        Command::StepForward.apply(&mut clock);
        assert_eq!(clock.tick(), 5);

        Command::SeekToTick(40).apply(&mut clock);
        assert_eq!(clock.tick(), 5);
        Command::SetTick(40).apply(&mut clock);
        assert_eq!(clock.tick(), 9);

        Command::SetSpeed(-1.0).apply(&mut clock);
        assert_eq!(clock.speed(), 3.0);
        Command::AdjustSpeed(-10.0).apply(&mut clock);
        assert_eq!(clock.speed(), 1.0);

        Command::TogglePlay.apply(&mut clock);
        assert!(clock.is_playing());
        Command::Reset.apply(&mut clock);
        assert_eq!(clock.tick(), 0);
    }
}
