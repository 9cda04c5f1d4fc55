use std::collections::VecDeque;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use tickplay_engine::logging::{init_logging, LoggingConfig};
use tickplay_engine::time::{ManualClock, TimeSource, WallClock};
use tickplay_engine::timeline::{FixedTimeline, ReplaySummary, TimelineSource};
use tickplay_engine::{Command, FrameReport, PlaybackSession};

#[derive(Debug, Parser)]
#[command(name = "tickplay-studio")]
#[command(about = "Headless playback driver for tick-indexed replays")]
struct Cli {
    /// Replay summary JSON (`total_ticks` or a `ticks` array, optional `winner`).
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Timeline length when no replay is given.
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Winner label when no replay is given.
    #[arg(long)]
    winner: Option<String>,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Wall time to simulate, in seconds.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Initial speed in ticks per second.
    #[arg(long)]
    speed: Option<f64>,

    /// Scheduled command `<ms>:<command>`, e.g. `0:play` or `1500:seek_tick 4`.
    /// Repeatable. Defaults to `0:play`.
    #[arg(long = "at", value_parser = parse_scheduled)]
    at: Vec<Scheduled>,

    /// Pace frames against the wall clock instead of simulated time.
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Log filter (env_logger syntax). Falls back to RUST_LOG, then `info`.
    #[arg(long)]
    log: Option<String>,
}

#[derive(Debug, Clone)]
struct Scheduled {
    at_ms: f64,
    command: Command,
}

fn parse_scheduled(raw: &str) -> Result<Scheduled, String> {
    let (at, line) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <ms>:<command>, got '{raw}'"))?;
    let at_ms = at
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid time '{at}'"))?;
    if !(at_ms.is_finite() && at_ms >= 0.0) {
        return Err(format!("time must be a non-negative number, got '{at}'"));
    }
    let command = line.parse::<Command>().map_err(|e| e.to_string())?;
    Ok(Scheduled { at_ms, command })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let source: Box<dyn TimelineSource> = match &cli.replay {
        Some(path) => Box::new(ReplaySummary::load(path)?),
        None => Box::new(FixedTimeline {
            total_ticks: cli.ticks,
            winner: cli.winner.clone(),
        }),
    };

    let outcome = run(&cli, source).context("playback failed")?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║           TICKPLAY STUDIO v0.1         ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  frames    {:>10}                  ║", outcome.frames);
    println!("  ║  tick      {:>10} / {:<10}     ║", outcome.last.sample.tick, outcome.last.total_ticks);
    println!("  ║  progress  {:>10.3}                  ║", outcome.last.sample.progress);
    println!("  ║  speed     {:>10.2}                  ║", outcome.last.speed);
    println!("  ║  state     {:>10}                  ║", format!("{:?}", outcome.last.phase));
    println!("  ╚════════════════════════════════════════╝");
    if let Some(winner) = &outcome.last.winner {
        println!("  Winner: {winner}");
    }
    println!();

    Ok(())
}

struct Outcome {
    frames: u64,
    last: FrameReport,
}

fn run(cli: &Cli, source: Box<dyn TimelineSource>) -> Result<Outcome> {
    anyhow::ensure!(cli.fps > 0, "--fps must be positive");
    anyhow::ensure!(
        cli.seconds.is_finite() && cli.seconds >= 0.0,
        "--seconds must be a non-negative number"
    );

    let mut session = PlaybackSession::new(source);
    if let Some(speed) = cli.speed {
        anyhow::ensure!(
            session.clock_mut().set_speed(speed),
            "--speed must be a positive number, got {speed}"
        );
    }

    let mut schedule: Vec<Scheduled> = if cli.at.is_empty() {
        vec![Scheduled {
            at_ms: 0.0,
            command: Command::Play,
        }]
    } else {
        cli.at.clone()
    };
    schedule.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
    let mut schedule = VecDeque::from(schedule);

    let mut time: Box<dyn TimeSource> = if cli.realtime {
        Box::new(WallClock::new())
    } else {
        Box::new(ManualClock::at_fps(cli.fps))
    };
    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    let end_ms = cli.seconds * 1000.0;

    log::info!(
        "playing {} ticks at {} fps for {:.1}s ({})",
        session.clock().total_ticks(),
        cli.fps,
        cli.seconds,
        if cli.realtime { "realtime" } else { "simulated" }
    );

    let mut frames = 0u64;
    let mut last = session.frame(0.0);
    let mut winner_shown = false;

    loop {
        let ft = time.frame();
        if ft.now_ms > end_ms {
            break;
        }

        while schedule.front().is_some_and(|s| s.at_ms <= ft.now_ms) {
            if let Some(s) = schedule.pop_front() {
                log::info!("t={:>7.1}ms  > {}", ft.now_ms, s.command);
                session.apply(s.command);
            }
        }

        let report = session.frame(ft.now_ms);
        frames += 1;

        if report.sample.tick != last.sample.tick || report.phase != last.phase {
            log::info!(
                "t={:>7.1}ms  tick {:>5}  progress {:.3}  {:?}",
                ft.now_ms,
                report.sample.tick,
                report.sample.progress,
                report.phase
            );
        }
        match (&report.winner, winner_shown) {
            (Some(w), false) => {
                log::info!("winner: {w}");
                winner_shown = true;
            }
            (None, true) => winner_shown = false,
            _ => {}
        }

        let idle = !report.is_playing() && schedule.is_empty();
        last = report;
        if idle {
            log::debug!("paused with nothing scheduled; stopping");
            break;
        }

        if cli.realtime {
            thread::sleep(frame_budget);
        }
    }

    Ok(Outcome { frames, last })
}
