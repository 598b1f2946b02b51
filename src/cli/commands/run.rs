//! Run command implementation.
//!
//! A headless countdown: the current terminal line is redrawn once per
//! second until the requested number of phases has completed.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration as StdDuration, Instant};

use chrono::{Duration, Local};
use colored::Colorize;
use log::info;

use crate::cli::args::{OutputFormat, SessionArgs};
use crate::cli::commands::session_durations;
use crate::config::Config;
use crate::error::PomoError;
use crate::focus::{format_clock_duration, format_minutes, Bell, Counter, SessionEngine, Ticker};
use crate::output::{format_report, format_status_line, SessionReport};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if writing to the terminal or formatting output fails.
pub fn run(config: &Config, args: &SessionArgs, format: OutputFormat) -> Result<String, PomoError> {
    let mut engine = SessionEngine::with_durations(session_durations(config, &args.durations));
    if config.notifications.bell && !args.quiet {
        engine.subscribe(Box::new(Bell::stdout()));
    }
    let durations = engine.durations();
    let mut runner = Runner::new(engine, args.phases);

    let mut out = io::stdout();
    runner.start(Instant::now());
    info!("run started with phase limit {:?}", args.phases);

    if format == OutputFormat::Pretty {
        writeln!(
            out,
            "{} {} focus, {} break (started {})",
            "▶".green(),
            format_minutes(durations.focus_minutes()),
            format_minutes(durations.break_minutes()),
            Local::now().format("%H:%M")
        )?;
    }
    render(&mut out, &runner.engine, runner.phases_completed(), format)?;

    while runner.is_running() {
        if let Some(wait) = runner.time_until_tick(Instant::now()) {
            thread::sleep(wait);
        }
        runner.on_time(Instant::now(), |engine, phases| {
            render(&mut out, engine, phases, format)
        })?;
    }

    let report = runner.report();
    match format {
        OutputFormat::Json => format_report(&report, format),
        OutputFormat::Pretty => {
            writeln!(out)?;
            Ok(format!(
                "{} Session finished: {} phase{} completed in {}",
                "■".red(),
                report.phases_completed,
                if report.phases_completed == 1 { "" } else { "s" },
                format_clock_duration(runner.elapsed())
            ))
        }
    }
}

/// Drives an engine from wall-clock time until an optional phase limit.
struct Runner {
    engine: SessionEngine,
    ticker: Ticker,
    phases: Counter,
    limit: Option<u32>,
    /// Session time at the last applied tick; survives the final stop.
    elapsed: Duration,
}

impl Runner {
    fn new(mut engine: SessionEngine, limit: Option<u32>) -> Self {
        let phases = Counter::new();
        engine.subscribe(Box::new(phases.clone()));
        Self {
            engine,
            ticker: Ticker::new(),
            phases,
            limit,
            elapsed: Duration::zero(),
        }
    }

    fn start(&mut self, now: Instant) {
        self.engine.start_configured();
        self.ticker.arm(now);
    }

    fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    fn phases_completed(&self) -> u64 {
        self.phases.count()
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn time_until_tick(&self, now: Instant) -> Option<StdDuration> {
        self.ticker.time_until(now)
    }

    /// Apply every tick due by `now`, handing each one to `on_tick`.
    ///
    /// Reaching the phase limit stops the engine and cancels the ticker; the
    /// tick that crossed the limit is not emitted.
    fn on_time(
        &mut self,
        now: Instant,
        mut on_tick: impl FnMut(&SessionEngine, u64) -> Result<(), PomoError>,
    ) -> Result<(), PomoError> {
        for _ in 0..self.ticker.poll(now) {
            self.elapsed = self.engine.tick().elapsed();
            if self.limit_reached() {
                info!("phase limit reached after {} ticks", self.elapsed.num_seconds());
                self.engine.stop();
                break;
            }
            on_tick(&self.engine, self.phases.count())?;
        }
        if !self.engine.is_running() {
            self.ticker.cancel();
        }
        Ok(())
    }

    fn limit_reached(&self) -> bool {
        self.limit
            .is_some_and(|limit| self.phases.count() >= u64::from(limit))
    }

    /// Snapshot of the engine as it stands now, stopped or not.
    fn report(&self) -> SessionReport {
        SessionReport::from_engine(&self.engine, self.phases.count())
    }
}

fn render(
    out: &mut impl Write,
    engine: &SessionEngine,
    phases_completed: u64,
    format: OutputFormat,
) -> Result<(), PomoError> {
    match format {
        OutputFormat::Pretty => {
            // \r + erase-to-end-of-line keeps the countdown on one line
            write!(out, "\r{}\x1b[K", format_status_line(engine))?;
        }
        OutputFormat::Json => {
            let report = SessionReport::from_engine(engine, phases_completed);
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
