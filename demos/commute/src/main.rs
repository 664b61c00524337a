//! Interactive commute simulation.
//!
//! # Usage
//!
//! ```bash
//! # One turn per Return key, text-adventure output
//! commute
//!
//! # Run to completion with a fixed seed, CSV records on stdout
//! commute --seed 7 --auto --format csv > run.csv
//!
//! # Start from a JSON config, override one field
//! commute --config commute.json --max-t 300
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ct_output::narrative::{PROMPT, farewell};
use ct_output::{CsvWriter, ReportObserver, StatusWriter, TextWriter};
use ct_sim::{Sim, SimBuilder, SimConfig, SimObserver, StopReason};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
}

/// Buses, commuters and ticket inspectors on a jammed road
#[derive(Parser, Debug)]
#[command(name = "commute")]
#[command(about = "Discrete-time simulation of a bus line, its commuters and its ticket inspectors")]
#[command(version)]
struct Args {
    /// JSON file with a simulation config; missing fields take their defaults
    #[arg(short, long)]
    config: Option<String>,

    /// RNG seed (entropy when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop once the clock passes this time
    #[arg(long)]
    max_t: Option<u64>,

    /// Time units per step
    #[arg(long)]
    delta_t: Option<u64>,

    /// Probability that a new actor is an inspector
    #[arg(long)]
    p_inspector: Option<f64>,

    /// Probability that a bus reaches its next stop in one step
    #[arg(long)]
    p_bus_advancement: Option<f64>,

    /// Actors spawned before the first turn
    #[arg(long)]
    initial_actors: Option<usize>,

    /// Buses placed before the first turn
    #[arg(long)]
    initial_buses: Option<usize>,

    /// Minimum time between two actor spawns
    #[arg(long)]
    spawn_delay: Option<u64>,

    /// A bus with more passengers than this is destroyed
    #[arg(long)]
    rage_threshold: Option<usize>,

    /// A stop with more waiting actors than this gets a new bus
    #[arg(long)]
    spawn_new_bus_threshold: Option<usize>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Run to completion without prompting between turns
    #[arg(long)]
    auto: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(Path::new(path))?,
            None => SimConfig {
                p_bus_advancement: 0.75,
                initial_actors: 10,
                ..SimConfig::default()
            },
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(v) = self.max_t {
            config.max_t = v;
        }
        if let Some(v) = self.delta_t {
            config.delta_t = v;
        }
        if let Some(v) = self.p_inspector {
            config.p_inspector = v;
        }
        if let Some(v) = self.p_bus_advancement {
            config.p_bus_advancement = v;
        }
        if let Some(v) = self.initial_actors {
            config.initial_actors = v;
        }
        if let Some(v) = self.initial_buses {
            config.initial_buses = v;
        }
        if let Some(v) = self.spawn_delay {
            config.spawn_delay = v;
        }
        if let Some(v) = self.rage_threshold {
            config.commuters_rage_threshold = v;
        }
        if let Some(v) = self.spawn_new_bus_threshold {
            config.spawn_new_bus_threshold = v;
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Where prompts and closing lines go: stdout for text reports, stderr when
/// stdout carries CSV.
struct Console {
    to_stdout: bool,
}

impl Console {
    fn say(&self, line: &str) {
        if self.to_stdout {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }

    /// Ask whether to go on.  `None` when stdin is closed.
    fn ask(&self) -> Result<Option<String>> {
        if self.to_stdout {
            print!("{PROMPT}");
            io::stdout().flush()?;
        } else {
            eprint!("{PROMPT}");
        }
        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

fn drive<W: StatusWriter>(sim: &mut Sim, writer: W, console: &Console, mut auto: bool) -> Result<()> {
    let mut obs = ReportObserver::new(writer);
    obs.welcome(sim.route(), &sim.snapshot());

    while sim.run_turn(&mut obs) {
        if let Some(e) = obs.take_error() {
            return Err(e).context("writing turn report");
        }
        if auto {
            continue;
        }
        match console.ask()? {
            Some(answer) if !answer.is_empty() => {
                sim.stop();
                obs.on_sim_end(sim.clock(), StopReason::UserStopped);
                break;
            }
            Some(_) => {}
            None => {
                tracing::info!("stdin closed, running to completion");
                auto = true;
            }
        }
    }

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing final report");
    }
    tracing::info!(
        time = sim.clock().0,
        reason = ?sim.stop_reason(),
        actors = sim.actors().len(),
        buses = sim.fleet().len(),
        "run complete"
    );
    // Text reports already end with the stop reason.
    for line in farewell(sim.stop_reason(), console.to_stdout) {
        console.say(line);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = args.sim_config()?;
    tracing::debug!(?config, "configuration resolved");
    let mut sim = SimBuilder::new(config)
        .build()
        .context("invalid simulation configuration")?;

    match args.format {
        Format::Text => {
            let console = Console { to_stdout: true };
            drive(&mut sim, TextWriter::new(io::stdout()), &console, args.auto)
        }
        Format::Csv => {
            let console = Console { to_stdout: false };
            let writer = CsvWriter::new(io::stdout()).context("writing CSV header")?;
            drive(&mut sim, writer, &console, args.auto)
        }
    }
}
