use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::info;
use mars_orbiter::*;

/// Flies an uncontrolled Mars Orbiter mission and prints its telemetry.
#[derive(Parser, Debug)]
#[command(name = "mars-orbiter", version)]
struct Args {
    /// TOML file overriding the default mission parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the starting position and drift direction
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated mission length in seconds
    #[arg(long, default_value_t = 60)]
    seconds: u64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Ticks between telemetry log lines
    #[arg(long, default_value_t = 60)]
    log_interval: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MissionConfig::load(path)?,
        None => MissionConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");

    let total_ticks = config.ticks_in(args.seconds)?;
    let mut telemetry = Telemetry::new(config.tick_rate, args.log_interval);
    let mut clock = FixedStepClock::new(config.tick_rate, 5);
    let mut simulation = Simulation::with_seed(config, seed)?;
    let mut presenter = LogPresenter::new();
    let input = TickInput::idle();

    let mut last_frame = Instant::now();
    while simulation.is_running() && telemetry.ticks() < total_ticks {
        let due = if args.realtime {
            let now = Instant::now();
            let due = clock.advance(now - last_frame);
            last_frame = now;
            u64::from(due).min(total_ticks - telemetry.ticks())
        } else {
            1
        };

        for _ in 0..due {
            let report = simulation.tick(&input, &mut presenter);
            telemetry.collect_data(&report, &simulation.snapshot());
        }

        if args.realtime {
            thread::sleep(clock.until_next_tick());
        }
    }

    telemetry.display_data();
    info!("{} path segments drawn", presenter.segments_drawn());

    Ok(())
}
