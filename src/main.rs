use anyhow::Result;
use clap::Parser;
use log::info;
use std::time::{Duration, Instant};

use intersection_sim::{
    config::SimulationConfig,
    simulation::{FrameSnapshot, PerformanceTracker, SimulationState},
    compute::{CpuBackend, SimulationBackend},
};

#[derive(Parser)]
#[command(name = "intersection-sim")]
#[command(about = "Signalized four-way intersection traffic simulation")]
struct Args {
    /// Intersection configuration file (geometry and signal timing)
    #[arg(short, long, requires = "vehicles")]
    intersection: Option<String>,

    /// Vehicles configuration file (dimensions, speed and spawning)
    #[arg(short = 'c', long, requires = "intersection")]
    vehicles: Option<String>,

    /// Simulated seconds to run before stopping
    #[arg(short, long, default_value_t = 60.0)]
    duration: f32,

    /// Ticks per simulated second
    #[arg(short, long, default_value_t = 30.0)]
    fps: f32,

    /// Random seed for spawn jitter
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pace ticks to wall-clock time and step by the measured frame delta
    #[arg(short, long)]
    realtime: bool,

    /// Print the final frame snapshot as TOML
    #[arg(long)]
    snapshot: bool,

    /// Enable verbose logging for detailed simulation progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();
    info!("Starting Intersection Simulator (Console Mode)");

    let config = match (&args.intersection, &args.vehicles) {
        (Some(intersection), Some(vehicles)) => {
            info!("Loading configuration from {} and {}", intersection, vehicles);
            SimulationConfig::load_from_files(intersection, vehicles)?
        }
        _ => {
            info!("No configuration files given, using built-in defaults");
            let config = SimulationConfig::default();
            config.validate()?;
            config
        }
    };

    if args.fps <= 0.0 {
        anyhow::bail!("Tick rate must be positive, got {}", args.fps);
    }

    let timing = &config.intersection.signals;
    info!(
        "Signal cycle: {:.1}s green, {:.1}s yellow, {:.1}s total",
        timing.green_time,
        timing.yellow_time,
        timing.cycle_length()
    );

    let dt = 1.0 / args.fps;
    let mut state = SimulationState::new(dt);
    let mut backend = CpuBackend::new(&config, args.seed);
    info!("Compute backend: {}", backend.get_name());

    let mut performance_tracker = PerformanceTracker::new(60);
    let target_frame_time = Duration::from_secs_f32(dt);
    let mut last_frame = Instant::now();
    let mut last_report = 0.0f32;
    let mut frame_count: u64 = 0;

    info!("Running simulation for {:.1} simulated seconds...", args.duration);

    // Termination is only checked between ticks.
    while state.time < args.duration {
        performance_tracker.start_frame();

        if args.realtime {
            let now = Instant::now();
            state.dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
        }

        performance_tracker.start_simulation();
        backend.update(&mut state)?;
        performance_tracker.end_simulation();

        frame_count += 1;

        if state.time - last_report >= 1.0 {
            let counts = state.approach_counts();
            info!(
                "t={:.1}s NS={:?} EW={:?} | {} active (S{} N{} W{} E{}) | {} spawned, {} exited | sim {:.3}ms",
                state.time,
                state.signals.north_south,
                state.signals.east_west,
                state.active_vehicles(),
                counts[0],
                counts[1],
                counts[2],
                counts[3],
                state.total_spawned,
                state.total_exited,
                performance_tracker.average_simulation_time().as_secs_f64() * 1000.0
            );
            last_report = state.time;
        }

        if args.realtime {
            let elapsed = last_frame.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        performance_tracker.end_frame();
    }

    info!("Simulation completed!");
    info!("Total frames: {}", frame_count);
    info!("Simulated time: {:.2}s", state.time);
    if args.realtime {
        info!("Average FPS: {:.1}", performance_tracker.fps());
    }
    info!(
        "Final vehicle count: {} active, {} total spawned, {} exited",
        state.active_vehicles(),
        state.total_spawned,
        state.total_exited
    );

    if args.snapshot {
        println!("{}", toml::to_string(&FrameSnapshot::capture(&state))?);
    }

    Ok(())
}
