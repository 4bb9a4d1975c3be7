use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, error, info, warn};

use pbd::time_manager::{FrameClock, TimeModel};
use pbd::{ClothConfig, ClothWorld, PbdResult};
use protocol::frame_info::FrameInfo;

/// Drops a cloth pinned at two corners and writes the final shape.
#[derive(Parser)]
#[command(name = "drape", version)]
struct Cli {
	/// JSON cloth configuration; flags below override it.
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long)]
	px: Option<usize>,

	#[arg(long)]
	py: Option<usize>,

	#[arg(long)]
	substeps: Option<usize>,

	#[arg(long)]
	damping: Option<f32>,

	#[arg(short, long, default_value_t = 300)]
	frames: u64,

	/// Pace frames to wall-clock time instead of running flat out.
	#[arg(long)]
	realtime: bool,

	/// Where to write the final snapshot (JSON). Defaults to stdout.
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> PbdResult<ClothConfig> {
	let mut config = match &cli.config {
		Some(path) => {
			ClothConfig::from_json_str(&std::fs::read_to_string(path)?)?
		}
		None => ClothConfig::default(),
	};
	if let Some(px) = cli.px {
		config.px = px;
	}
	if let Some(py) = cli.py {
		config.py = py;
	}
	if let Some(substeps) = cli.substeps {
		config.substeps = substeps;
	}
	if let Some(damping) = cli.damping {
		config.damping = damping;
	}
	Ok(config)
}

fn run(cli: Cli) -> PbdResult<()> {
	let config = load_config(&cli)?;
	let mut world = ClothWorld::try_new(&config)?;
	let model = if cli.realtime {
		TimeModel::RtFrameLock
	} else {
		TimeModel::VideoRender
	};
	let mut clock = FrameClock::new(config.dt, model);
	let budget_ms = config.dt * 1e3;
	let mut total_ms = 0f32;

	for _ in 0..cli.frames {
		let dt = clock.take_time();
		let start = Instant::now();
		world.step(dt, config.substeps);
		let info = FrameInfo {
			frame: world.frame(),
			step_ms: start.elapsed().as_secs_f32() * 1e3,
			particle_len: world.particle_len(),
			constraint_len: world.constraint_len(),
		};
		total_ms += info.step_ms;
		debug!(
			frame = info.frame,
			step_ms = info.step_ms,
			load = info.load(budget_ms),
			"frame"
		);
		if !world.is_finite() {
			warn!(frame = info.frame, "non-finite particle state, stopping");
			break;
		}
		if info.frame % 60 == 0 {
			info!(
				frame = info.frame,
				error = world.constraint_error(),
				stretch = world.max_stretch(),
				energy = world.kinetic_energy(),
				"progress"
			);
		}
	}
	info!(
		frames = world.frame(),
		avg_step_ms = total_ms / world.frame().max(1) as f32,
		"done"
	);

	let snapshot = serde_json::to_string(&world.pr_model())?;
	match cli.output {
		Some(path) => std::fs::write(path, snapshot)?,
		None => println!("{}", snapshot),
	}
	Ok(())
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run(Cli::parse()) {
		error!(error = %e, "drape failed");
		std::process::exit(1);
	}
}
