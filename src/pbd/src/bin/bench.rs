use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use pbd::metrics::{run_sweep, SweepConfig};
use pbd::PbdResult;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
	Csv,
	Json,
}

/// Times the cloth over resolution and substep sweeps.
#[derive(Parser)]
#[command(name = "bench", version)]
struct Cli {
	/// Frames per configuration.
	#[arg(short, long, default_value_t = 100)]
	frames: usize,

	/// Resolutions (cells per side) for the resolution sweep.
	#[arg(long, value_delimiter = ',', default_value = "5,10,15,20")]
	resolutions: Vec<usize>,

	/// Substep counts for the substep sweep.
	#[arg(long, value_delimiter = ',', default_value = "1,2,5,10")]
	substeps: Vec<usize>,

	#[arg(long, value_enum, default_value = "csv")]
	format: Format,

	/// Write the report here instead of stdout.
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn run(cli: Cli) -> PbdResult<()> {
	let sweep = SweepConfig {
		frames: cli.frames,
		resolutions: cli.resolutions,
		substeps: cli.substeps,
		..Default::default()
	};
	let report = run_sweep(&sweep)?;
	let text = match cli.format {
		Format::Csv => report.to_csv(),
		Format::Json => report.to_json()?,
	};
	match cli.output {
		Some(path) => {
			std::fs::write(&path, text)?;
			info!(path = %path.display(), "report written");
		}
		None => println!("{}", text),
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
		error!(error = %e, "bench failed");
		std::process::exit(1);
	}
}
