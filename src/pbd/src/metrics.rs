//! Parameter sweeps with wall-clock timing.
//!
//! Every configuration gets its own freshly built cloth, and runs happen
//! one after another, so timings are comparable. Nothing here feeds back
//! into the simulation.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ClothConfig;
use crate::error::PbdResult;
use crate::world::ClothWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepKind {
	/// Lattice resolution varies, substeps fixed.
	Resolution,
	/// Substep count varies, lattice fixed.
	Substeps,
}

impl SweepKind {
	pub fn name(&self) -> &'static str {
		match self {
			SweepKind::Resolution => "resolution",
			SweepKind::Substeps => "substeps",
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
	pub width: f32,
	pub height: f32,
	pub damping: f32,
	/// Cells per side; a resolution `r` lattice has `(r + 1)^2` particles.
	pub resolutions: Vec<usize>,
	pub substeps: Vec<usize>,
	pub frames: usize,
	pub dt: f32,
	/// Substeps used by the resolution sweep.
	pub resolution_substeps: usize,
	/// Resolution used by the substep sweep.
	pub substep_resolution: usize,
}

impl Default for SweepConfig {
	fn default() -> Self {
		Self {
			width: 10.0,
			height: 10.0,
			damping: 0.999,
			resolutions: vec![5, 10, 15, 20],
			substeps: vec![1, 2, 5, 10],
			frames: 100,
			dt: 1.0 / 60.0,
			resolution_substeps: 10,
			substep_resolution: 15,
		}
	}
}

impl SweepConfig {
	fn cloth(&self, resolution: usize, substeps: usize) -> ClothConfig {
		ClothConfig::default()
			.with_size(self.width, self.height)
			.with_resolution(resolution + 1, resolution + 1)
			.with_damping(self.damping)
			.with_substeps(substeps)
	}

	/// Every (resolution, substeps) pair the sweep will run, in order.
	pub fn runs(&self) -> Vec<(SweepKind, ClothConfig)> {
		let mut runs = Vec::new();
		for &r in self.resolutions.iter() {
			runs.push((
				SweepKind::Resolution,
				self.cloth(r, self.resolution_substeps),
			));
		}
		for &s in self.substeps.iter() {
			runs.push((SweepKind::Substeps, self.cloth(self.substep_resolution, s)));
		}
		runs
	}

	pub fn validate(&self) -> PbdResult<()> {
		for (_, mut config) in self.runs() {
			config.dt = self.dt;
			config.validate()?;
		}
		Ok(())
	}
}

/// One timed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
	pub kind: SweepKind,
	pub resolution: usize,
	pub substeps: usize,
	pub frames: usize,
	pub elapsed_ms: f64,
	pub avg_frame_ms: f64,
	pub particle_len: usize,
	pub constraint_len: usize,
	pub final_error: f32,
	pub max_stretch: f32,
}

impl RunMetrics {
	pub fn to_csv_header() -> String {
		"kind,resolution,substeps,frames,elapsed_ms,avg_frame_ms,particles,constraints,final_error,max_stretch".to_string()
	}

	pub fn to_csv_row(&self) -> String {
		format!(
			"{},{},{},{},{:.4},{:.4},{},{},{:.6},{:.4}",
			self.kind.name(),
			self.resolution,
			self.substeps,
			self.frames,
			self.elapsed_ms,
			self.avg_frame_ms,
			self.particle_len,
			self.constraint_len,
			self.final_error,
			self.max_stretch,
		)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepReport {
	pub runs: Vec<RunMetrics>,
}

impl SweepReport {
	pub fn by_kind(&self, kind: SweepKind) -> impl Iterator<Item = &RunMetrics> {
		self.runs.iter().filter(move |m| m.kind == kind)
	}

	pub fn to_csv(&self) -> String {
		let mut csv = RunMetrics::to_csv_header();
		for m in self.runs.iter() {
			csv.push('\n');
			csv.push_str(&m.to_csv_row());
		}
		csv
	}

	pub fn to_json(&self) -> PbdResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// Builds a cloth from `config` and times `frames` steps of `dt`.
pub fn run_config(
	kind: SweepKind,
	config: &ClothConfig,
	frames: usize,
	dt: f32,
) -> RunMetrics {
	let start = Instant::now();
	let mut world = ClothWorld::new(config);
	for _ in 0..frames {
		world.step(dt, config.substeps);
	}
	let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
	let avg_frame_ms = if frames == 0 {
		0.0
	} else {
		elapsed_ms / frames as f64
	};
	RunMetrics {
		kind,
		resolution: config.px - 1,
		substeps: config.substeps,
		frames,
		elapsed_ms,
		avg_frame_ms,
		particle_len: world.particle_len(),
		constraint_len: world.constraint_len(),
		final_error: world.constraint_error(),
		max_stretch: world.max_stretch(),
	}
}

pub fn run_sweep(sweep: &SweepConfig) -> PbdResult<SweepReport> {
	sweep.validate()?;
	let mut report = SweepReport::default();
	for (kind, config) in sweep.runs() {
		let metrics = run_config(kind, &config, sweep.frames, sweep.dt);
		info!(
			kind = kind.name(),
			resolution = metrics.resolution,
			substeps = metrics.substeps,
			elapsed_ms = metrics.elapsed_ms,
			"run finished"
		);
		report.runs.push(metrics);
	}
	Ok(report)
}
