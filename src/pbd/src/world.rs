use tracing::info;

use crate::config::ClothConfig;
use crate::constraint_group::ConstraintGroup;
use crate::error::PbdResult;
use crate::integrator::SemiImplicitEuler;
use crate::particle_group::ParticleGroup;
use crate::physical_model::PhysicalModel;
use crate::V3;
use protocol::pr_model::PrModel;

/// A cloth simulation: owns the particle buffer and the constraints that
/// index into it.
#[derive(Clone, Debug)]
pub struct ClothWorld {
	pub dt: f32,
	pub substeps: usize,
	px: usize,
	py: usize,
	// steps taken, reported in snapshots only
	frame: u64,

	pg: ParticleGroup,
	cg: ConstraintGroup,
	integrator: SemiImplicitEuler,
}

impl Default for ClothWorld {
	fn default() -> Self {
		Self::new(&ClothConfig::default())
	}
}

impl ClothWorld {
	/// Builds the lattice described by `config` without validating it.
	pub fn new(config: &ClothConfig) -> Self {
		let g = config.gravity;
		let model = PhysicalModel::new_lattice(
			config.width,
			config.height,
			config.px,
			config.py,
			config.mass,
			V3::new(g[0], g[1], g[2]),
		)
		.with_pinning(&config.pinning);
		Self::from_model(model)
			.with_damping(config.damping)
			.with_dt(config.dt)
			.with_substeps(config.substeps)
	}

	pub fn try_new(config: &ClothConfig) -> PbdResult<Self> {
		config.validate()?;
		Ok(Self::new(config))
	}

	pub fn from_model(physical_model: PhysicalModel) -> Self {
		let pg = ParticleGroup::new(physical_model.particles);
		let mut cg = ConstraintGroup::default();
		for c in physical_model.constraints.into_iter() {
			cg.add_constraint(c);
		}
		info!(
			px = physical_model.px,
			py = physical_model.py,
			particles = pg.len(),
			pinned = pg.pinned_len(),
			constraints = cg.len(),
			"cloth built"
		);
		let defaults = ClothConfig::default();
		Self {
			dt: defaults.dt,
			substeps: defaults.substeps,
			px: physical_model.px,
			py: physical_model.py,
			frame: 0,
			pg,
			cg,
			integrator: SemiImplicitEuler::new(defaults.damping),
		}
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.integrator = SemiImplicitEuler::new(damping);
		self
	}

	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_substeps(mut self, substeps: usize) -> Self {
		self.substeps = substeps;
		self
	}

	/// Advances the cloth by `dt`, split into `substeps` equal substeps.
	///
	/// Each substep integrates forces, runs one constraint sweep and then
	/// rebuilds velocities from the corrected positions. More substeps
	/// means a stiffer cloth at linear cost. `dt == 0` or no substeps
	/// leaves the state untouched.
	pub fn step(&mut self, dt: f32, substeps: usize) {
		if dt == 0f32 || substeps == 0 {
			return;
		}
		let sub_dt = dt / substeps as f32;
		for _ in 0..substeps {
			self.integrator.apply_forces(&mut self.pg, sub_dt);
			self.cg.solve(&mut self.pg);
			self.integrator.update_velocities(&mut self.pg, sub_dt);
		}
		self.frame += 1;
	}

	// one frame at the configured cadence
	pub fn run(&mut self) {
		self.step(self.dt, self.substeps);
	}

	pub fn read_positions(&self) -> Vec<[f32; 3]> {
		self.pg.positions()
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			px: self.px,
			py: self.py,
			frame: self.frame,
			particles: self.pg.pr_particles(),
		}
	}

	pub fn dims(&self) -> (usize, usize) {
		(self.px, self.py)
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn damping(&self) -> f32 {
		self.integrator.get_damping()
	}

	pub fn particles(&self) -> &ParticleGroup {
		&self.pg
	}

	pub fn particles_mut(&mut self) -> &mut ParticleGroup {
		&mut self.pg
	}

	pub fn particle_len(&self) -> usize {
		self.pg.len()
	}

	pub fn constraint_len(&self) -> usize {
		self.cg.len()
	}

	pub fn topology(&self) -> Vec<Vec<usize>> {
		self.cg.topology()
	}

	/// Sum of `|length - rest length|` over all constraints.
	pub fn constraint_error(&self) -> f32 {
		self.cg.total_error(&self.pg)
	}

	pub fn max_stretch(&self) -> f32 {
		self.cg.max_stretch(&self.pg)
	}

	pub fn kinetic_energy(&self) -> f32 {
		self.pg.kinetic_energy()
	}

	pub fn is_finite(&self) -> bool {
		self.pg.is_finite()
	}
}
