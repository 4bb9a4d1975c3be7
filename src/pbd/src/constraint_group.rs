use crate::constraint::CRef;
use crate::particle_group::ParticleGroup;

/// Constraints in solve order.
#[derive(Clone, Debug, Default)]
pub struct ConstraintGroup {
	constraints: Vec<CRef>,
}

impl ConstraintGroup {
	pub fn add_constraint(&mut self, constraint: CRef) -> usize {
		self.constraints.push(constraint);
		self.constraints.len() - 1
	}

	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	/// One Gauss-Seidel sweep in insertion order.
	///
	/// Sequential on purpose: each projection reads the positions left by
	/// the previous ones, so reordering the constraints changes the result.
	pub fn solve(&self, pg: &mut ParticleGroup) {
		let particles = pg.as_mut_slice();
		for constraint in self.constraints.iter() {
			constraint.project(particles);
		}
	}

	pub fn total_error(&self, pg: &ParticleGroup) -> f32 {
		let particles = pg.as_slice();
		self.constraints.iter().map(|c| c.error(particles)).sum()
	}

	pub fn max_stretch(&self, pg: &ParticleGroup) -> f32 {
		let particles = pg.as_slice();
		self.constraints
			.iter()
			.map(|c| c.stretch(particles))
			.fold(0.0, f32::max)
	}

	pub fn topology(&self) -> Vec<Vec<usize>> {
		self.constraints
			.iter()
			.map(|c| c.particles().to_vec())
			.collect()
	}
}
