pub mod distance;

use dyn_clone::DynClone;

use crate::particle::Particle;

pub trait Constraint: DynClone + std::fmt::Debug {
	/// Moves the constrained particles in place. Corrections are visible
	/// to every constraint projected after this one.
	fn project(&self, particles: &mut [Particle]);

	// absolute violation, 0 when satisfied
	fn error(&self, particles: &[Particle]) -> f32;

	fn stretch(&self, particles: &[Particle]) -> f32;

	fn particles(&self) -> &[usize];
}

dyn_clone::clone_trait_object!(Constraint);

pub type CRef = Box<dyn Constraint>;
