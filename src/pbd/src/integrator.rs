//! Per-substep time integration.
//!
//! `apply_forces` runs before the constraint sweep and `update_velocities`
//! after it. Velocity is rebuilt from the realized displacement, so
//! whatever the sweep did to positions ends up in the next substep's
//! momentum.

use crate::particle_group::ParticleGroup;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemiImplicitEuler {
	damping: f32,
}

impl Default for SemiImplicitEuler {
	fn default() -> Self {
		Self { damping: 1.0 }
	}
}

impl SemiImplicitEuler {
	pub fn new(damping: f32) -> Self {
		Self { damping }
	}

	pub fn get_damping(&self) -> f32 {
		self.damping
	}

	/// `prev = pos; vel += force * imass * dt; pos += vel * dt`
	pub fn apply_forces(&self, pg: &mut ParticleGroup, dt: f32) {
		for p in pg.iter_mut() {
			p.integrate(dt);
		}
	}

	/// `vel = (pos - prev) / dt * damping`
	pub fn update_velocities(&self, pg: &mut ParticleGroup, dt: f32) {
		for p in pg.iter_mut() {
			p.reconcile_velocity(dt, self.damping);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle::Particle;
	use crate::V3;

	#[test]
	fn test_free_fall_substep() {
		let g = V3::new(0., -10., 0.);
		let mut pg = ParticleGroup::new(vec![
			Particle::new(V3::zeros(), 1., g),
			Particle::new(V3::new(1., 0., 0.), f32::INFINITY, g),
		]);
		let euler = SemiImplicitEuler::new(0.5);
		let dt = 0.1;
		euler.apply_forces(&mut pg, dt);
		let p = pg.get(0).unwrap();
		assert!((p.get_vel()[1] + 1.0).abs() < 1e-6);
		assert!((p.get_pos()[1] + 0.1).abs() < 1e-6);

		euler.update_velocities(&mut pg, dt);
		// damping acts on the reconciled velocity only
		let p = pg.get(0).unwrap();
		assert!((p.get_vel()[1] + 0.5).abs() < 1e-5);

		let pinned = pg.get(1).unwrap();
		assert_eq!(pinned.get_pos(), V3::new(1., 0., 0.));
		assert_eq!(pinned.get_vel(), V3::zeros());
	}
}
