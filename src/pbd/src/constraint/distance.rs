use crate::constraint::{CRef, Constraint};
use crate::particle::Particle;

/// Inextensible edge between two particles of the same buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint {
	ps: [usize; 2],
	l0: f32,
}

impl DistanceConstraint {
	/// Rest length is the current distance between the two particles.
	pub fn new(particles: &[Particle], p1: usize, p2: usize) -> Self {
		let pos1 = particles[p1].get_pos();
		let pos2 = particles[p2].get_pos();
		let l0 = (pos1 - pos2).magnitude();
		Self::new_with_l0(p1, p2, l0)
	}

	pub fn new_with_l0(p1: usize, p2: usize, l0: f32) -> Self {
		Self { ps: [p1, p2], l0 }
	}

	pub fn get_l0(&self) -> f32 {
		self.l0
	}

	pub fn build(self) -> CRef {
		Box::new(self)
	}
}

impl Constraint for DistanceConstraint {
	fn project(&self, particles: &mut [Particle]) {
		let [i1, i2] = self.ps;
		let dp = particles[i1].get_pos() - particles[i2].get_pos();
		let l = dp.magnitude();
		// coincident, no direction to correct along
		if l == 0.0 {
			return;
		}
		let correct = dp * (l - self.l0) / l;
		let imass1 = particles[i1].get_imass();
		let imass2 = particles[i2].get_imass();
		let imass = imass1 + imass2;
		if imass == 0.0 {
			return;
		}
		if !particles[i1].is_pinned() {
			particles[i1].add_pos(-correct * (imass1 / imass));
		}
		if !particles[i2].is_pinned() {
			particles[i2].add_pos(correct * (imass2 / imass));
		}
	}

	fn error(&self, particles: &[Particle]) -> f32 {
		let [i1, i2] = self.ps;
		let l = (particles[i1].get_pos() - particles[i2].get_pos()).magnitude();
		(l - self.l0).abs()
	}

	fn stretch(&self, particles: &[Particle]) -> f32 {
		let [i1, i2] = self.ps;
		let l = (particles[i1].get_pos() - particles[i2].get_pos()).magnitude();
		if self.l0 == 0.0 {
			return if l == 0.0 { 1.0 } else { f32::INFINITY };
		}
		l / self.l0
	}

	fn particles(&self) -> &[usize] {
		&self.ps
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V3;

	fn free(x: f32, y: f32, z: f32) -> Particle {
		Particle::new(V3::new(x, y, z), 1.0, V3::zeros())
	}

	#[test]
	fn test_rest_length_from_positions() {
		let ps = vec![free(0., 0., 0.), free(3., 4., 0.)];
		let dc = DistanceConstraint::new(&ps, 0, 1);
		assert!((dc.get_l0() - 5.0).abs() < 1e-6);
		assert_eq!(dc.particles(), &[0, 1]);
		assert_eq!(dc.error(&ps), 0.0);
	}

	#[test]
	fn test_equal_mass_split() {
		let mut ps = vec![free(0., 0., 0.), free(2., 0., 0.)];
		let dc = DistanceConstraint::new_with_l0(0, 1, 1.0);
		assert!((dc.stretch(&ps) - 2.0).abs() < 1e-6);
		dc.project(&mut ps);
		assert!((ps[0].get_pos() - V3::new(0.5, 0., 0.)).norm() < 1e-6);
		assert!((ps[1].get_pos() - V3::new(1.5, 0., 0.)).norm() < 1e-6);
		assert!(dc.error(&ps) < 1e-6);
	}

	#[test]
	fn test_pinned_endpoint_takes_nothing() {
		let mut ps = vec![free(0., 0., 0.), free(0., -2., 0.)];
		ps[0].pin();
		let dc = DistanceConstraint::new_with_l0(0, 1, 1.0);
		dc.project(&mut ps);
		assert_eq!(ps[0].get_pos(), V3::zeros());
		assert!((ps[1].get_pos() - V3::new(0., -1., 0.)).norm() < 1e-6);
	}

	#[test]
	fn test_compressed_pushes_apart() {
		let mut ps = vec![free(0., 0., 0.), free(0., 0., 0.5)];
		let dc = DistanceConstraint::new_with_l0(0, 1, 1.0);
		dc.project(&mut ps);
		assert!((ps[0].get_pos()[2] + 0.25).abs() < 1e-6);
		assert!((ps[1].get_pos()[2] - 0.75).abs() < 1e-6);
	}

	#[test]
	fn test_coincident_skipped() {
		let mut ps = vec![free(1., 1., 1.), free(1., 1., 1.)];
		let dc = DistanceConstraint::new_with_l0(0, 1, 0.5);
		dc.project(&mut ps);
		assert_eq!(ps[0].get_pos(), V3::new(1., 1., 1.));
		assert_eq!(ps[1].get_pos(), V3::new(1., 1., 1.));
		assert!(ps.iter().all(|p| p.is_finite()));
	}

	#[test]
	fn test_both_pinned_skipped() {
		let mut ps = vec![free(0., 0., 0.), free(3., 0., 0.)];
		ps[0].pin();
		ps[1].pin();
		let dc = DistanceConstraint::new_with_l0(0, 1, 1.0);
		dc.project(&mut ps);
		assert_eq!(ps[0].get_pos(), V3::zeros());
		assert_eq!(ps[1].get_pos(), V3::new(3., 0., 0.));
	}

	#[test]
	fn test_boxed_clone() {
		let c: CRef = DistanceConstraint::new_with_l0(2, 3, 0.25).build();
		let d = c.clone();
		assert_eq!(d.particles(), &[2, 3]);
	}
}
