use crate::config::PinPolicy;
use crate::constraint::distance::DistanceConstraint;
use crate::constraint::CRef;
use crate::particle::Particle;
use crate::V3;

#[derive(Clone, Debug, Default)]
pub struct PhysicalModel {
	pub px: usize,
	pub py: usize,
	pub particles: Vec<Particle>,
	pub constraints: Vec<CRef>,
}

impl PhysicalModel {
	/// Flat `px * py` lattice on the `y = 0` plane, centered at the origin.
	///
	/// Particle `(x, y)` sits at index `y * px + x`; the second lattice axis
	/// runs along world `z`. Constraints are the grid edges, enumerated
	/// row-major and, per node, horizontal before vertical. The solver is
	/// order dependent, so this enumeration is part of the behavior.
	///
	/// Needs `px, py >= 2`; see `ClothConfig::validate`.
	pub fn new_lattice(
		width: f32,
		height: f32,
		px: usize,
		py: usize,
		mass: f32,
		gravity: V3,
	) -> Self {
		debug_assert!(px >= 2 && py >= 2, "lattice {}x{}", px, py);
		let mut particles = Vec::with_capacity(px * py);
		for idy in 0..py {
			for idx in 0..px {
				let pos = V3::new(
					idx as f32 * width / (px - 1) as f32 - width / 2.,
					0.,
					idy as f32 * height / (py - 1) as f32 - height / 2.,
				);
				particles.push(Particle::new(pos, mass, gravity));
			}
		}
		let l0_h = width / (px - 1) as f32;
		let l0_v = height / (py - 1) as f32;
		let mut constraints = Vec::with_capacity(px * (py - 1) + (px - 1) * py);
		for idy in 0..py {
			for idx in 0..px {
				let id = idy * px + idx;
				if idx + 1 < px {
					let dc = DistanceConstraint::new_with_l0(id, id + 1, l0_h);
					constraints.push(dc.build());
				}
				if idy + 1 < py {
					let dc = DistanceConstraint::new_with_l0(id, id + px, l0_v);
					constraints.push(dc.build());
				}
			}
		}
		Self {
			px,
			py,
			particles,
			constraints,
		}
	}

	// out of range indices are ignored here, validation reports them
	pub fn pin(&mut self, policy: &PinPolicy) {
		for id in policy.indices(self.px, self.py) {
			if let Some(p) = self.particles.get_mut(id) {
				p.pin();
			}
		}
	}

	pub fn with_pinning(mut self, policy: &PinPolicy) -> Self {
		self.pin(policy);
		self
	}
}
