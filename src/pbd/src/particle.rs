use crate::V3;
use protocol::pr_model::PrParticle;

#[derive(Clone, Debug)]
pub struct Particle {
	pos: V3,
	ppos: V3,
	vel: V3,
	force: V3,
	// 0 iff pinned
	imass: f32,
	pinned: bool,
}

impl Particle {
	/// Creates a particle at rest carrying its weight `mass * gravity`.
	///
	/// A non-positive or non-finite mass gives a pinned particle.
	pub fn new(pos: V3, mass: f32, gravity: V3) -> Self {
		let imass = if mass > 0.0 && mass.is_finite() {
			1.0 / mass
		} else {
			0.0
		};
		let force = if imass == 0.0 {
			V3::zeros()
		} else {
			gravity * mass
		};
		Self {
			pos,
			ppos: pos,
			vel: V3::zeros(),
			force,
			imass,
			pinned: imass == 0.0,
		}
	}

	pub fn pin(&mut self) {
		self.imass = 0.0;
		self.pinned = true;
		self.vel = V3::zeros();
		self.ppos = self.pos;
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	pub fn get_imass(&self) -> f32 {
		self.imass
	}

	pub fn get_pos(&self) -> V3 {
		self.pos
	}

	pub fn get_ppos(&self) -> V3 {
		self.ppos
	}

	pub fn get_vel(&self) -> V3 {
		self.vel
	}

	pub fn get_force(&self) -> V3 {
		self.force
	}

	pub fn add_pos(&mut self, dp: V3) {
		if self.pinned {
			return;
		}
		self.pos += dp
	}

	pub fn add_force(&mut self, f: V3) {
		self.force += f
	}

	// moves the particle without giving it velocity
	pub fn offset_pos(&mut self, dp: V3) {
		if self.pinned {
			return;
		}
		self.pos += dp;
		self.ppos += dp;
	}

	/// Semi-implicit Euler: velocity first, then position from the new
	/// velocity. `ppos` keeps the position before the move.
	pub fn integrate(&mut self, dt: f32) {
		if self.pinned {
			return;
		}
		self.ppos = self.pos;
		self.vel += self.force * self.imass * dt;
		self.pos += self.vel * dt;
	}

	/// Replaces the velocity with the realized displacement of this
	/// substep, attenuated by `damping`.
	pub fn reconcile_velocity(&mut self, dt: f32, damping: f32) {
		if self.pinned {
			return;
		}
		self.vel = (self.pos - self.ppos) / dt * damping;
	}

	pub fn kinetic_energy(&self) -> f32 {
		if self.pinned {
			return 0.0;
		}
		0.5 * self.vel.norm_squared() / self.imass
	}

	pub fn is_finite(&self) -> bool {
		self.pos.iter().chain(self.vel.iter()).all(|x| x.is_finite())
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1], self.pos[2]],
		}
	}
}
