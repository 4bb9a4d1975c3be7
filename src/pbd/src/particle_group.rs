use crate::particle::Particle;
use protocol::pr_model::PrParticle;

/// Flat particle buffer. Constraints refer to particles by index into it.
#[derive(Clone, Debug, Default)]
pub struct ParticleGroup {
	particles: Vec<Particle>,
}

impl ParticleGroup {
	pub fn new(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn get(&self, id: usize) -> Option<&Particle> {
		self.particles.get(id)
	}

	pub fn get_mut(&mut self, id: usize) -> Option<&mut Particle> {
		self.particles.get_mut(id)
	}

	pub fn pin(&mut self, id: usize) {
		if let Some(p) = self.particles.get_mut(id) {
			p.pin();
		}
	}

	pub fn as_slice(&self) -> &[Particle] {
		&self.particles
	}

	pub fn as_mut_slice(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
		self.particles.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
		self.particles.iter_mut()
	}

	pub fn positions(&self) -> Vec<[f32; 3]> {
		self.particles
			.iter()
			.map(|p| {
				let pos = p.get_pos();
				[pos[0], pos[1], pos[2]]
			})
			.collect()
	}

	pub fn pr_particles(&self) -> Vec<PrParticle> {
		self.particles.iter().map(|p| p.render()).collect()
	}

	pub fn pinned_len(&self) -> usize {
		self.particles.iter().filter(|p| p.is_pinned()).count()
	}

	pub fn kinetic_energy(&self) -> f32 {
		self.particles.iter().map(|p| p.kinetic_energy()).sum()
	}

	pub fn is_finite(&self) -> bool {
		self.particles.iter().all(|p| p.is_finite())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V3;

	#[test]
	fn test_positions_order() {
		let pg = ParticleGroup::new(
			(0..3)
				.map(|i| {
					Particle::new(V3::new(i as f32, 0., 0.), 1., V3::zeros())
				})
				.collect(),
		);
		assert_eq!(pg.len(), 3);
		assert_eq!(
			pg.positions(),
			vec![[0., 0., 0.], [1., 0., 0.], [2., 0., 0.]]
		);
		assert_eq!(pg.pr_particles()[2].pos, [2., 0., 0.]);
	}

	#[test]
	fn test_pin() {
		let mut pg = ParticleGroup::new(vec![
			Particle::new(V3::zeros(), 1., V3::zeros()),
			Particle::new(V3::zeros(), 1., V3::zeros()),
		]);
		pg.pin(1);
		pg.pin(5);
		assert_eq!(pg.pinned_len(), 1);
		assert!(pg.get(1).unwrap().is_pinned());
		assert!(pg.get(5).is_none());
	}
}
