// pr_model: Physical model for rendering

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrParticle {
	pub pos: [f32; 3],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrModel {
	pub px: usize,
	pub py: usize,
	pub frame: u64,
	// row-major, index = y * px + x
	pub particles: Vec<PrParticle>,
}

impl PrModel {
	/// Flattened `xyz` triples, ready for a dynamic vertex buffer.
	pub fn vertex_buffer(&self) -> Vec<f32> {
		self.particles.iter().flat_map(|p| p.pos).collect()
	}

	pub fn line_indices(&self) -> Vec<u32> {
		line_indices(self.px, self.py)
	}
}

/// Static line list for a `px * py` lattice.
///
/// All horizontal edges row by row, then all vertical edges column by
/// column. The set of edges matches the simulation topology, the order
/// does not need to.
pub fn line_indices(px: usize, py: usize) -> Vec<u32> {
	let hlen = py * px.saturating_sub(1);
	let vlen = px * py.saturating_sub(1);
	let mut indices = Vec::with_capacity(2 * (hlen + vlen));
	for y in 0..py {
		for x in 1..px {
			indices.push((y * px + x - 1) as u32);
			indices.push((y * px + x) as u32);
		}
	}
	for x in 0..px {
		for y in 1..py {
			indices.push(((y - 1) * px + x) as u32);
			indices.push((y * px + x) as u32);
		}
	}
	indices
}
