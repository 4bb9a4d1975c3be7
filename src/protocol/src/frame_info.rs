use serde::{Deserialize, Serialize};

/// Per-frame load report sent alongside a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameInfo {
	pub frame: u64,
	pub step_ms: f32,
	pub particle_len: usize,
	pub constraint_len: usize,
}

impl FrameInfo {
	// fraction of the frame budget spent stepping
	pub fn load(&self, budget_ms: f32) -> f32 {
		if budget_ms <= 0.0 {
			return f32::INFINITY;
		}
		self.step_ms / budget_ms
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_load() {
		let info = FrameInfo {
			frame: 1,
			step_ms: 4.0,
			particle_len: 4,
			constraint_len: 4,
		};
		assert!((info.load(16.0) - 0.25).abs() < 1e-6);
		assert!(info.load(0.0).is_infinite());
	}
}
