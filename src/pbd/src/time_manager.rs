use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeModel {
	// fixed frame time, never waits
	VideoRender,
	// waits out the rest of each frame budget
	RtFrameLock,
}

/// Hands out a fixed per-frame `dt` and, in real-time mode, paces the
/// caller so frames start on a fixed wall-clock cadence.
pub struct FrameClock {
	pft: f32,
	model: TimeModel,
	start_time: Instant,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::new(1.0 / 60.0, TimeModel::RtFrameLock)
	}
}

impl FrameClock {
	pub fn new(pft: f32, model: TimeModel) -> Self {
		Self {
			pft,
			model,
			start_time: Instant::now(),
		}
	}

	pub fn get_pft(&self) -> f32 {
		self.pft
	}

	pub fn take_time(&mut self) -> f32 {
		let now = Instant::now();
		let busy = now.duration_since(self.start_time);
		self.start_time = now;
		if self.model == TimeModel::RtFrameLock {
			let budget = Duration::from_secs_f32(self.pft);
			if busy < budget {
				std::thread::sleep(budget - busy);
				// the sleep belongs to this frame
				self.start_time = Instant::now();
			}
		}
		self.pft
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_video_render_does_not_wait() {
		let mut clock = FrameClock::new(0.5, TimeModel::VideoRender);
		let start = Instant::now();
		for _ in 0..4 {
			assert_eq!(clock.take_time(), 0.5);
		}
		assert!(start.elapsed() < Duration::from_millis(500));
	}

	#[test]
	fn test_frame_lock_waits() {
		let mut clock = FrameClock::new(0.01, TimeModel::RtFrameLock);
		let start = Instant::now();
		for _ in 0..3 {
			assert_eq!(clock.take_time(), 0.01);
		}
		assert!(start.elapsed() >= Duration::from_millis(30));
	}
}
