//! Cloth configuration.
//!
//! Everything the simulation needs at construction time. The per-call
//! substep count lives here too so drivers and the bench share one
//! source of defaults.

use serde::{Deserialize, Serialize};

use crate::error::{PbdError, PbdResult};

/// Which particles get infinite mass after the lattice is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPolicy {
	/// Indices `0` and `px - 1`, the two corners of the first row.
	#[default]
	Corners,
	/// The whole first row.
	TopEdge,
	Free,
	Indices(Vec<usize>),
}

impl PinPolicy {
	pub fn indices(&self, px: usize, _py: usize) -> Vec<usize> {
		match self {
			Self::Corners => vec![0, px - 1],
			Self::TopEdge => (0..px).collect(),
			Self::Free => vec![],
			Self::Indices(ids) => ids.clone(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
	pub width: f32,
	pub height: f32,
	pub px: usize,
	pub py: usize,
	/// Mass of every particle before pinning.
	pub mass: f32,
	pub gravity: [f32; 3],
	/// Multiplier on the reconciled velocity, in `(0, 1]`.
	pub damping: f32,
	pub dt: f32,
	pub substeps: usize,
	pub pinning: PinPolicy,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			width: 10.0,
			height: 10.0,
			px: 16,
			py: 16,
			mass: 1.0,
			gravity: [0.0, -9.81, 0.0],
			damping: 0.9991,
			dt: 1.0 / 60.0,
			substeps: 5,
			pinning: PinPolicy::Corners,
		}
	}
}

impl ClothConfig {
	pub fn with_resolution(mut self, px: usize, py: usize) -> Self {
		self.px = px;
		self.py = py;
		self
	}

	pub fn with_size(mut self, width: f32, height: f32) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_substeps(mut self, substeps: usize) -> Self {
		self.substeps = substeps;
		self
	}

	pub fn with_gravity(mut self, gravity: [f32; 3]) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_pinning(mut self, pinning: PinPolicy) -> Self {
		self.pinning = pinning;
		self
	}

	/// Ten substeps per frame: visibly less stretch than the default.
	pub fn stiff() -> Self {
		Self {
			substeps: 10,
			..Default::default()
		}
	}

	pub fn from_json_str(s: &str) -> PbdResult<Self> {
		Ok(serde_json::from_str(s)?)
	}

	pub fn to_json_string(&self) -> PbdResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn validate(&self) -> PbdResult<()> {
		if self.px < 2 || self.py < 2 {
			return Err(PbdError::InvalidConfig(format!(
				"lattice needs at least 2x2 particles, got {}x{}",
				self.px, self.py
			)));
		}
		if !(self.width.is_finite() && self.width > 0.0)
			|| !(self.height.is_finite() && self.height > 0.0)
		{
			return Err(PbdError::InvalidConfig(format!(
				"bad cloth size {}x{}",
				self.width, self.height
			)));
		}
		if !(self.damping > 0.0 && self.damping <= 1.0) {
			return Err(PbdError::InvalidConfig(format!(
				"damping must be in (0, 1], got {}",
				self.damping
			)));
		}
		if !(self.dt.is_finite() && self.dt > 0.0) {
			return Err(PbdError::InvalidConfig(format!(
				"dt must be positive, got {}",
				self.dt
			)));
		}
		if self.substeps == 0 {
			return Err(PbdError::InvalidConfig(
				"substeps must be at least 1".to_string(),
			));
		}
		if self.gravity.iter().any(|g| !g.is_finite()) {
			return Err(PbdError::InvalidConfig(format!(
				"gravity must be finite, got {:?}",
				self.gravity
			)));
		}
		let len = self.px * self.py;
		if let Some(id) = self
			.pinning
			.indices(self.px, self.py)
			.into_iter()
			.find(|&id| id >= len)
		{
			return Err(PbdError::InvalidConfig(format!(
				"pinned index {} out of range for {} particles",
				id, len
			)));
		}
		Ok(())
	}
}
