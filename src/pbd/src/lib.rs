pub mod config;
pub mod constraint;
pub mod constraint_group;
pub mod error;
pub mod integrator;
pub mod metrics;
pub mod particle;
pub mod particle_group;
pub mod physical_model;
pub mod time_manager;
pub mod world;

pub use config::{ClothConfig, PinPolicy};
pub use error::{PbdError, PbdResult};
pub use world::ClothWorld;

pub type V3 = nalgebra::Vector3<f32>;
