//! Render-facing snapshot of a cloth simulation.
//!
//! A renderer builds its line index buffer once from the lattice
//! dimensions and refreshes its vertex buffer from a [`PrModel`] every
//! frame.

pub mod frame_info;
pub mod pr_model;
