//! Contact Sim - An agent-based epidemic simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particles, collisions, infection model)
//! - `error`: Crate-wide error type for configuration validation
//!
//! Rendering, windowing, and interactive controls are external collaborators:
//! they read particle positions/colors after each `step` and mutate
//! `SimParams` between steps, but nothing in this crate draws or blocks.

pub mod error;
pub mod sim;

pub use error::{Error, Result};
pub use sim::{Census, HealthState, MeshHandle, Particle, Population, SimParams, step};

/// Simulation tuning constants
pub mod consts {
    /// Arena half-extent; the arena spans [-extent, extent] on both axes
    pub const ARENA_EXTENT: f64 = 1.0;

    /// Default particle radius in arena units
    pub const PARTICLE_RADIUS: f64 = 0.05;

    /// Distance a unit-speed particle travels per frame at speed multiplier 1
    pub const BASE_STEP: f64 = 0.01;

    /// Nominal frame rate the recovery probability is calibrated against
    pub const FRAME_RATE: f64 = 60.0;

    /// Overlap at or below this is floating-point noise at exact tangency,
    /// not contact
    pub const CONTACT_EPSILON: f64 = 1e-16;

    /// Default population size
    pub const DEFAULT_POPULATION: usize = 30;
}
