//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Discrete per-frame stepping only
//! - Seeded RNG only
//! - Stable iteration order (insertion order; pair (i, j) resolved once with j > i)
//! - No rendering or platform dependencies

pub mod collision;
pub mod params;
pub mod particle;
pub mod population;
pub mod step;

pub use collision::{reflect, resolve};
pub use params::SimParams;
pub use particle::{HealthState, MeshHandle, Particle};
pub use population::{Census, Population};
pub use step::step;
