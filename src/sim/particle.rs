//! Particle entity and epidemiological state

use glam::DVec2;

/// Epidemiological status of a particle.
///
/// Stored as an explicit tag; the RGB triple the renderer needs is derived
/// at the boundary via [`HealthState::color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    /// Never infected (rendered blue)
    #[default]
    Susceptible,
    /// Currently contagious (rendered red)
    Infected,
    /// Past infection (rendered green); blocks reinfection only while the
    /// population-level immunity flag is set
    Recovered,
}

impl HealthState {
    /// RGB color triple for the renderer.
    pub fn color(&self) -> [f32; 3] {
        match self {
            HealthState::Susceptible => [0.0, 0.0, 1.0],
            HealthState::Infected => [1.0, 0.0, 0.0],
            HealthState::Recovered => [0.0, 1.0, 0.0],
        }
    }

    /// Marker used by the transmission gate: a contact transmits only when
    /// exactly one side is infected.
    #[inline]
    pub fn is_infected(&self) -> bool {
        matches!(self, HealthState::Infected)
    }
}

/// Opaque handle to GPU-resident unit-circle geometry.
///
/// Owned by the rendering collaborator; every particle shares the same mesh
/// and the core only passes the handle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(pub u32);

/// One agent: physical state plus epidemiological state.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Center in normalized arena space [-1, 1] x [-1, 1]
    pub pos: DVec2,
    /// Unit-speed-ish direction of travel; wall and pair reflections preserve
    /// its magnitude
    pub vel: DVec2,
    /// Constant for the particle's lifetime, > 0
    pub radius: f64,
    pub health: HealthState,
    /// Shared render geometry, pass-through only
    pub mesh: MeshHandle,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, mesh: MeshHandle) -> Self {
        Self {
            pos,
            vel,
            radius,
            health: HealthState::Susceptible,
            mesh,
        }
    }

    /// RGB triple for the renderer (derived from health state).
    #[inline]
    pub fn color(&self) -> [f32; 3] {
        self.health.color()
    }
}
