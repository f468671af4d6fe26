//! Population container and initializer
//!
//! The population owns every mutable piece of simulation state: the particle
//! vector (whose insertion order is the fixed pairwise iteration order) and
//! the seeded RNG every stochastic draw comes from. One seed fully determines
//! a run.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision;
use super::params::SimParams;
use super::particle::{HealthState, MeshHandle, Particle};
use crate::consts::ARENA_EXTENT;
use crate::error::{Error, Result};

/// How many particles sit in each health state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

/// An ordered collection of particles plus the generator driving them.
///
/// Particles are never added or removed mid-run; a population-size change
/// goes through [`Population::resize`], which rebuilds everything.
#[derive(Debug)]
pub struct Population {
    /// Insertion order is the pairwise iteration / tie-break order
    pub particles: Vec<Particle>,
    pub(crate) rng: Pcg32,
    seed: u64,
    radius: f64,
    mesh: MeshHandle,
}

impl Population {
    /// Seed a population of `count` particles of uniform `radius`.
    ///
    /// Positions are uniform in the full arena square (overlap is not
    /// prevented at draw time), velocities are unit vectors at a uniform
    /// angle, and everyone starts susceptible. One resolver pass runs with
    /// infection disabled so particles born overlapping are pushed apart and
    /// reflected before any epidemiology; only then is particle 0 marked
    /// infected, so a spawn overlap can never transmit.
    pub fn spawn(count: usize, radius: f64, mesh: MeshHandle, seed: u64) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidParam("population count must be > 0".into()));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if radius >= ARENA_EXTENT {
            return Err(Error::InvalidParam(
                "radius must be smaller than the arena half-extent".into(),
            ));
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = generate(count, radius, mesh, &mut rng);

        log::info!("spawned population: {count} particles, radius {radius}, seed {seed}");

        Ok(Self {
            particles,
            rng,
            seed,
            radius,
            mesh,
        })
    }

    /// Rebuild the whole population at a new size.
    ///
    /// Individual particles are never inserted or dropped; the control layer
    /// changing the population count means a full re-initialization. The
    /// existing RNG stream continues, so a run stays reproducible from its
    /// original seed across resizes.
    pub fn resize(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(Error::InvalidParam("population count must be > 0".into()));
        }

        self.particles = generate(count, self.radius, self.mesh, &mut self.rng);
        log::info!("population re-initialized: {count} particles");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Seed this population was spawned from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Tally the three health states.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for p in &self.particles {
            match p.health {
                HealthState::Susceptible => census.susceptible += 1,
                HealthState::Infected => census.infected += 1,
                HealthState::Recovered => census.recovered += 1,
            }
        }
        census
    }
}

/// Draw fresh particles, run the overlap pre-pass, mark patient zero.
fn generate(count: usize, radius: f64, mesh: MeshHandle, rng: &mut Pcg32) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = DVec2::new(
            rng.random_range(-ARENA_EXTENT..=ARENA_EXTENT),
            rng.random_range(-ARENA_EXTENT..=ARENA_EXTENT),
        );
        let angle = rng.random_range(0.0..TAU);
        particles.push(Particle::new(pos, DVec2::from_angle(angle), radius, mesh));
    }

    // Pre-resolve spawn overlaps with infection switched off
    let warmup = SimParams {
        infection_chance: 0.0,
        ..SimParams::default()
    };
    collision::resolve(&mut particles, rng, &warmup);

    particles[0].health = HealthState::Infected;
    particles
}
