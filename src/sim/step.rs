//! Per-frame simulation advance
//!
//! The only entry point the external frame loop calls: one collision
//! resolver pass, then motion integration. Called once per rendered frame
//! while the driver considers the simulation running.

use super::collision;
use super::params::SimParams;
use super::population::Population;
use crate::consts::BASE_STEP;

/// Advance the population by one frame.
///
/// Resolves all pairwise and wall contacts (including the infection and
/// recovery rules) and then moves every particle along its possibly
/// just-reflected velocity. The population is the sole observable side
/// effect; the renderer reads it afterward.
pub fn step(population: &mut Population, params: &SimParams) {
    collision::resolve(&mut population.particles, &mut population.rng, params);

    let travel = params.speed_multiplier * BASE_STEP;
    for p in &mut population.particles {
        p.pos += p.vel * travel;
    }
}
