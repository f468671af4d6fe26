//! Collision detection and response
//!
//! One resolver pass per frame: pairwise overlap resolution with elastic
//! reflection, wall bounces, and the contact-driven infection/recovery rules
//! layered on top of the physical contacts.

use glam::DVec2;
use rand::Rng;

use super::params::SimParams;
use super::particle::{HealthState, Particle};
use crate::consts::{ARENA_EXTENT, CONTACT_EPSILON};

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Resolve one frame's worth of contacts.
///
/// For each particle in insertion order: every pair (i, j) with j > i is
/// checked exactly once, then the walls, then the recovery roll. Mutates
/// positions, velocities, and health states in place.
///
/// Particle i's position and velocity accumulate locally across its pairwise
/// and wall phases and are written back together; the other particle's
/// velocity is updated immediately, its position never (only the particle
/// currently being scanned is pushed out of an overlap).
pub fn resolve<R: Rng>(particles: &mut [Particle], rng: &mut R, params: &SimParams) {
    let n = particles.len();
    for i in 0..n {
        let mut pos = particles[i].pos;
        let mut vel = particles[i].vel;
        let radius = particles[i].radius;

        for j in (i + 1)..n {
            let d = pos - particles[j].pos;
            let m = d.length();

            // Rounding error at exact tangency sits around 1e-17, so overlap
            // below the epsilon is noise, not contact
            let overlap = radius + particles[j].radius - m;
            if overlap <= CONTACT_EPSILON {
                continue;
            }

            // Coincident centers: no contact normal exists this frame; the
            // overlap resolves once motion separates the pair
            if m == 0.0 {
                continue;
            }

            let normal = d / m;

            // Shift the scanned particle the full overlap out of the contact
            pos += normal * overlap;

            vel = reflect(vel, -normal);
            particles[j].vel = reflect(particles[j].vel, normal);

            // Transmission is possible only when exactly one side is infected
            if particles[i].health.is_infected() != particles[j].health.is_infected()
                && rng.random::<f64>() < params.infection_chance
            {
                if params.immunity {
                    // No reinfection out of the recovered state
                    if particles[i].health != HealthState::Recovered {
                        particles[i].health = HealthState::Infected;
                    }
                    if particles[j].health != HealthState::Recovered {
                        particles[j].health = HealthState::Infected;
                    }
                } else {
                    particles[i].health = HealthState::Infected;
                    particles[j].health = HealthState::Infected;
                }
            }
        }

        // Walls last: staying inside the arena wins over a residual pair
        // overlap, which the next frame picks up
        if pos.x < -ARENA_EXTENT + radius {
            pos.x = -ARENA_EXTENT + radius;
            vel.x = -vel.x;
        } else if pos.x > ARENA_EXTENT - radius {
            pos.x = ARENA_EXTENT - radius;
            vel.x = -vel.x;
        }
        if pos.y < -ARENA_EXTENT + radius {
            pos.y = -ARENA_EXTENT + radius;
            vel.y = -vel.y;
        } else if pos.y > ARENA_EXTENT - radius {
            pos.y = ARENA_EXTENT - radius;
            vel.y = -vel.y;
        }

        particles[i].pos = pos;
        particles[i].vel = vel;

        if particles[i].health.is_infected() && rng.random::<f64>() < params.recovery_chance() {
            particles[i].health = HealthState::Recovered;
        }
    }
}
