//! Property and statistical validation of the simulation core.

use contact_sim::consts::{ARENA_EXTENT, BASE_STEP, FRAME_RATE};
use contact_sim::sim::{
    HealthState, MeshHandle, Particle, Population, SimParams, resolve, step,
};
use glam::DVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Containment: the resolver clamps every particle into
    /// [-1 + r, 1 - r] per axis; the integration sub-step that follows may
    /// overshoot by at most one frame of travel before the next clamp.
    #[test]
    fn particles_stay_contained(
        seed in any::<u64>(),
        count in 2usize..32,
        steps in 1usize..90,
        speed in 0.0f64..3.0,
    ) {
        let params = SimParams { speed_multiplier: speed, ..SimParams::default() };
        let mut pop = Population::spawn(count, 0.05, MeshHandle(0), seed).unwrap();

        for _ in 0..steps {
            step(&mut pop, &params);
            let slack = speed * BASE_STEP + 1e-9;
            for p in &pop.particles {
                prop_assert!(p.pos.x >= -ARENA_EXTENT + p.radius - slack);
                prop_assert!(p.pos.x <= ARENA_EXTENT - p.radius + slack);
                prop_assert!(p.pos.y >= -ARENA_EXTENT + p.radius - slack);
                prop_assert!(p.pos.y <= ARENA_EXTENT - p.radius + slack);
            }
        }
    }

    /// With immunity on, recovered is absorbing: no particle ever moves
    /// Recovered -> Infected, no matter the contact history.
    #[test]
    fn recovered_is_absorbing_under_immunity(
        seed in any::<u64>(),
        count in 2usize..24,
        steps in 1usize..200,
    ) {
        let params = SimParams {
            immunity: true,
            infection_chance: 1.0,
            average_recovery: 0.5,
            ..SimParams::default()
        };
        let mut pop = Population::spawn(count, 0.08, MeshHandle(0), seed).unwrap();
        let mut was_recovered = vec![false; count];

        for _ in 0..steps {
            step(&mut pop, &params);
            for (i, p) in pop.particles.iter().enumerate() {
                if was_recovered[i] {
                    prop_assert!(
                        p.health != HealthState::Infected,
                        "particle {} re-entered Infected after recovering",
                        i
                    );
                }
                if p.health == HealthState::Recovered {
                    was_recovered[i] = true;
                }
            }
        }
    }

    /// A pairwise reflection is a true mirror: the sum of squared speeds is
    /// unchanged for any overlapping pair away from the walls.
    #[test]
    fn pair_reflection_conserves_energy(
        angle in 0.0f64..std::f64::consts::TAU,
        dist in 0.005f64..0.095,
        ax in -0.3f64..0.3,
        ay in -0.3f64..0.3,
        v0x in -2.0f64..2.0,
        v0y in -2.0f64..2.0,
        v1x in -2.0f64..2.0,
        v1y in -2.0f64..2.0,
    ) {
        let a = DVec2::new(ax, ay);
        let b = a + DVec2::from_angle(angle) * dist;
        let mut particles = vec![
            Particle::new(a, DVec2::new(v0x, v0y), 0.05, MeshHandle(0)),
            Particle::new(b, DVec2::new(v1x, v1y), 0.05, MeshHandle(0)),
        ];
        let before: f64 = particles.iter().map(|p| p.vel.length_squared()).sum();

        let params = SimParams { infection_chance: 0.0, average_recovery: 1e9, ..SimParams::default() };
        let mut rng = Pcg32::seed_from_u64(0);
        resolve(&mut particles, &mut rng, &params);

        let after: f64 = particles.iter().map(|p| p.vel.length_squared()).sum();
        prop_assert!((before - after).abs() < 1e-9, "energy drifted {} -> {}", before, after);
    }
}

/// Mean frames until an isolated infected particle recovers, over seeded
/// trials.
fn mean_time_to_recovery(params: &SimParams, trials: u64) -> f64 {
    let mut total_frames = 0u64;
    for trial in 0..trials {
        let mut particles = vec![Particle::new(
            DVec2::ZERO,
            DVec2::X,
            0.05,
            MeshHandle(0),
        )];
        particles[0].health = HealthState::Infected;
        let mut rng = Pcg32::seed_from_u64(trial);

        let mut frames = 0u64;
        while particles[0].health == HealthState::Infected && frames < 100_000 {
            resolve(&mut particles, &mut rng, params);
            frames += 1;
        }
        total_frames += frames;
    }
    total_frames as f64 / trials as f64
}

/// The per-frame Bernoulli roll approximates an exponential recovery with
/// mean `average_recovery` seconds: the sample mean over many trials lands
/// near `average_recovery * FRAME_RATE` frames.
#[test]
fn expected_recovery_time_matches_average_recovery() {
    let params = SimParams {
        infection_chance: 0.0,
        ..SimParams::default()
    };
    let expected = params.average_recovery * FRAME_RATE;
    let mean = mean_time_to_recovery(&params, 2000);
    let rel = (mean - expected).abs() / expected;
    assert!(
        rel < 0.15,
        "mean time-to-recovery {mean} frames, expected ~{expected}"
    );
}

/// Doubling the speed multiplier halves the expected frame count, keeping
/// recovery per simulated second invariant.
#[test]
fn recovery_scales_inversely_with_speed_multiplier() {
    let params = SimParams {
        infection_chance: 0.0,
        speed_multiplier: 2.0,
        ..SimParams::default()
    };
    let expected = params.average_recovery * FRAME_RATE / params.speed_multiplier;
    let mean = mean_time_to_recovery(&params, 2000);
    let rel = (mean - expected).abs() / expected;
    assert!(
        rel < 0.15,
        "mean time-to-recovery {mean} frames, expected ~{expected}"
    );
}

/// End-to-end epidemic arc: with certain transmission and immunity, a dense
/// population eventually has no infected particles left and at least one
/// recovered one.
#[test]
fn epidemic_burns_out_under_immunity() {
    let params = SimParams::default();
    let mut pop = Population::spawn(20, 0.08, MeshHandle(0), 31337).unwrap();

    let mut frames = 0u64;
    while pop.census().infected > 0 && frames < 200_000 {
        step(&mut pop, &params);
        frames += 1;
    }

    let census = pop.census();
    assert_eq!(census.infected, 0, "epidemic still live after {frames} frames");
    assert!(census.recovered >= 1);
    assert_eq!(census.susceptible + census.recovered, 20);
}
