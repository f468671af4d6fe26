//! Simulation parameters
//!
//! The control layer owns a `SimParams` value and mutates it between steps;
//! a change takes effect on the next `step` call. Parameters are an explicit
//! struct rather than process-wide globals so test instances stay independent
//! and deterministic.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_RATE;
use crate::error::{Error, Result};

/// Tunable epidemiological and playback parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// When set, a recovered particle can never be reinfected
    pub immunity: bool,
    /// Chance in [0, 1] that a contact between an infected and a
    /// non-infected particle transmits
    pub infection_chance: f64,
    /// Mean time to recover, in seconds at the nominal frame rate
    pub average_recovery: f64,
    /// Playback speed scale, >= 0; scales both travel distance and the
    /// per-frame recovery chance so recovery per simulated second is
    /// invariant
    pub speed_multiplier: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            immunity: true,
            infection_chance: 1.0,
            average_recovery: 5.0,
            speed_multiplier: 1.0,
        }
    }
}

impl SimParams {
    /// Reject invalid parameters. Values are never clamped: the control
    /// layer is expected to surface the error and keep the old value.
    pub fn validate(&self) -> Result<()> {
        if !self.infection_chance.is_finite() || !(0.0..=1.0).contains(&self.infection_chance) {
            return Err(Error::InvalidParam(
                "infection_chance must be within [0, 1]".into(),
            ));
        }
        if !self.average_recovery.is_finite() || self.average_recovery <= 0.0 {
            return Err(Error::InvalidParam(
                "average_recovery must be finite and > 0".into(),
            ));
        }
        if !self.speed_multiplier.is_finite() || self.speed_multiplier < 0.0 {
            return Err(Error::InvalidParam(
                "speed_multiplier must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }

    /// Per-frame Bernoulli probability that an infected particle recovers.
    ///
    /// Approximates an exponential recovery time with mean
    /// `average_recovery` seconds when sampled once per frame.
    #[inline]
    pub fn recovery_chance(&self) -> f64 {
        1.0 / (self.average_recovery * FRAME_RATE) * self.speed_multiplier
    }
}
