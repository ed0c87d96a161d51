//! Cooling schedules.
//!
//! A [`CoolingSchedule`] maps the iteration index to a temperature. It is
//! chosen once per run and handed to the annealing loop through
//! [`SaConfig`](super::SaConfig); the proposal and acceptance logic do not
//! depend on which schedule is active.
//!
//! Every variant is non-increasing and drops below any positive floor after
//! a finite number of steps, which [`CoolingSchedule::steps_to_freeze`]
//! computes.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983): geometric cooling
//! - Nourani & Andresen (1998), "A comparison of simulated annealing cooling strategies"

/// Temperature schedule for simulated annealing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Multiplicative decay `T_i = rate * T_{i-1}`.
    ///
    /// Applied as a recurrence. Once the temperature falls below the floor
    /// it snaps to exactly 0.
    Exponential {
        /// Decay factor in (0, 1). Higher = slower cooling.
        rate: f64,
    },

    /// Power-law decay `T_i = T_0 * 10^(-decades * i / horizon)`.
    ///
    /// The temperature drops by `decades` orders of magnitude every
    /// `horizon` iterations.
    PowerLaw {
        /// Orders of magnitude lost per horizon. Must be positive.
        decades: f64,
        /// Iteration count over which `decades` are lost. Must be positive.
        horizon: usize,
    },

    /// Quadratic decay `T_i = T_0 - coefficient * i^2`, clamped at 0.
    Quadratic {
        /// Curvature. Must be positive.
        coefficient: f64,
    },

    /// Inverse sigmoid `T_i = T_0 / (1 + exp(steepness * (i - midpoint)))`.
    ///
    /// Approaches 0 asymptotically; the loop ends on the floor test.
    InverseSigmoid {
        /// Slope at the midpoint. Must be positive.
        steepness: f64,
        /// Iteration at which the temperature is `T_0 / 2`.
        midpoint: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Exponential { rate: 0.998 }
    }
}

impl CoolingSchedule {
    /// Temperature at iteration 0.
    pub fn initial(&self, t0: f64) -> f64 {
        match self {
            CoolingSchedule::Exponential { .. } => t0,
            _ => self.closed_form(t0, 0),
        }
    }

    /// Temperature at `iteration`, given the previous temperature.
    ///
    /// `floor` is the stopping threshold; only the exponential recurrence
    /// uses it, to snap sub-threshold values to 0.
    pub fn next(&self, t0: f64, iteration: usize, previous: f64, floor: f64) -> f64 {
        match *self {
            CoolingSchedule::Exponential { rate } => {
                let t = previous * rate;
                if t < floor {
                    0.0
                } else {
                    t
                }
            }
            _ => self.closed_form(t0, iteration),
        }
    }

    /// Closed-form temperature at `iteration`.
    fn closed_form(&self, t0: f64, iteration: usize) -> f64 {
        let i = iteration as f64;
        match *self {
            CoolingSchedule::Exponential { rate } => t0 * rate.powf(i),
            CoolingSchedule::PowerLaw { decades, horizon } => {
                t0 * 10f64.powf(-decades * i / horizon as f64)
            }
            CoolingSchedule::Quadratic { coefficient } => (t0 - coefficient * i * i).max(0.0),
            CoolingSchedule::InverseSigmoid {
                steepness,
                midpoint,
            } => t0 / (1.0 + (steepness * (i - midpoint)).exp()),
        }
    }

    /// Smallest iteration index whose temperature is at or below `floor`.
    ///
    /// This bounds the length of an annealing run started at `t0`. Computed
    /// analytically, so it may be off by one against the iterated values.
    pub fn steps_to_freeze(&self, t0: f64, floor: f64) -> usize {
        if t0 <= floor {
            return 0;
        }
        let steps = match *self {
            CoolingSchedule::Exponential { rate } => (floor / t0).ln() / rate.ln(),
            CoolingSchedule::PowerLaw { decades, horizon } => {
                horizon as f64 * (t0 / floor).log10() / decades
            }
            CoolingSchedule::Quadratic { coefficient } => ((t0 - floor) / coefficient).sqrt(),
            CoolingSchedule::InverseSigmoid {
                steepness,
                midpoint,
            } => midpoint + (t0 / floor - 1.0).ln() / steepness,
        };
        steps.ceil().max(0.0) as usize
    }

    /// Validates the schedule parameters.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            CoolingSchedule::Exponential { rate } => {
                if !(rate > 0.0 && rate < 1.0) {
                    return Err(format!("exponential rate must be in (0, 1), got {rate}"));
                }
            }
            CoolingSchedule::PowerLaw { decades, horizon } => {
                if !(decades > 0.0 && decades.is_finite()) {
                    return Err(format!("power-law decades must be positive, got {decades}"));
                }
                if horizon == 0 {
                    return Err("power-law horizon must be at least 1".into());
                }
            }
            CoolingSchedule::Quadratic { coefficient } => {
                if !(coefficient > 0.0 && coefficient.is_finite()) {
                    return Err(format!(
                        "quadratic coefficient must be positive, got {coefficient}"
                    ));
                }
            }
            CoolingSchedule::InverseSigmoid {
                steepness,
                midpoint,
            } => {
                if !(steepness > 0.0 && steepness.is_finite()) {
                    return Err(format!("sigmoid steepness must be positive, got {steepness}"));
                }
                if !midpoint.is_finite() {
                    return Err(format!("sigmoid midpoint must be finite, got {midpoint}"));
                }
            }
        }
        Ok(())
    }
}
