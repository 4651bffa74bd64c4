//! Configuration for NEB relaxation runs.
//!
//! The [`NebConfig`] struct gathers every parameter of a relaxation:
//! the chain size and endpoints, the spring constant, the integration
//! time step, the finite-difference step, the convergence tolerance, and
//! the iteration bound. Numerical stability is the caller's
//! responsibility through the choice of `time_step` and
//! `spring_constant`; the iteration bound turns a pathological
//! combination into a reported [`NonConvergence`](crate::NebError::NonConvergence)
//! instead of an endless loop.

use crate::error::{NebError, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Default spring constant `k` coupling adjacent images.
pub const DEFAULT_SPRING_CONSTANT: f64 = 1.0;
/// Default time step for the damped-dynamics integrator.
pub const DEFAULT_TIME_STEP: f64 = 1e-2;
/// Default convergence tolerance on the velocity norm.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Complete parameter set for one NEB relaxation.
///
/// Construct with [`NebConfig::new`] and adjust the public fields as
/// needed. The iteration bound has no default: unbounded relaxation can
/// loop forever on an unstable time step, so the caller must choose the
/// budget explicitly.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use openneb::NebConfig;
///
/// let mut config = NebConfig::new(
///     11,
///     Vector2::new(-1.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     100_000,
/// );
/// config.time_step = 5e-3;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NebConfig {
    /// Number of movable interior images (the chain holds two more for
    /// the fixed endpoints).
    pub num_images: usize,
    /// Fixed position of the first image.
    pub start: Vector2<f64>,
    /// Fixed position of the last image.
    pub end: Vector2<f64>,
    /// Spring constant `k` for the parallel spring force.
    pub spring_constant: f64,
    /// Integration time step for the damped dynamics.
    pub time_step: f64,
    /// Finite-difference step for the numerical gradient.
    pub gradient_step: f64,
    /// Relaxation stops once the velocity norm falls below this value.
    pub tolerance: f64,
    /// Hard bound on the number of relaxation iterations.
    pub max_iterations: usize,
}

impl NebConfig {
    /// Creates a configuration with default spring constant, time step,
    /// gradient step, and tolerance.
    pub fn new(
        num_images: usize,
        start: Vector2<f64>,
        end: Vector2<f64>,
        max_iterations: usize,
    ) -> Self {
        Self {
            num_images,
            start,
            end,
            spring_constant: DEFAULT_SPRING_CONSTANT,
            time_step: DEFAULT_TIME_STEP,
            gradient_step: crate::gradient::DEFAULT_GRADIENT_STEP,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations,
        }
    }

    /// Checks every field for values the relaxation cannot run with.
    ///
    /// Returns [`NebError::InvalidConfiguration`] on non-finite endpoint
    /// coordinates, non-positive or non-finite `spring_constant`,
    /// `time_step`, `gradient_step`, or `tolerance`, or a zero iteration
    /// bound.
    pub fn validate(&self) -> Result<()> {
        for (name, point) in [("start", &self.start), ("end", &self.end)] {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(NebError::InvalidConfiguration(format!(
                    "{} point has non-finite coordinates ({}, {})",
                    name, point.x, point.y
                )));
            }
        }
        for (name, value) in [
            ("spring_constant", self.spring_constant),
            ("time_step", self.time_step),
            ("gradient_step", self.gradient_step),
            ("tolerance", self.tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(NebError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if self.max_iterations == 0 {
            return Err(NebError::InvalidConfiguration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
