//! Damped-dynamics relaxation of the elastic band.
//!
//! The chain is relaxed with a velocity-projection ("quickmin") scheme,
//! a discrete analogue of viscous damping. Each iteration:
//!
//! 1. **Velocity projection**: if the current velocity has a positive
//!    component along the freshly assembled force (`v . F > 0`), the
//!    velocity is replaced by its projection onto the force direction,
//!    ```text
//!    v <- (v . F / |F|^2) F
//!    ```
//!    discarding any motion not contributing to descent. Otherwise the
//!    velocity is zeroed entirely. The chain accelerates while it keeps
//!    moving downhill and loses all kinetic energy the moment it
//!    overshoots.
//! 2. **Velocity update**: trapezoidal integration with the average of
//!    the previous and current forces, `v += (F_old + F) / 2 * dt`.
//! 3. **Position update**: every interior image advances by its velocity
//!    slice times `dt`; the two endpoints never move.
//! 4. **Bookkeeping**: `F_old <- F`.
//! 5. **Convergence test**: the run stops once the Euclidean norm of the
//!    full velocity vector falls below the tolerance.
//!
//! Within one iteration every force is computed from the previous
//! iteration's positions before any image moves, so the pass order over
//! images is unobservable.
//!
//! The loop is bounded by the caller-supplied `max_iterations`; exhausting
//! the bound is a fatal [`NebError::NonConvergence`] with no partial
//! result.

use crate::chain::Chain;
use crate::config::NebConfig;
use crate::error::{NebError, Result};
use crate::forces;
use log::{debug, info};
use nalgebra::{DVector, Vector2};

/// Iterations between progress log lines.
const LOG_INTERVAL: usize = 1000;

/// Mutable integrator state threaded through each relaxation step.
///
/// Holds the flattened velocity and previous-iteration force, each of
/// length `2 * num_images` (two components per interior image, endpoints
/// excluded). The state belongs to the integrator alone and is never part
/// of the [`Chain`].
#[derive(Debug, Clone)]
pub struct RelaxationState {
    /// Flattened velocity of the interior images, in chain order.
    pub velocity: DVector<f64>,
    /// Net force vector from the previous iteration.
    pub old_force: DVector<f64>,
}

impl RelaxationState {
    /// Creates a zero-initialized state for a chain with `num_images`
    /// interior images.
    pub fn new(num_images: usize) -> Self {
        Self {
            velocity: DVector::zeros(2 * num_images),
            old_force: DVector::zeros(2 * num_images),
        }
    }

    /// Euclidean norm of the full velocity vector, the quantity tested
    /// against the convergence tolerance.
    pub fn velocity_norm(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Result of a converged relaxation.
#[derive(Debug, Clone)]
pub struct NebResult {
    /// The relaxed chain; its positions trace the approximate MEP.
    pub chain: Chain,
    /// Number of iterations the relaxation took to converge.
    pub iterations: usize,
    /// Final integrator state, with `velocity_norm()` below the tolerance.
    pub state: RelaxationState,
}

/// Advances the chain by one quickmin iteration.
///
/// Assembles the net force from the current positions, applies the
/// velocity projection and trapezoidal velocity update, and moves every
/// interior image in place. Fails with
/// [`NebError::DegenerateGeometry`] if any interior tangent has collapsed.
pub fn step<F>(
    chain: &mut Chain,
    state: &mut RelaxationState,
    config: &NebConfig,
    potential: &F,
) -> Result<()>
where
    F: Fn(f64, f64) -> f64,
{
    let force = forces::assemble(
        chain,
        config.spring_constant,
        config.gradient_step,
        potential,
    )?;

    // Quickmin damping: keep only the velocity component along the force,
    // and only while the motion is still downhill. `v . F > 0` implies a
    // nonzero force, so the projection divide is well-defined.
    let alignment = state.velocity.dot(&force);
    if alignment > 0.0 {
        state.velocity = &force * (alignment / force.norm_squared());
    } else {
        state.velocity.fill(0.0);
    }

    state.velocity += (&state.old_force + &force) * (0.5 * config.time_step);

    for (slot, index) in chain.interior_indices().enumerate() {
        let delta = Vector2::new(state.velocity[2 * slot], state.velocity[2 * slot + 1])
            * config.time_step;
        chain.displace(index, delta);
    }

    state.old_force = force;
    Ok(())
}

/// Relaxes a chain of images between `config.start` and `config.end` to an
/// approximate minimum energy path of `potential`.
///
/// The chain is built by linear interpolation, then driven by [`step`]
/// until the velocity norm falls below `config.tolerance`. The caller
/// receives either a fully converged [`NebResult`] or an error; a chain
/// that stopped short of convergence is never returned.
///
/// # Errors
///
/// - [`NebError::InvalidConfiguration`] if `config` fails validation
/// - [`NebError::DegenerateGeometry`] if a tangent collapses during
///   relaxation (including coincident `start` and `end`)
/// - [`NebError::NonConvergence`] if `config.max_iterations` is exhausted
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use openneb::{relax, NebConfig};
///
/// let config = NebConfig::new(
///     5,
///     Vector2::new(-1.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     50_000,
/// );
/// let result = relax(&config, |x, y| x * x * 0.01 + y * y).unwrap();
/// assert_eq!(result.chain.len(), 7);
/// ```
pub fn relax<F>(config: &NebConfig, potential: F) -> Result<NebResult>
where
    F: Fn(f64, f64) -> f64,
{
    config.validate()?;

    let mut chain = Chain::interpolated(config.num_images, config.start, config.end);
    let mut state = RelaxationState::new(config.num_images);

    info!(
        "relaxing {} interior images from ({:.4}, {:.4}) to ({:.4}, {:.4}), k = {}, dt = {}",
        config.num_images,
        config.start.x,
        config.start.y,
        config.end.x,
        config.end.y,
        config.spring_constant,
        config.time_step
    );

    for iteration in 1..=config.max_iterations {
        step(&mut chain, &mut state, config, &potential)?;

        let residual = state.velocity_norm();
        if residual < config.tolerance {
            info!("converged after {} iterations (|v| = {:.3e})", iteration, residual);
            return Ok(NebResult {
                chain,
                iterations: iteration,
                state,
            });
        }

        if iteration % LOG_INTERVAL == 0 {
            debug!("iteration {}: |v| = {:.3e}", iteration, residual);
        }
    }

    Err(NebError::NonConvergence {
        iterations: config.max_iterations,
        residual: state.velocity_norm(),
    })
}
