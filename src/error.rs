//! Error types for NEB relaxation.
//!
//! All errors are fatal to the relaxation call: the caller receives either
//! a fully converged chain or one of these errors, never a half-relaxed
//! chain labeled successful.

use thiserror::Error;

/// Errors that can occur during NEB setup or relaxation.
#[derive(Error, Debug)]
pub enum NebError {
    /// The configuration contains values the relaxation cannot run with,
    /// such as non-finite endpoint coordinates or a non-positive time step.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The chain geometry degenerated to the point where the tangent is
    /// ill-defined (coincident neighbor positions).
    #[error("degenerate geometry at image {index}: {reason}")]
    DegenerateGeometry {
        /// Index of the image whose tangent could not be computed.
        index: usize,
        /// Description of the degeneracy.
        reason: String,
    },

    /// The velocity norm did not fall below the convergence tolerance
    /// within the caller-supplied iteration bound.
    #[error("relaxation did not converge within {iterations} iterations (|v| = {residual:.3e})")]
    NonConvergence {
        /// Number of iterations performed before giving up.
        iterations: usize,
        /// Velocity norm at the last iteration.
        residual: f64,
    },
}

/// Convenience alias for results of NEB operations.
pub type Result<T> = std::result::Result<T, NebError>;
