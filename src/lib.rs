#![deny(missing_docs)]

//! openneb - Nudged Elastic Band solver for 2D model potential surfaces
//!
//! openneb computes an approximate Minimum Energy Path (MEP) between two
//! points on a scalar potential-energy surface using the Nudged Elastic
//! Band (NEB) method. MEPs locate reaction pathways and transition states
//! between two known local minima.
//!
//! # Algorithm
//!
//! A chain of images is linearly interpolated between two fixed endpoints
//! and relaxed under two forces per interior image:
//!
//! 1. **Parallel spring force**: keeps adjacent images evenly spaced
//!    along the local path tangent,
//!    ```text
//!    F_par = k (|R_right - R| - |R_left - R|) tau
//!    ```
//! 2. **Perpendicular potential force**: the component of the potential
//!    gradient orthogonal to the tangent,
//!    ```text
//!    F_perp = g - (g . tau) tau
//!    ```
//!
//! The "nudging" decomposition lets the band deform toward the valley
//! floor without sliding downhill along its own length. The chain is
//! advanced by a damped velocity-projection (quickmin) integrator until
//! the velocity norm falls below a tolerance.
//!
//! The potential is any pure `Fn(f64, f64) -> f64` supplied by the
//! caller; visualization of the result is likewise left to the caller
//! (see [`io`] for plain-text exports).
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Vector2;
//! use openneb::{relax, surfaces, NebConfig};
//!
//! fn main() -> openneb::Result<()> {
//!     let config = NebConfig::new(
//!         11,
//!         Vector2::new(-2.0 * std::f64::consts::PI, 0.0),
//!         Vector2::new(2.0 * std::f64::consts::PI, 0.0),
//!         100_000,
//!     );
//!     let result = relax(&config, surfaces::cosine_ridge)?;
//!     for position in result.chain.positions() {
//!         // hand to a plotting tool of your choice
//!         let _ = (position.x, position.y);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`chain`] - image chain data structures and the interpolating initializer
//! - [`gradient`] - central-difference numerical gradient
//! - [`forces`] - tangent estimation and the nudged force decomposition
//! - [`relax`](relax/index.html) - the damped-dynamics convergence loop
//! - [`config`] - relaxation parameters and validation
//! - [`surfaces`] - built-in analytic test surfaces
//! - [`io`] - plain-text path and energy-profile writers
//!
//! # Limitations
//!
//! 2D surfaces only; single-threaded; no climbing-image or
//! re-parametrized NEB variants; the only optimizer is the damped
//! velocity-projection scheme.
//!
//! # References
//!
//! - Henkelman, G.; Jónsson, H. *J. Chem. Phys.* **2000**, 113, 9978-9985.
//! - Sheppard, D.; Terrell, R.; Henkelman, G. *J. Chem. Phys.* **2008**, 128, 134106.

pub mod chain;
pub mod config;
pub mod error;
pub mod forces;
pub mod gradient;
pub mod io;
pub mod relax;
/// Built-in analytic test surfaces
pub mod surfaces;

pub use chain::{Chain, Image};
pub use config::NebConfig;
pub use error::{NebError, Result};
pub use relax::{relax, step, NebResult, RelaxationState};
