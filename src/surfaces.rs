//! Built-in analytic potential surfaces for demos and testing.
//!
//! The relaxation itself accepts any `Fn(f64, f64) -> f64`; these are
//! well-known 2D model surfaces convenient for exercising the solver
//! without wiring up an external energy function.

/// Cosine ridge surface,
/// `V(x, y) = 0.5 cos(x/2) - cos(y/4) + 0.05 y`.
///
/// Periodic minima in `x` separated by ridges, with a shallow tilted
/// valley in `y`. The minima at `x = +-2pi`, connected across the saddle
/// at `x = 0`, make a simple two-basin MEP problem.
pub fn cosine_ridge(x: f64, y: f64) -> f64 {
    0.5 * (x / 2.0).cos() - (y / 4.0).cos() + 5e-2 * y
}

/// Cosine ridge surface without the tilt term,
/// `V(x, y) = 0.5 cos(x/2) - cos(y/4)`.
///
/// Symmetric under `x -> -x`, so a band with mirror-symmetric endpoints
/// relaxes to a mirror-symmetric path.
pub fn cosine_ridge_symmetric(x: f64, y: f64) -> f64 {
    0.5 * (x / 2.0).cos() - (y / 4.0).cos()
}

/// Müller-Brown surface, the standard benchmark for saddle-point search
/// methods. Its global minimum near `(-0.558, 1.442)` and the minimum
/// near `(0.623, 0.028)` are connected through two saddles.
///
/// Note the steepness: gradients reach several hundred in magnitude, so
/// relaxation on this surface needs a much smaller time step than the
/// cosine surfaces.
pub fn muller_brown(x: f64, y: f64) -> f64 {
    const A: [f64; 4] = [-200.0, -100.0, -170.0, 15.0];
    const AX: [f64; 4] = [-1.0, -1.0, -6.5, 0.7];
    const BX: [f64; 4] = [0.0, 0.0, 11.0, 0.6];
    const CX: [f64; 4] = [-10.0, -10.0, -6.5, 0.7];
    const X0: [f64; 4] = [1.0, 0.0, -0.5, -1.0];
    const Y0: [f64; 4] = [0.0, 0.5, 1.5, 1.0];

    (0..4)
        .map(|i| {
            let dx = x - X0[i];
            let dy = y - Y0[i];
            A[i] * (AX[i] * dx * dx + BX[i] * dx * dy + CX[i] * dy * dy).exp()
        })
        .sum()
}

/// Looks up a built-in surface by name.
///
/// Recognized names: `cosine`, `cosine-symmetric`, `muller-brown`.
pub fn by_name(name: &str) -> Option<fn(f64, f64) -> f64> {
    match name {
        "cosine" => Some(cosine_ridge),
        "cosine-symmetric" => Some(cosine_ridge_symmetric),
        "muller-brown" => Some(muller_brown),
        _ => None,
    }
}
