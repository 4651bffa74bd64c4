//! Central-difference numerical gradient of a scalar potential.

use nalgebra::Vector2;

/// Default finite-difference step for gradient estimation.
pub const DEFAULT_GRADIENT_STEP: f64 = 1e-3;

/// Estimates the gradient of `potential` at `point` using central
/// differences with step `step`, spending exactly four potential
/// evaluations:
///
/// ```text
/// dV/dx ~ (V(x + h, y) - V(x - h, y)) / 2h
/// dV/dy ~ (V(x, y + h) - V(x, y - h)) / 2h
/// ```
///
/// Truncation error is O(h^2); cancellation error for ill-conditioned
/// potentials is the caller's responsibility via the choice of `step`.
pub fn central_difference<F>(potential: &F, point: &Vector2<f64>, step: f64) -> Vector2<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let dx = (potential(point.x + step, point.y) - potential(point.x - step, point.y))
        / (2.0 * step);
    let dy = (potential(point.x, point.y + step) - potential(point.x, point.y - step))
        / (2.0 * step);
    Vector2::new(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_of_paraboloid() {
        // V = x^2 + y^2 has gradient (2x, 2y); central differences are
        // exact for quadratics up to rounding.
        let grad = central_difference(
            &|x, y| x * x + y * y,
            &Vector2::new(1.0, 2.0),
            DEFAULT_GRADIENT_STEP,
        );
        assert!((grad.x - 2.0).abs() < 1e-9);
        assert!((grad.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_gradient_of_transcendental() {
        // V = sin(x) cos(y); analytic gradient (cos(x) cos(y), -sin(x) sin(y)).
        let point = Vector2::new(0.7, -1.3);
        let grad = central_difference(&|x, y| x.sin() * y.cos(), &point, DEFAULT_GRADIENT_STEP);
        let expected_x = point.x.cos() * point.y.cos();
        let expected_y = -point.x.sin() * point.y.sin();
        // O(h^2) with h = 1e-3 leaves roughly 1e-6 headroom.
        assert!((grad.x - expected_x).abs() < 1e-6);
        assert!((grad.y - expected_y).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_uses_four_evaluations() {
        use std::cell::Cell;
        let calls = Cell::new(0usize);
        let counting = |x: f64, y: f64| {
            calls.set(calls.get() + 1);
            x + y
        };
        central_difference(&counting, &Vector2::new(0.0, 0.0), DEFAULT_GRADIENT_STEP);
        assert_eq!(calls.get(), 4);
    }
}
