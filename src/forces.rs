//! Tangent estimation and the nudged force decomposition.
//!
//! The NEB force on each interior image combines two contributions:
//!
//! 1. **Parallel spring force**: a 1D spring term along the path tangent
//!    that keeps adjacent images evenly spaced,
//!    ```text
//!    F_par = k (|R_right - R| - |R_left - R|) tau
//!    ```
//! 2. **Perpendicular potential force**: the component of the potential
//!    gradient orthogonal to the tangent,
//!    ```text
//!    F_perp = g - (g . tau) tau,    g = grad V(R)
//!    ```
//!
//! The net force per interior image is `F = F_par - F_perp`. Projecting out
//! the parallel part of the gradient is the "nudging": the band deforms to
//! follow the valley floor without sliding downhill along its own length.
//!
//! Endpoint images have no tangent and contribute no force; that absence is
//! modeled as `None` and propagates through the decomposition, so endpoints
//! are excluded from the assembled force vector.
//!
//! # References
//!
//! - Henkelman, G.; Jónsson, H. *J. Chem. Phys.* **2000**, 113, 9978-9985.

use crate::chain::Chain;
use crate::error::{NebError, Result};
use crate::gradient::central_difference;
use nalgebra::{DVector, Vector2};

/// Below this tangent length the normalization is considered ill-defined.
const DEGENERACY_EPS: f64 = 1e-12;

/// Estimates the path tangent at the image `index` as the unit vector from
/// the left neighbor's position to the right neighbor's position.
///
/// Returns `Ok(None)` for the two endpoint images, which have no tangent
/// (they are never relaxed, so none is needed). Returns
/// [`NebError::DegenerateGeometry`] when the neighbor positions coincide
/// and the normalization would divide by a zero-length vector.
pub fn tangent(chain: &Chain, index: usize) -> Result<Option<Vector2<f64>>> {
    let image = chain.image(index);
    let (left, right) = match (image.left, image.right) {
        (Some(left), Some(right)) => (left, right),
        _ => return Ok(None),
    };
    let span = chain.image(right).position - chain.image(left).position;
    let norm = span.norm();
    if norm < DEGENERACY_EPS {
        return Err(NebError::DegenerateGeometry {
            index,
            reason: format!(
                "neighbor images {} and {} coincide, tangent is undefined",
                left, right
            ),
        });
    }
    Ok(Some(span / norm))
}

/// Spring force along the tangent for the image at `index`.
///
/// The magnitude is `k` times the difference between the distances to the
/// right and left neighbors, pulling the image toward whichever neighbor is
/// farther. Returns `None` for endpoint images (absent tangent).
pub fn parallel_spring(
    chain: &Chain,
    index: usize,
    tangent: Option<&Vector2<f64>>,
    spring_constant: f64,
) -> Option<Vector2<f64>> {
    let tangent = tangent?;
    let image = chain.image(index);
    let (left, right) = (image.left?, image.right?);
    let to_right = (chain.image(right).position - image.position).norm();
    let to_left = (chain.image(left).position - image.position).norm();
    Some(tangent * (spring_constant * (to_right - to_left)))
}

/// Component of the potential gradient perpendicular to the tangent at the
/// image at `index`, estimated with central differences of step
/// `gradient_step`. Returns `None` for endpoint images.
pub fn perpendicular_gradient<F>(
    chain: &Chain,
    index: usize,
    tangent: Option<&Vector2<f64>>,
    potential: &F,
    gradient_step: f64,
) -> Option<Vector2<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    let tangent = tangent?;
    let grad = central_difference(potential, &chain.image(index).position, gradient_step);
    Some(grad - tangent * grad.dot(tangent))
}

/// Assembles the net force vector over all interior images.
///
/// For each interior image the net force is `F_par - F_perp`; endpoint
/// images contribute nothing. The result is a flat vector of length
/// `2 * interior_len`, concatenating the two components of each interior
/// image's force in chain order.
pub fn assemble<F>(
    chain: &Chain,
    spring_constant: f64,
    gradient_step: f64,
    potential: &F,
) -> Result<DVector<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    let mut components = Vec::with_capacity(2 * chain.interior_len());
    for image in chain.images() {
        let tangent = tangent(chain, image.index)?;
        let spring = parallel_spring(chain, image.index, tangent.as_ref(), spring_constant);
        let perp =
            perpendicular_gradient(chain, image.index, tangent.as_ref(), potential, gradient_step);
        if let (Some(spring), Some(perp)) = (spring, perp) {
            let net = spring - perp;
            components.push(net.x);
            components.push(net.y);
        }
    }
    Ok(DVector::from_vec(components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::DEFAULT_GRADIENT_STEP;

    fn flat(_x: f64, _y: f64) -> f64 {
        0.0
    }

    #[test]
    fn test_tangent_is_unit_vector() {
        let chain = Chain::interpolated(5, Vector2::new(-2.0, 1.0), Vector2::new(4.0, -3.0));
        for index in chain.interior_indices() {
            let t = tangent(&chain, index).unwrap().unwrap();
            assert!((t.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tangent_none_for_endpoints() {
        let chain = Chain::interpolated(3, Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        assert!(tangent(&chain, 0).unwrap().is_none());
        assert!(tangent(&chain, chain.len() - 1).unwrap().is_none());
    }

    #[test]
    fn test_tangent_degenerate_when_neighbors_coincide() {
        // Coincident endpoints collapse every image onto one point.
        let chain = Chain::interpolated(2, Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0));
        let err = tangent(&chain, 1).unwrap_err();
        assert!(matches!(err, NebError::DegenerateGeometry { index: 1, .. }));
    }

    #[test]
    fn test_spring_vanishes_for_even_spacing() {
        let chain = Chain::interpolated(3, Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0));
        for index in chain.interior_indices() {
            let t = tangent(&chain, index).unwrap();
            let spring = parallel_spring(&chain, index, t.as_ref(), 1.0).unwrap();
            assert!(spring.norm() < 1e-12);
        }
    }

    #[test]
    fn test_perpendicular_gradient_is_orthogonal_to_tangent() {
        let chain = Chain::interpolated(3, Vector2::new(-1.0, -1.0), Vector2::new(2.0, 1.0));
        let potential = |x: f64, y: f64| x * x + 3.0 * y * y + x * y;
        for index in chain.interior_indices() {
            let t = tangent(&chain, index).unwrap();
            let perp =
                perpendicular_gradient(&chain, index, t.as_ref(), &potential, DEFAULT_GRADIENT_STEP)
                    .unwrap();
            assert!(perp.dot(&t.unwrap()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_assemble_length_and_endpoint_exclusion() {
        let chain = Chain::interpolated(4, Vector2::new(0.0, 0.0), Vector2::new(1.0, 2.0));
        let force = assemble(&chain, 1.0, DEFAULT_GRADIENT_STEP, &flat).unwrap();
        assert_eq!(force.len(), 8);

        let bare = Chain::interpolated(0, Vector2::new(0.0, 0.0), Vector2::new(1.0, 2.0));
        let force = assemble(&bare, 1.0, DEFAULT_GRADIENT_STEP, &flat).unwrap();
        assert_eq!(force.len(), 0);
    }
}
