//! Core chain and image data structures for NEB path representations.
//!
//! This module provides the fundamental data types for representing the
//! elastic band as a chain of discrete images:
//!
//! - [`Image`]: a single point on the band with its neighbor links
//! - [`Chain`]: the ordered arena of images between two fixed endpoints
//!
//! Images reference their neighbors by index into the owning chain rather
//! than by direct reference, so the chain is a flat `Vec` with no ownership
//! cycles. Exactly two images (the first and the last) have an absent
//! neighbor on one side; these are the fixed endpoints and are never
//! repositioned during relaxation.

use nalgebra::Vector2;

/// A single discretization point along the elastic band.
///
/// An image remembers its index in the chain, the indices of its left and
/// right neighbors, and its current position on the potential surface.
/// Interior images are free to move; the two endpoint images (those with an
/// absent neighbor on one side) stay at their initial positions for the
/// lifetime of the chain.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use openneb::Chain;
///
/// let chain = Chain::interpolated(3, Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0));
/// let first = chain.image(0);
/// assert!(first.left.is_none());
/// assert_eq!(first.right, Some(1));
/// assert!(first.is_endpoint());
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    /// Zero-based position in the chain, fixed for the image's lifetime.
    pub index: usize,
    /// Index of the left neighbor, or `None` for the first image.
    pub left: Option<usize>,
    /// Index of the right neighbor, or `None` for the last image.
    pub right: Option<usize>,
    /// Current coordinates on the potential surface. Mutated once per
    /// relaxation iteration for interior images only.
    pub position: Vector2<f64>,
}

impl Image {
    /// Returns `true` if this image is one of the two fixed endpoints.
    pub fn is_endpoint(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }
}

/// An ordered sequence of images forming the elastic band.
///
/// A chain holds `num_images + 2` images indexed `0..num_images + 2`, where
/// `num_images` counts the movable interior images and the `+2` accounts for
/// the two fixed endpoints. Neighbor links form a simple path graph with no
/// branching and no cycles.
///
/// The chain is created once by [`Chain::interpolated`]; endpoint positions
/// never change afterwards, and interior positions are updated in place by
/// the relaxation integrator.
#[derive(Debug, Clone)]
pub struct Chain {
    images: Vec<Image>,
}

impl Chain {
    /// Builds a chain of `num_images + 2` images with positions linearly
    /// interpolated, component-wise, between `start` and `end` inclusive.
    ///
    /// The first image sits exactly at `start`, the last exactly at `end`,
    /// and successive positions differ by the same step vector. A
    /// `num_images` of zero yields a chain of just the two endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::Vector2;
    /// use openneb::Chain;
    ///
    /// let chain = Chain::interpolated(2, Vector2::new(0.0, 0.0), Vector2::new(3.0, 3.0));
    /// assert_eq!(chain.len(), 4);
    /// assert_eq!(chain.image(1).position, Vector2::new(1.0, 1.0));
    /// ```
    pub fn interpolated(num_images: usize, start: Vector2<f64>, end: Vector2<f64>) -> Self {
        let total = num_images + 2;
        let span = end - start;
        let images = (0..total)
            .map(|index| {
                let t = index as f64 / (total - 1) as f64;
                Image {
                    index,
                    left: index.checked_sub(1),
                    right: if index + 1 < total {
                        Some(index + 1)
                    } else {
                        None
                    },
                    position: start + span * t,
                }
            })
            .collect();
        Self { images }
    }

    /// Total number of images including the two endpoints.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// A chain is never empty; it always holds at least the two endpoints.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of movable interior images.
    pub fn interior_len(&self) -> usize {
        self.images.len() - 2
    }

    /// Indices of the movable interior images, in chain order.
    pub fn interior_indices(&self) -> std::ops::Range<usize> {
        1..self.images.len() - 1
    }

    /// Borrows the image at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn image(&self, index: usize) -> &Image {
        &self.images[index]
    }

    /// Iterates over all images in chain order.
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.images.iter()
    }

    /// Positions of all images in chain order.
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.images.iter().map(|image| image.position).collect()
    }

    /// Moves the image at `index` by `delta`. Interior images only; the
    /// integrator never calls this for an endpoint.
    pub(crate) fn displace(&mut self, index: usize, delta: Vector2<f64>) {
        debug_assert!(!self.images[index].is_endpoint());
        self.images[index].position += delta;
    }

    /// Total arc length of the band, summed over consecutive image pairs.
    pub fn path_length(&self) -> f64 {
        self.images
            .windows(2)
            .map(|pair| (pair[1].position - pair[0].position).norm())
            .sum()
    }

    /// Highest potential value among the interior images, or `None` when
    /// the chain has no interior images.
    ///
    /// The maximum over interior images approximates the barrier height
    /// along the relaxed path.
    pub fn highest_interior_energy<F>(&self, potential: &F) -> Option<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.interior_indices()
            .map(|index| {
                let p = self.images[index].position;
                potential(p.x, p.y)
            })
            .fold(None, |max, e| match max {
                Some(m) if m >= e => Some(m),
                _ => Some(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolated_image_count() {
        for num_images in [0usize, 1, 5, 11] {
            let chain =
                Chain::interpolated(num_images, Vector2::new(-1.0, 2.0), Vector2::new(3.0, -4.0));
            assert_eq!(chain.len(), num_images + 2);
            assert_eq!(chain.interior_len(), num_images);
        }
    }

    #[test]
    fn test_interpolated_even_spacing() {
        let chain = Chain::interpolated(4, Vector2::new(0.0, 1.0), Vector2::new(5.0, -9.0));
        let positions = chain.positions();
        let first_step = positions[1] - positions[0];
        for pair in positions.windows(2) {
            let step = pair[1] - pair[0];
            assert!((step - first_step).norm() < 1e-12);
        }
        assert_eq!(positions[0], Vector2::new(0.0, 1.0));
        assert_eq!(positions[5], Vector2::new(5.0, -9.0));
    }

    #[test]
    fn test_neighbor_links_form_simple_path() {
        let chain = Chain::interpolated(3, Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        assert_eq!(chain.image(0).left, None);
        assert_eq!(chain.image(chain.len() - 1).right, None);
        let endpoints = chain.images().filter(|image| image.is_endpoint()).count();
        assert_eq!(endpoints, 2);
        for index in chain.interior_indices() {
            assert_eq!(chain.image(index).left, Some(index - 1));
            assert_eq!(chain.image(index).right, Some(index + 1));
        }
    }

    #[test]
    fn test_path_length_straight_line() {
        let chain = Chain::interpolated(7, Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0));
        assert!((chain.path_length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_highest_interior_energy() {
        let chain = Chain::interpolated(3, Vector2::new(-1.0, 0.0), Vector2::new(1.0, 0.0));
        // Interior x positions are -0.5, 0.0, 0.5; -x^2 peaks at x = 0.
        let barrier = chain.highest_interior_energy(&|x, _y| -x * x).unwrap();
        assert!(barrier.abs() < 1e-12);

        let bare = Chain::interpolated(0, Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        assert!(bare.highest_interior_energy(&|x, _y| x).is_none());
    }
}
