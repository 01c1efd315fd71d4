//! Traits defining distance-query operations for dependency inversion

use nalgebra::Point3;

/// Closest-surface query result for one point, in the normalized frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    /// Raw signed distance: positive outside the surface, negative inside.
    pub distance: f64,
    /// Closest point on the triangle soup.
    pub hit: Point3<f64>,
}

/// Core distance-query operations trait
pub trait DistanceOps {
    /// Signed distance and closest hit for every query point against the
    /// whole triangle soup. Output is index-aligned with `points`.
    fn query(
        &self,
        triangles: &[[Point3<f64>; 3]],
        points: &[Point3<f64>],
    ) -> Vec<SurfaceHit>;
}
