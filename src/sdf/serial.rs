//! Serial implementation of distance queries

use crate::sdf::query::query_point;
use crate::sdf::traits::{DistanceOps, SurfaceHit};
use nalgebra::Point3;

/// Serial implementation of `DistanceOps`.
pub struct SerialDistanceOps;

impl SerialDistanceOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialDistanceOps {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceOps for SerialDistanceOps {
    fn query(
        &self,
        triangles: &[[Point3<f64>; 3]],
        points: &[Point3<f64>],
    ) -> Vec<SurfaceHit> {
        points.iter().map(|p| query_point(triangles, p)).collect()
    }
}
