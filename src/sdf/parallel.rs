//! Parallel implementation of distance queries
//!
//! Points are independent, so the batch is partitioned by point range;
//! `rayon` preserves output order under `collect`.

use crate::sdf::query::query_point;
use crate::sdf::traits::{DistanceOps, SurfaceHit};
use nalgebra::Point3;
use rayon::prelude::*;

/// Parallel implementation of `DistanceOps`.
pub struct ParallelDistanceOps;

impl ParallelDistanceOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelDistanceOps {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceOps for ParallelDistanceOps {
    fn query(
        &self,
        triangles: &[[Point3<f64>; 3]],
        points: &[Point3<f64>],
    ) -> Vec<SurfaceHit> {
        points
            .par_iter()
            .map(|p| query_point(triangles, p))
            .collect()
    }
}
