//! Batched point data flowing between the sampler, the distance engine, and
//! their consumers.

use crate::float_types::Real;
use nalgebra::Point3;

/// A batch of sample points plus attached per-point attributes, all columns
/// index-aligned and the same length.
///
/// The surface sampler fills every column; externally supplied query batches
/// usually carry coordinates only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBatch {
    pub x: Vec<Real>,
    pub y: Vec<Real>,
    pub z: Vec<Real>,

    /// Unit surface normal attached by the surface sampler.
    pub normal_x: Option<Vec<Real>>,
    pub normal_y: Option<Vec<Real>>,
    pub normal_z: Option<Vec<Real>>,

    /// Uniform per-point area weight: total surface area / point count.
    /// Used by integral-based loss weighting downstream, not the local
    /// triangle area.
    pub area: Option<Vec<Real>>,
}

impl PointBatch {
    /// Coordinate-only batch from a point list.
    pub fn from_points(points: &[Point3<Real>]) -> Self {
        PointBatch {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
            ..PointBatch::default()
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, index: usize) -> Point3<Real> {
        Point3::new(self.x[index], self.y[index], self.z[index])
    }

    /// Gather the coordinate columns into a point list.
    pub fn points(&self) -> Vec<Point3<Real>> {
        (0..self.len()).map(|i| self.point(i)).collect()
    }
}

/// Signed distances (and optionally a unit gradient) index-aligned with the
/// query batch they were computed from.
///
/// Sign convention: **positive inside, negative outside**.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SdfResult {
    pub sdf: Vec<Real>,
    pub sdf_dx: Option<Vec<Real>>,
    pub sdf_dy: Option<Vec<Real>>,
    pub sdf_dz: Option<Vec<Real>>,
}
