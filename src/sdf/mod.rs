//! Signed distance engine
//!
//! Computes the signed distance (and optionally its spatial derivative) from
//! query points to a triangle soup, with dependency inversion allowing for
//! different implementations (serial/parallel).
//!
//! Sign convention: the raw geometric solver reports distances positive
//! outside; [`signed_distance_field`] negates and rescales them so that
//! **positive denotes inside and negative denotes outside**. This flip is a
//! deliberate contract and must be preserved exactly.

pub mod normalize;
pub mod query;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use normalize::NormalizedFrame;
pub use traits::{DistanceOps, SurfaceHit};

#[cfg(not(feature = "parallel"))]
pub use serial::SerialDistanceOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelDistanceOps;

use crate::float_types::{Real, tolerance};
use crate::mesh::TriMesh;
use crate::point_batch::{PointBatch, SdfResult};
use nalgebra::{Point3, Vector3};

/// Signed distance from every point in `batch` to the surface of `mesh`.
///
/// With `airtight == false` the distances are all zero for any batch size
/// (inside/outside is undefined on a non-watertight surface, so callers get
/// interior-everywhere semantics) and no derivative is computed.
///
/// With `airtight == true` the mesh and points are normalized into a uniform
/// `[0, ~1]` frame, evaluated in double precision, and the result is rescaled
/// by `max_dis` back to the original coordinate scale.
///
/// When `compute_derivative` is set, the result additionally carries the
/// per-point unit vector `point - hit`, the direction in which the
/// interior-positive field grows. The division is epsilon-guarded: a point
/// lying exactly on the surface gets a zero gradient instead of aborting the
/// batch.
#[allow(clippy::unnecessary_cast)]
pub fn signed_distance_field(
    mesh: &TriMesh,
    batch: &PointBatch,
    compute_derivative: bool,
    airtight: bool,
) -> SdfResult {
    if !airtight {
        return SdfResult {
            sdf: vec![0.0; batch.len()],
            ..SdfResult::default()
        };
    }

    // Double precision internally regardless of input precision; distance
    // solvers are numerically sensitive near surfaces.
    let points: Vec<Point3<f64>> = batch
        .points()
        .iter()
        .map(|p| Point3::new(p.x as f64, p.y as f64, p.z as f64))
        .collect();
    let triangles = mesh.triangles_f64();

    let frame = NormalizedFrame::from_points(&points);
    let norm_triangles = frame.normalize_triangles(&triangles);
    let norm_points = frame.normalize_points(&points);

    #[cfg(not(feature = "parallel"))]
    let ops = SerialDistanceOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelDistanceOps::new();

    let hits = ops.query(&norm_triangles, &norm_points);

    // Raw convention is positive outside; flip to interior-positive while
    // rescaling to the original coordinate scale.
    let sdf: Vec<Real> = hits
        .iter()
        .map(|h| (-frame.denormalize_distance(h.distance)) as Real)
        .collect();

    let mut result = SdfResult {
        sdf,
        ..SdfResult::default()
    };

    if compute_derivative {
        let eps = tolerance() as f64;
        let mut dx = Vec::with_capacity(hits.len());
        let mut dy = Vec::with_capacity(hits.len());
        let mut dz = Vec::with_capacity(hits.len());
        for (h, p) in hits.iter().zip(&norm_points) {
            let g = p - h.hit;
            let norm = g.norm();
            let unit = if norm > eps {
                g / norm
            } else {
                // On-surface point: the gradient is undefined, clamp to zero.
                Vector3::zeros()
            };
            dx.push(unit.x as Real);
            dy.push(unit.y as Real);
            dz.push(unit.z as Real);
        }
        result.sdf_dx = Some(dx);
        result.sdf_dy = Some(dy);
        result.sdf_dz = Some(dz);
    }

    result
}
