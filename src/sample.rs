//! Area-weighted surface sampling over a triangle soup.

use crate::errors::TessellationError;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use crate::point_batch::PointBatch;
use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// Draws points on a mesh surface proportionally to per-triangle area.
///
/// The categorical distribution over triangles is built once at construction;
/// zero-area (degenerate) triangles get zero weight and are never drawn.
#[derive(Clone, Debug)]
pub struct SurfaceSampler {
    areas: Vec<Real>,
    total_area: Real,
    distribution: WeightedIndex<Real>,
}

impl SurfaceSampler {
    /// Precompute triangle areas and the area-proportional distribution.
    ///
    /// Fails with [`TessellationError::DegenerateMesh`] if any area is NaN
    /// or the total area is zero.
    pub fn new(mesh: &TriMesh) -> Result<Self, TessellationError> {
        let areas = mesh.triangle_areas();
        if areas.iter().any(|a| !a.is_finite()) {
            return Err(TessellationError::DegenerateMesh(
                "triangle area is NaN or infinite".into(),
            ));
        }
        let total_area: Real = areas.iter().sum();
        if total_area <= 0.0 {
            return Err(TessellationError::DegenerateMesh(
                "total surface area is zero".into(),
            ));
        }
        // WeightedIndex normalizes by the L1 norm internally.
        let distribution = WeightedIndex::new(areas.iter().copied()).map_err(|e| {
            TessellationError::DegenerateMesh(format!("invalid area weights: {e}"))
        })?;
        Ok(SurfaceSampler {
            areas,
            total_area,
            distribution,
        })
    }

    pub fn total_area(&self) -> Real {
        self.total_area
    }

    /// Sample `nr_points` area-uniform points on the surface of `mesh`
    /// (the mesh the sampler was built from).
    ///
    /// The categorical draw is histogrammed into per-triangle counts first,
    /// so the per-triangle sampling work is bounded by the number of
    /// *nonempty* triangles rather than by `nr_points`, and the counts sum
    /// to `nr_points` exactly. Output is concatenated in triangle-index
    /// order; every point carries the triangle's unit normal and the uniform
    /// weight `total_area / nr_points`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        mesh: &TriMesh,
        nr_points: usize,
        rng: &mut R,
    ) -> Result<PointBatch, TessellationError> {
        if nr_points == 0 {
            return Err(TessellationError::InvalidSampleRequest);
        }

        let mut counts = vec![0usize; self.areas.len()];
        for _ in 0..nr_points {
            counts[self.distribution.sample(rng)] += 1;
        }

        let mut x = Vec::with_capacity(nr_points);
        let mut y = Vec::with_capacity(nr_points);
        let mut z = Vec::with_capacity(nr_points);
        let mut normal_x = Vec::with_capacity(nr_points);
        let mut normal_y = Vec::with_capacity(nr_points);
        let mut normal_z = Vec::with_capacity(nr_points);

        for (index, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let tri = mesh.triangle(index);
            let normal = unit_normal(mesh.normal(index));
            for _ in 0..count {
                let p = sample_triangle(tri, rng);
                x.push(p.x);
                y.push(p.y);
                z.push(p.z);
                normal_x.push(normal.x);
                normal_y.push(normal.y);
                normal_z.push(normal.z);
            }
        }

        let weight = self.total_area / nr_points as Real;
        Ok(PointBatch {
            x,
            y,
            z,
            normal_x: Some(normal_x),
            normal_y: Some(normal_y),
            normal_z: Some(normal_z),
            area: Some(vec![weight; nr_points]),
        })
    }
}

fn unit_normal(raw: &Vector3<Real>) -> Vector3<Real> {
    let scale = raw.norm();
    if scale > 0.0 { raw / scale } else { Vector3::zeros() }
}

/// Area-uniform point on a triangle: `s1 = sqrt(r1)` warps the barycentric
/// pair so samples do not bias toward the edges.
fn sample_triangle<R: Rng + ?Sized>(tri: &[Point3<Real>; 3], rng: &mut R) -> Point3<Real> {
    let r1: Real = rng.gen_range(0.0..1.0);
    let r2: Real = rng.gen_range(0.0..1.0);
    let s1 = r1.sqrt();
    Point3::from(
        tri[0].coords * (1.0 - s1)
            + tri[1].coords * ((1.0 - r2) * s1)
            + tri[2].coords * (r2 * s1),
    )
}
