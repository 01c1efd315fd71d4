//! `TriMesh`: an immutable triangle soup with per-triangle normals.

use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

/// A triangulated surface: an ordered collection of triangles with
/// 1:1 indexed normals. Immutable once loaded.
///
/// Normals are stored as raw cross products (area-scaled); consumers
/// normalize at query time. Degenerate triangles carry a zero normal and
/// zero area, which excludes them from area-weighted sampling.
#[derive(Clone, Debug)]
pub struct TriMesh {
    /// Triangle vertices `[v0, v1, v2]`, indexed identically with `normals`.
    triangles: Vec<[Point3<Real>; 3]>,
    /// Raw cross-product normals.
    normals: Vec<Vector3<Real>>,
    /// Lazily calculated AABB that spans `triangles`.
    bounding_box: OnceLock<Aabb>,
}

impl TriMesh {
    /// Build a mesh from a triangle list, deriving normals from the vertex
    /// winding (`(v1 - v0) × (v2 - v0)`).
    pub fn from_triangles(triangles: Vec<[Point3<Real>; 3]>) -> Self {
        let normals = triangles.iter().map(|t| triangle_normal(t)).collect();
        TriMesh {
            triangles,
            normals,
            bounding_box: OnceLock::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangle(&self, index: usize) -> &[Point3<Real>; 3] {
        &self.triangles[index]
    }

    pub fn triangles(&self) -> &[[Point3<Real>; 3]] {
        &self.triangles
    }

    /// Raw (area-scaled) normal of triangle `index`.
    pub fn normal(&self, index: usize) -> &Vector3<Real> {
        &self.normals[index]
    }

    /// Area of every triangle, via half the cross-product magnitude.
    pub fn triangle_areas(&self) -> Vec<Real> {
        self.normals.iter().map(|n| n.norm() * 0.5).collect()
    }

    /// Sum of all triangle areas.
    pub fn total_area(&self) -> Real {
        self.triangle_areas().iter().sum()
    }

    /// Triangle vertices widened to double precision for the distance solver.
    #[allow(clippy::unnecessary_cast)]
    pub fn triangles_f64(&self) -> Vec<[Point3<f64>; 3]> {
        self.triangles
            .iter()
            .map(|t| {
                t.map(|v| Point3::new(v.x as f64, v.y as f64, v.z as f64))
            })
            .collect()
    }

    /// Returns the axis-aligned bounding box spanning all vertices.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
            for tri in &self.triangles {
                for v in tri {
                    mins.x = mins.x.min(v.x);
                    mins.y = mins.y.min(v.y);
                    mins.z = mins.z.min(v.z);
                    maxs.x = maxs.x.max(v.x);
                    maxs.y = maxs.y.max(v.y);
                    maxs.z = maxs.z.max(v.z);
                }
            }
            if self.triangles.is_empty() {
                Aabb::new(Point3::origin(), Point3::origin())
            } else {
                Aabb::new(mins, maxs)
            }
        })
    }
}

fn triangle_normal(tri: &[Point3<Real>; 3]) -> Vector3<Real> {
    let edge1 = tri[1] - tri[0];
    let edge2 = tri[2] - tri[0];
    edge1.cross(&edge2)
}
