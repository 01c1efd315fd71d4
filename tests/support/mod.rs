//! Test support library
//! Provides mesh fixtures & helper functions for tests.

use nalgebra::Point3;
use tessgeo::float_types::Real;
use tessgeo::mesh::TriMesh;

/// Axis-aligned unit cube `[0,1]^3` as 12 triangles (2 per face), wound
/// counter-clockwise when viewed from outside. All triangles have equal area.
pub fn unit_cube() -> TriMesh {
    let p = |x: Real, y: Real, z: Real| Point3::new(x, y, z);

    // corners
    let c000 = p(0.0, 0.0, 0.0);
    let c100 = p(1.0, 0.0, 0.0);
    let c010 = p(0.0, 1.0, 0.0);
    let c110 = p(1.0, 1.0, 0.0);
    let c001 = p(0.0, 0.0, 1.0);
    let c101 = p(1.0, 0.0, 1.0);
    let c011 = p(0.0, 1.0, 1.0);
    let c111 = p(1.0, 1.0, 1.0);

    TriMesh::from_triangles(vec![
        // z = 0 (normal -z)
        [c000, c010, c110],
        [c000, c110, c100],
        // z = 1 (normal +z)
        [c001, c101, c111],
        [c001, c111, c011],
        // y = 0 (normal -y)
        [c000, c100, c101],
        [c000, c101, c001],
        // y = 1 (normal +y)
        [c010, c011, c111],
        [c010, c111, c110],
        // x = 0 (normal -x)
        [c000, c001, c011],
        [c000, c011, c010],
        // x = 1 (normal +x)
        [c100, c110, c111],
        [c100, c111, c101],
    ])
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
#[allow(dead_code)]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
