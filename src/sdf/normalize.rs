//! Coordinate normalization for numerically stable distance queries.

use nalgebra::Point3;

/// Uniform rescale of mesh and query points into a `[0, ~1]` frame.
///
/// A single scale factor `max_dis` (the largest axis extent) is used for all
/// three axes so the distance field stays a true Euclidean metric; per-axis
/// scaling would distort distances anisotropically. The frame records
/// `(min_corner, max_dis)` so distances can be denormalized afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedFrame {
    pub min_corner: Point3<f64>,
    pub max_dis: f64,
}

impl NormalizedFrame {
    /// Frame spanning the given points.
    ///
    /// A zero or non-finite extent (empty batch, single point, or a fully
    /// coincident batch) falls back to unit scale so the division below
    /// stays defined.
    pub fn from_points(points: &[Point3<f64>]) -> Self {
        if points.is_empty() {
            return NormalizedFrame {
                min_corner: Point3::origin(),
                max_dis: 1.0,
            };
        }
        let mut mins = points[0];
        let mut maxs = points[0];
        for p in points {
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.y);
            mins.z = mins.z.min(p.z);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.y);
            maxs.z = maxs.z.max(p.z);
        }
        let max_dis = (maxs.x - mins.x)
            .max(maxs.y - mins.y)
            .max(maxs.z - mins.z);
        let max_dis = if max_dis > 0.0 && max_dis.is_finite() {
            max_dis
        } else {
            1.0
        };
        NormalizedFrame {
            min_corner: mins,
            max_dis,
        }
    }

    pub fn normalize_point(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::from((p - self.min_corner) / self.max_dis)
    }

    pub fn normalize_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.normalize_point(p)).collect()
    }

    pub fn normalize_triangles(&self, triangles: &[[Point3<f64>; 3]]) -> Vec<[Point3<f64>; 3]> {
        triangles
            .iter()
            .map(|t| t.map(|v| self.normalize_point(&v)))
            .collect()
    }

    /// Rescale a distance computed in the normalized frame back to the
    /// original coordinate scale.
    pub fn denormalize_distance(&self, distance: f64) -> f64 {
        distance * self.max_dis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scale_from_largest_extent() {
        let points = vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(5.0, 3.0, 4.0),
        ];
        let frame = NormalizedFrame::from_points(&points);
        assert_eq!(frame.min_corner, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.max_dis, 4.0);

        let n = frame.normalize_point(&Point3::new(5.0, 3.0, 4.0));
        assert_eq!(n, Point3::new(1.0, 0.25, 0.25));
    }

    #[test]
    fn distances_roundtrip_through_the_frame() {
        let points = vec![
            Point3::new(-3.0, 0.0, 0.0),
            Point3::new(7.0, 1.0, 2.0),
        ];
        let frame = NormalizedFrame::from_points(&points);
        let a = frame.normalize_point(&points[0]);
        let b = frame.normalize_point(&points[1]);
        let original = (points[1] - points[0]).norm();
        let normalized = (b - a).norm();
        assert!((frame.denormalize_distance(normalized) - original).abs() < 1e-12);
    }

    #[test]
    fn single_point_batch_gets_unit_scale() {
        let frame = NormalizedFrame::from_points(&[Point3::new(0.5, 0.5, 0.5)]);
        assert_eq!(frame.max_dis, 1.0);
        assert_eq!(
            frame.normalize_point(&Point3::new(0.5, 0.5, 0.5)),
            Point3::origin()
        );
    }

    #[test]
    fn empty_batch_is_guarded() {
        let frame = NormalizedFrame::from_points(&[]);
        assert_eq!(frame.max_dis, 1.0);
        assert_eq!(frame.min_corner, Point3::origin());
    }
}
