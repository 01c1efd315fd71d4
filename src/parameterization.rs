//! Auxiliary parameter sampling and axis-aligned geometry bounds.

use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use nalgebra::Point3;
use rand::Rng;
use std::collections::BTreeMap;

/// Samples drawn from a [`Parameterization`]: parameter name to an ordered
/// column of values, index-aligned with the spatial batch they accompany.
pub type ParamSamples = BTreeMap<String, Vec<Real>>;

/// An auxiliary sampling distribution over extra scalar parameters (e.g.
/// time or a shape coefficient), independent of spatial coordinates.
///
/// Each parameter is a uniform range `[lo, hi]`. An empty parameterization
/// samples to an empty map.
#[derive(Clone, Debug, Default)]
pub struct Parameterization {
    ranges: BTreeMap<String, (Real, Real)>,
}

impl Parameterization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a uniform parameter range.
    pub fn with_range(mut self, name: impl Into<String>, lo: Real, hi: Real) -> Self {
        self.ranges.insert(name.into(), (lo, hi));
        self
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Draw `nr_points` values per parameter. With `quasirandom` the values
    /// come from a Halton sequence (one prime base per parameter) instead of
    /// the rng, giving a deterministic low-discrepancy fill of each range.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        nr_points: usize,
        quasirandom: bool,
        rng: &mut R,
    ) -> ParamSamples {
        self.ranges
            .iter()
            .enumerate()
            .map(|(k, (name, &(lo, hi)))| {
                let values: Vec<Real> = if quasirandom {
                    let base = HALTON_PRIMES[k % HALTON_PRIMES.len()];
                    (0..nr_points)
                        .map(|i| lo + (halton(i + 1, base) as Real) * (hi - lo))
                        .collect()
                } else {
                    (0..nr_points).map(|_| rng.gen_range(lo..=hi)).collect()
                };
                (name.clone(), values)
            })
            .collect()
    }
}

const HALTON_PRIMES: [usize; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// `index`-th element of the base-`base` Halton sequence, in `[0, 1)`.
fn halton(mut index: usize, base: usize) -> f64 {
    let mut f = 1.0;
    let mut r = 0.0;
    while index > 0 {
        f /= base as f64;
        r += f * (index % base) as f64;
        index /= base;
    }
    r
}

/// Per-axis `(min, max)` extents of a geometry, derived once from the mesh
/// vertices and immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: (Real, Real),
    pub y: (Real, Real),
    pub z: (Real, Real),
}

impl Bounds {
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Bounds {
            x: (aabb.mins.x, aabb.maxs.x),
            y: (aabb.mins.y, aabb.maxs.y),
            z: (aabb.mins.z, aabb.maxs.z),
        }
    }

    /// Volume of the bounding box.
    pub fn volume(&self) -> Real {
        (self.x.1 - self.x.0).max(0.0)
            * (self.y.1 - self.y.0).max(0.0)
            * (self.z.1 - self.z.0).max(0.0)
    }

    /// A point drawn uniformly inside the box.
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point3<Real> {
        Point3::new(
            rng.gen_range(self.x.0..=self.x.1),
            rng.gen_range(self.y.0..=self.y.1),
            rng.gen_range(self.z.0..=self.z.1),
        )
    }
}
