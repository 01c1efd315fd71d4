//! `Tessellation`: a queryable geometric domain built from a triangle mesh.
//!
//! The mesh surface is the geometry's boundary; interior membership comes
//! from the sign of the distance field. The same capability set
//! (`sample_boundary`, `sample_interior`, `sdf`, `bounds`) is what analytic
//! primitives expose elsewhere, so constraint and validator collaborators
//! can consume either interchangeably.

use crate::errors::TessellationError;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use crate::parameterization::{Bounds, ParamSamples, Parameterization};
use crate::point_batch::{PointBatch, SdfResult};
use crate::sample::SurfaceSampler;
use crate::sdf::signed_distance_field;
use nalgebra::Point3;
use rand::Rng;

/// Rejection-sampling rounds before `sample_interior` gives up.
const MAX_REJECTION_ROUNDS: usize = 1000;

/// A tessellated geometry: an owned immutable [`TriMesh`] plus the sampler,
/// bounds, and flags needed to answer boundary/interior/distance queries.
#[derive(Clone, Debug)]
pub struct Tessellation {
    mesh: TriMesh,
    airtight: bool,
    parameterization: Parameterization,
    sampler: SurfaceSampler,
    bounds: Bounds,
}

impl Tessellation {
    /// Build a geometry from an in-memory mesh.
    ///
    /// `airtight` declares the surface watertight; when false, `sdf` reports
    /// zero everywhere (inside/outside is undefined). Fails with
    /// [`TessellationError::DegenerateMesh`] for an empty mesh or one with
    /// zero total surface area — construction-time errors abort the whole
    /// object, there is no partial mesh.
    pub fn new(
        mesh: TriMesh,
        airtight: bool,
        parameterization: Parameterization,
    ) -> Result<Self, TessellationError> {
        if mesh.is_empty() {
            return Err(TessellationError::DegenerateMesh(
                "mesh has no triangles".into(),
            ));
        }
        let sampler = SurfaceSampler::new(&mesh)?;
        let bounds = Bounds::from_aabb(&mesh.bounding_box());
        Ok(Tessellation {
            mesh,
            airtight,
            parameterization,
            sampler,
            bounds,
        })
    }

    /// Build a geometry from an STL file.
    #[cfg(feature = "stl-io")]
    pub fn from_stl_file(
        path: impl AsRef<std::path::Path>,
        airtight: bool,
        parameterization: Parameterization,
    ) -> Result<Self, TessellationError> {
        let mesh = crate::io::load_stl_file(path)?;
        Self::new(mesh, airtight, parameterization)
    }

    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    pub fn airtight(&self) -> bool {
        self.airtight
    }

    /// Axis-aligned extents of the mesh vertices, computed once at
    /// construction. Independent of the `airtight` flag.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn total_area(&self) -> Real {
        self.sampler.total_area()
    }

    /// Sample `nr_points` on the mesh surface (the geometry's boundary),
    /// proportionally to triangle area, plus index-aligned parameter values.
    ///
    /// Uses the thread-local rng; see [`sample_boundary_with`] for seeded,
    /// reproducible draws. `quasirandom` applies to the parameter columns
    /// (Halton); the spatial draw is always pseudo-random.
    ///
    /// [`sample_boundary_with`]: Tessellation::sample_boundary_with
    pub fn sample_boundary(
        &self,
        nr_points: usize,
        quasirandom: bool,
    ) -> Result<(PointBatch, ParamSamples), TessellationError> {
        self.sample_boundary_with(nr_points, quasirandom, &mut rand::thread_rng())
    }

    /// [`sample_boundary`](Tessellation::sample_boundary) with a caller-owned
    /// rng.
    pub fn sample_boundary_with<R: Rng + ?Sized>(
        &self,
        nr_points: usize,
        quasirandom: bool,
        rng: &mut R,
    ) -> Result<(PointBatch, ParamSamples), TessellationError> {
        let batch = self.sampler.sample(&self.mesh, nr_points, rng)?;
        let params = self.parameterization.sample(nr_points, quasirandom, rng);
        Ok((batch, params))
    }

    /// Signed distance for every point in `batch`, positive inside.
    ///
    /// A pure function of its inputs: repeated calls with the same batch and
    /// `compute_derivative = false` return bit-identical distances.
    pub fn sdf(&self, batch: &PointBatch, compute_derivative: bool) -> SdfResult {
        signed_distance_field(&self.mesh, batch, compute_derivative, self.airtight)
    }

    /// Sample `nr_points` inside the geometry by rejection: bounding-box
    /// uniform candidates filtered by SDF sign. A non-airtight geometry
    /// accepts every candidate (interior-everywhere semantics).
    ///
    /// Each accepted point carries a volume weight: the Monte-Carlo volume
    /// estimate divided by `nr_points`. Fails with
    /// [`TessellationError::EmptyInterior`] when the enclosed volume never
    /// accepts within the round budget.
    pub fn sample_interior(&self, nr_points: usize) -> Result<PointBatch, TessellationError> {
        self.sample_interior_with(nr_points, &mut rand::thread_rng())
    }

    /// [`sample_interior`](Tessellation::sample_interior) with a caller-owned
    /// rng.
    pub fn sample_interior_with<R: Rng + ?Sized>(
        &self,
        nr_points: usize,
        rng: &mut R,
    ) -> Result<PointBatch, TessellationError> {
        if nr_points == 0 {
            return Err(TessellationError::InvalidSampleRequest);
        }

        let mut accepted: Vec<Point3<Real>> = Vec::with_capacity(nr_points);
        let mut tested = 0usize;

        for _ in 0..MAX_REJECTION_ROUNDS {
            let candidates: Vec<Point3<Real>> =
                (0..nr_points).map(|_| self.bounds.sample_point(rng)).collect();
            let result = self.sdf(&PointBatch::from_points(&candidates), false);

            for (p, &d) in candidates.iter().zip(&result.sdf) {
                tested += 1;
                if !self.airtight || d > 0.0 {
                    accepted.push(*p);
                    if accepted.len() == nr_points {
                        break;
                    }
                }
            }
            if accepted.len() == nr_points {
                break;
            }
        }

        if accepted.len() < nr_points {
            return Err(TessellationError::EmptyInterior);
        }

        let volume = self.bounds.volume() * (nr_points as Real / tested as Real);
        let mut batch = PointBatch::from_points(&accepted);
        batch.area = Some(vec![volume / nr_points as Real; nr_points]);
        Ok(batch)
    }
}
