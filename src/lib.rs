//! Surface sampling and signed distance queries on **tessellated geometry**:
//! triangle-soup meshes loaded from STL files or built in memory.
//!
//! A [`Tessellation`] owns an immutable [`TriMesh`](mesh::TriMesh) and exposes:
//! - [`sample_boundary`](tessellation::Tessellation::sample_boundary):
//!   points drawn on the surface proportionally to triangle area,
//! - [`sdf`](tessellation::Tessellation::sdf): signed distance (and optional
//!   unit gradient) from arbitrary query points to the surface,
//! - [`bounds`](tessellation::Tessellation::bounds): the axis-aligned extents
//!   of the mesh vertices.
//!
//! Sign convention: **positive inside, negative outside**.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreaded distance queries

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod parameterization;
pub mod point_batch;
pub mod sample;
pub mod sdf;
pub mod tessellation;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::TessellationError;
pub use point_batch::{PointBatch, SdfResult};
pub use tessellation::Tessellation;
