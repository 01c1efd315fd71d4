//! Crate-wide error taxonomy.
//!
//! Construction-time failures (`MeshLoad`, `DegenerateMesh`) abort creation of
//! the whole geometry object; there is no partial or lazy mesh. Per-query
//! numerical edge cases are handled locally and never abort a batch.

use crate::io::IoError;

/// All the possible failures a tessellated geometry can surface.
#[derive(Debug, thiserror::Error)]
pub enum TessellationError {
    /// The mesh file was missing, unreadable, or malformed. Fatal — a bad
    /// file will not become valid, so there is no retry.
    #[error("failed to load mesh: {0}")]
    MeshLoad(#[from] IoError),

    /// Zero total surface area, or triangle geometry that produces NaN or
    /// negative areas. Fatal at construction.
    #[error("degenerate mesh: {0}")]
    DegenerateMesh(String),

    /// A query point lies exactly on the surface, where the distance gradient
    /// has zero length and no defined direction.
    ///
    /// [`signed_distance_field`](crate::sdf::signed_distance_field) never
    /// returns this variant: it clamps such gradients to the zero vector and
    /// finishes the batch. It is part of the public taxonomy so that callers
    /// computing their own gradients (finite differences over `sdf`, for
    /// instance) can report the condition with the batch index attached.
    #[error("sdf derivative undefined: query point {0} lies on the surface")]
    DerivativeUndefined(usize),

    /// `nr_points` was zero.
    #[error("invalid sample request: nr_points must be positive")]
    InvalidSampleRequest,

    /// Interior rejection sampling ran out of rounds without accepting any
    /// point; the enclosed volume is empty or vanishingly thin.
    #[error("interior sampling failed: no candidate point fell inside the geometry")]
    EmptyInterior,
}
