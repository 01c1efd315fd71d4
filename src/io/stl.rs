//! STL import: triangulated surface meshes via the `stl_io` crate.

use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::TriMesh;
use nalgebra::Point3;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an STL file (ASCII or binary, auto-detected) into a [`TriMesh`].
///
/// Rejects unreadable files, malformed facets, and meshes with zero
/// triangles. Normals are re-derived from the vertex winding rather than
/// trusted from the file, since many exporters write zero or stale normals.
#[allow(clippy::unnecessary_cast)]
pub fn load_stl_file(path: impl AsRef<Path>) -> Result<TriMesh, IoError> {
    let mut reader = BufReader::new(File::open(path)?);
    let indexed = stl_io::read_stl(&mut reader)?;
    indexed
        .validate()
        .map_err(|e| IoError::MalformedInput(e.to_string()))?;
    if indexed.faces.is_empty() {
        return Err(IoError::MalformedInput(
            "STL file contains no triangles".into(),
        ));
    }

    let triangles = indexed
        .faces
        .iter()
        .map(|face| {
            face.vertices.map(|i| {
                let v = indexed.vertices[i];
                Point3::new(v[0] as Real, v[1] as Real, v[2] as Real)
            })
        })
        .collect();

    Ok(TriMesh::from_triangles(triangles))
}
