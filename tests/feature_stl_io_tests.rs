#![cfg(feature = "stl-io")]

use approx::assert_relative_eq;
use std::path::PathBuf;
use tessgeo::parameterization::Parameterization;
use tessgeo::{Tessellation, TessellationError};

const TETRAHEDRON_STL: &str = "\
solid tet
  facet normal 0 0 -1
    outer loop
      vertex 0 0 0
      vertex 0 1 0
      vertex 1 0 0
    endloop
  endfacet
  facet normal 0 -1 0
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 0 1
    endloop
  endfacet
  facet normal -1 0 0
    outer loop
      vertex 0 0 0
      vertex 0 0 1
      vertex 0 1 0
    endloop
  endfacet
  facet normal 0.577 0.577 0.577
    outer loop
      vertex 1 0 0
      vertex 0 1 0
      vertex 0 0 1
    endloop
  endfacet
endsolid tet
";

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tessgeo_{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_an_ascii_tetrahedron() {
    let path = write_temp("tet.stl", TETRAHEDRON_STL);
    let geo = Tessellation::from_stl_file(&path, true, Parameterization::new()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(geo.mesh().len(), 4);
    let bounds = geo.bounds();
    assert_eq!(bounds.x, (0.0, 1.0));
    assert_eq!(bounds.y, (0.0, 1.0));
    assert_eq!(bounds.z, (0.0, 1.0));
    // 3 right triangles of area 1/2 plus the slanted face of area sqrt(3)/2
    assert_relative_eq!(
        geo.total_area(),
        1.5 + (3.0_f64.sqrt() as tessgeo::float_types::Real) / 2.0,
        epsilon = 1e-6
    );
}

#[test]
fn rejects_a_missing_file() {
    let err = Tessellation::from_stl_file(
        "/nonexistent/definitely_not_here.stl",
        true,
        Parameterization::new(),
    )
    .unwrap_err();
    assert!(matches!(err, TessellationError::MeshLoad(_)));
}

#[test]
fn rejects_an_empty_solid() {
    let path = write_temp("empty.stl", "solid empty\nendsolid empty\n");
    let result = Tessellation::from_stl_file(&path, true, Parameterization::new());
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(TessellationError::MeshLoad(_))));
}

#[test]
fn rejects_garbage_input() {
    let path = write_temp("garbage.stl", "this is not an stl file at all");
    let result = Tessellation::from_stl_file(&path, true, Parameterization::new());
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(TessellationError::MeshLoad(_))));
}
