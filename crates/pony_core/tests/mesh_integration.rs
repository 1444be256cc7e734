//! Integration tests for meshes driven by the math library
//!
//! These tests verify that meshes work with pony_math values end to end:
//! 1. Vertices transformed through quaternions and matrices
//! 2. Colors converted between float and integer storage
//! 3. Rejected edits leave the mesh and its change flags untouched

use pony_core::{Mesh, MeshChanges, MeshError};
use pony_math::{Matrix4x4, Quaternion, RGBAInt, Vector2, Vector3, Vector4, RGBA};

fn triangle() -> Mesh {
    Mesh::new(
        vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ],
        vec![Vector3::new(0, 1, 2)],
    )
    .expect("triangle should be valid")
}

// ==================== Transform Tests ====================

/// Rotating every vertex with a quaternion keeps their lengths
#[test]
fn test_rotate_vertices_with_quaternion() {
    let mut mesh = triangle();
    mesh.take_changes();

    let diagonal = Vector3::new(1.0_f32, 1.0, 1.0).normalized();
    let rotation = Quaternion::create_by_axis_angle_degrees(diagonal, 120.0);
    mesh.map_vertices(|v| rotation * v);

    assert_eq!(mesh.take_changes(), MeshChanges::VERTICES);
    for vertex in mesh.vertices() {
        assert!(vertex.is_almost_unit(1e-5), "rotation should preserve length");
    }
    // a third of a turn about the diagonal cycles the axes
    let cycled = mesh.vertices()[0];
    assert!(
        cycled.almost_equal_with(Vector3::new(0.0, 1.0, 0.0), 1e-8)
            || cycled.almost_equal_with(Vector3::new(0.0, 0.0, 1.0), 1e-8),
        "unexpected vertex {}",
        cycled
    );
}

/// Homogeneous points go through a 4x4 matrix
#[test]
fn test_translate_vertices_with_matrix() {
    let mut mesh = triangle();
    let mut translation = Matrix4x4::<f32>::identity();
    translation.set_column(3, Vector4::new(2.0, -1.0, 0.5, 1.0));

    mesh.map_vertices(|v| (translation * Vector4::point(v)).xyz());
    assert_eq!(mesh.vertices()[0], Vector3::new(3.0, -1.0, 0.5));
    assert_eq!(mesh.vertices()[2], Vector3::new(2.0, -1.0, 1.5));
}

// ==================== Attribute Tests ====================

/// Integer colors convert into mesh colors
#[test]
fn test_colors_from_integer_palette() {
    let colors: Vec<RGBA<f32>> = [RGBAInt::<u8>::red(), RGBAInt::green(), RGBAInt::blue()]
        .into_iter()
        .map(RGBA::from)
        .collect();
    let mesh = triangle().with_colors(colors).expect("one color per vertex");

    let stored = mesh.colors().expect("colors should be set");
    assert_eq!(stored[1], RGBA::green());
    let packed: Vec<u32> = stored.iter().map(|c| c.to_int::<u8>().to_packed()).collect();
    assert_eq!(packed, vec![0xFF0000FF, 0x00FF00FF, 0x0000FFFF]);
}

/// Attribute count errors name the attribute
#[test]
fn test_uv_count_mismatch() {
    let result = triangle().with_uvs(vec![Vector2::new(0.0, 0.0); 2]);
    match result {
        Err(MeshError::AttributeCountMismatch { attribute, expected, actual }) => {
            assert_eq!(attribute, "uvs");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected AttributeCountMismatch, got {:?}", other),
    }
}

/// Out-of-range triangles are rejected without touching the mesh
#[test]
fn test_rejected_triangles_keep_state() {
    let mut mesh = triangle();
    mesh.take_changes();

    let err = mesh.set_triangles(vec![Vector3::new(0, 1, 2), Vector3::new(2, 3, 0)]);
    assert!(matches!(
        err,
        Err(MeshError::IndexOutOfRange { triangle: 1, index: 3, vertex_count: 3 })
    ));
    assert_eq!(mesh.triangle_count(), 1);
    assert!(!mesh.has_changes(), "rejected edit should not flag changes");
}

/// The byte view matches the vertex layout
#[test]
fn test_vertex_bytes_layout() {
    let mesh = triangle();
    let floats: &[f32] = bytemuck::cast_slice(mesh.vertex_bytes());
    assert_eq!(floats.len(), 9);
    assert_eq!(&floats[3..6], &[0.0, 1.0, 0.0]);
}
