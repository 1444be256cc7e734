//! Triangle mesh with validated indices and per-vertex attributes
//!
//! A mesh owns its vertex positions, the triangles indexing into them and optional per-vertex
//! colors and texture coordinates. Every edit is validated before it is applied, so a rejected
//! edit leaves the mesh untouched.

use crate::MeshError;
use bitflags::bitflags;
use pony_math::{Vector2, Vector3, RGBA};

bitflags! {
    /// Flags indicating which parts of a mesh have changed since the last upload
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MeshChanges: u8 {
        /// No changes
        const NONE = 0;
        /// Vertex positions changed
        const VERTICES = 1 << 0;
        /// Triangle indices changed
        const TRIANGLES = 1 << 1;
        /// Vertex colors changed or were removed
        const COLORS = 1 << 2;
        /// Texture coordinates changed or were removed
        const UVS = 1 << 3;
        /// Everything needs uploading
        const ALL = Self::VERTICES.bits()
            | Self::TRIANGLES.bits()
            | Self::COLORS.bits()
            | Self::UVS.bits();
    }
}

/// Triangle mesh
///
/// Invariants:
/// - every triangle index is below the vertex count
/// - colors and uvs, when present, hold exactly one entry per vertex
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Vec<Vector3<f32>>,
    triangles: Vec<Vector3<u32>>,
    colors: Option<Vec<RGBA<f32>>>,
    uvs: Option<Vec<Vector2<f32>>>,
    changes: MeshChanges,
}

impl Mesh {
    /// Create a mesh from vertex positions and triangles
    pub fn new(vertices: Vec<Vector3<f32>>, triangles: Vec<Vector3<u32>>) -> Result<Self, MeshError> {
        check_triangles(&triangles, vertices.len())?;
        log::debug!(
            "Created mesh with {} vertices and {} triangles",
            vertices.len(),
            triangles.len()
        );
        Ok(Self {
            vertices,
            triangles,
            colors: None,
            uvs: None,
            changes: MeshChanges::ALL, // New meshes need a full upload
        })
    }

    /// Add per-vertex colors
    pub fn with_colors(mut self, colors: Vec<RGBA<f32>>) -> Result<Self, MeshError> {
        self.set_colors(colors)?;
        Ok(self)
    }

    /// Add per-vertex texture coordinates
    pub fn with_uvs(mut self, uvs: Vec<Vector2<f32>>) -> Result<Self, MeshError> {
        self.set_uvs(uvs)?;
        Ok(self)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[Vector3<u32>] {
        &self.triangles
    }

    #[inline]
    pub fn colors(&self) -> Option<&[RGBA<f32>]> {
        self.colors.as_deref()
    }

    #[inline]
    pub fn uvs(&self) -> Option<&[Vector2<f32>]> {
        self.uvs.as_deref()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Replace the vertex positions
    ///
    /// Fails if a triangle or an attribute no longer fits the new vertex count. Clear the
    /// attributes first to change the number of vertices of a colored mesh.
    pub fn set_vertices(&mut self, vertices: Vec<Vector3<f32>>) -> Result<(), MeshError> {
        let count = vertices.len();
        let checked = check_triangles(&self.triangles, count)
            .and_then(|_| check_attribute("colors", self.colors.as_ref().map(Vec::len), count))
            .and_then(|_| check_attribute("uvs", self.uvs.as_ref().map(Vec::len), count));
        if let Err(err) = checked {
            log::warn!("Rejected vertex update: {}", err);
            return Err(err);
        }

        self.vertices = vertices;
        self.mark_changed(MeshChanges::VERTICES);
        log::debug!("Mesh vertices replaced ({} vertices)", count);
        Ok(())
    }

    /// Replace the triangles
    pub fn set_triangles(&mut self, triangles: Vec<Vector3<u32>>) -> Result<(), MeshError> {
        if let Err(err) = check_triangles(&triangles, self.vertices.len()) {
            log::warn!("Rejected triangle update: {}", err);
            return Err(err);
        }

        self.triangles = triangles;
        self.mark_changed(MeshChanges::TRIANGLES);
        log::debug!("Mesh triangles replaced ({} triangles)", self.triangles.len());
        Ok(())
    }

    /// Replace the vertex colors, one per vertex
    pub fn set_colors(&mut self, colors: Vec<RGBA<f32>>) -> Result<(), MeshError> {
        if let Err(err) = check_attribute("colors", Some(colors.len()), self.vertices.len()) {
            log::warn!("Rejected color update: {}", err);
            return Err(err);
        }

        self.colors = Some(colors);
        self.mark_changed(MeshChanges::COLORS);
        Ok(())
    }

    /// Replace the texture coordinates, one per vertex
    pub fn set_uvs(&mut self, uvs: Vec<Vector2<f32>>) -> Result<(), MeshError> {
        if let Err(err) = check_attribute("uvs", Some(uvs.len()), self.vertices.len()) {
            log::warn!("Rejected uv update: {}", err);
            return Err(err);
        }

        self.uvs = Some(uvs);
        self.mark_changed(MeshChanges::UVS);
        Ok(())
    }

    /// Remove the vertex colors
    pub fn clear_colors(&mut self) {
        if self.colors.take().is_some() {
            self.mark_changed(MeshChanges::COLORS);
        }
    }

    /// Remove the texture coordinates
    pub fn clear_uvs(&mut self) {
        if self.uvs.take().is_some() {
            self.mark_changed(MeshChanges::UVS);
        }
    }

    /// Apply `f` to every vertex position
    ///
    /// The vertex count cannot change, so this never fails.
    pub fn map_vertices(&mut self, mut f: impl FnMut(Vector3<f32>) -> Vector3<f32>) {
        for vertex in &mut self.vertices {
            *vertex = f(*vertex);
        }
        self.mark_changed(MeshChanges::VERTICES);
    }

    /// Set every vertex color to `color`, adding colors if the mesh has none
    pub fn fill_colors(&mut self, color: RGBA<f32>) {
        self.colors = Some(vec![color; self.vertices.len()]);
        self.mark_changed(MeshChanges::COLORS);
    }

    /// Vertex positions as raw bytes for upload
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle indices as raw bytes for upload
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    // --- Change tracking methods ---

    /// Check if anything changed since the last [`Mesh::take_changes`]
    #[inline]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Get the pending changes
    #[inline]
    pub fn changes(&self) -> MeshChanges {
        self.changes
    }

    /// Mark parts of the mesh as changed
    #[inline]
    pub fn mark_changed(&mut self, changes: MeshChanges) {
        self.changes |= changes;
    }

    /// Return the pending changes and clear them
    #[inline]
    pub fn take_changes(&mut self) -> MeshChanges {
        std::mem::replace(&mut self.changes, MeshChanges::NONE)
    }
}

fn check_triangles(triangles: &[Vector3<u32>], vertex_count: usize) -> Result<(), MeshError> {
    for (triangle, indices) in triangles.iter().enumerate() {
        for index in indices.to_array() {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

fn check_attribute(
    attribute: &'static str,
    actual: Option<usize>,
    expected: usize,
) -> Result<(), MeshError> {
    match actual {
        Some(actual) if actual != expected => Err(MeshError::AttributeCountMismatch {
            attribute,
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_vertices() -> Vec<Vector3<f32>> {
        vec![
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(-1.0, 1.0, 0.0),
        ]
    }

    fn quad_triangles() -> Vec<Vector3<u32>> {
        vec![Vector3::new(0, 1, 2), Vector3::new(0, 2, 3)]
    }

    fn make_quad() -> Mesh {
        Mesh::new(quad_vertices(), quad_triangles()).unwrap()
    }

    #[test]
    fn test_mesh_new() {
        let mesh = make_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.colors().is_none());
        assert!(mesh.uvs().is_none());
        assert_eq!(mesh.changes(), MeshChanges::ALL);
    }

    #[test]
    fn test_mesh_default_is_empty() {
        let mesh = Mesh::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert!(!mesh.has_changes());
    }

    #[test]
    fn test_new_rejects_out_of_range_index() {
        let err = Mesh::new(quad_vertices(), vec![Vector3::new(0, 1, 4)]).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                triangle: 0,
                index: 4,
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_take_changes_clears() {
        let mut mesh = make_quad();
        assert_eq!(mesh.take_changes(), MeshChanges::ALL);
        assert!(!mesh.has_changes());
        assert_eq!(mesh.take_changes(), MeshChanges::NONE);
    }

    #[test]
    fn test_set_colors() {
        let mut mesh = make_quad();
        mesh.take_changes();

        mesh.set_colors(vec![RGBA::red(); 4]).unwrap();
        assert_eq!(mesh.colors().map(|c| c.len()), Some(4));
        assert_eq!(mesh.take_changes(), MeshChanges::COLORS);

        mesh.clear_colors();
        assert!(mesh.colors().is_none());
        assert_eq!(mesh.take_changes(), MeshChanges::COLORS);

        mesh.clear_colors();
        assert!(!mesh.has_changes());
    }

    #[test]
    fn test_rejected_colors_leave_mesh_unchanged() {
        let mut mesh = make_quad().with_colors(vec![RGBA::white(); 4]).unwrap();
        mesh.take_changes();

        let err = mesh.set_colors(vec![RGBA::black(); 3]).unwrap_err();
        assert_eq!(
            err,
            MeshError::AttributeCountMismatch {
                attribute: "colors",
                expected: 4,
                actual: 3,
            }
        );
        assert_eq!(mesh.colors().unwrap()[0], RGBA::white());
        assert!(!mesh.has_changes());
    }

    #[test]
    fn test_set_vertices_checks_triangles() {
        let mut mesh = make_quad();
        let err = mesh.set_vertices(quad_vertices()[..3].to_vec()).unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { index: 3, .. }));
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_set_vertices_checks_attributes() {
        let mut mesh = make_quad().with_uvs(vec![Vector2::zero(); 4]).unwrap();
        mesh.set_triangles(vec![Vector3::new(0, 1, 2)]).unwrap();

        let mut vertices = quad_vertices();
        vertices.pop();
        let err = mesh.set_vertices(vertices.clone()).unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeCountMismatch { attribute: "uvs", .. }
        ));

        mesh.clear_uvs();
        mesh.set_vertices(vertices).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_set_triangles() {
        let mut mesh = make_quad();
        mesh.take_changes();

        assert!(mesh.set_triangles(vec![Vector3::new(5, 0, 1)]).is_err());
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.has_changes());

        mesh.set_triangles(vec![Vector3::new(3, 2, 1)]).unwrap();
        assert_eq!(mesh.triangles(), &[Vector3::new(3, 2, 1)]);
        assert_eq!(mesh.take_changes(), MeshChanges::TRIANGLES);
    }

    #[test]
    fn test_map_vertices() {
        let mut mesh = make_quad();
        mesh.take_changes();
        mesh.map_vertices(|v| v * 2.0 + Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.vertices()[2], Vector3::new(2.0, 2.0, 1.0));
        assert_eq!(mesh.take_changes(), MeshChanges::VERTICES);
    }

    #[test]
    fn test_fill_colors() {
        let mut mesh = make_quad();
        mesh.fill_colors(RGBA::gray());
        assert!(mesh.colors().unwrap().iter().all(|&c| c == RGBA::gray()));
    }

    #[test]
    fn test_byte_views() {
        let mesh = make_quad();
        assert_eq!(mesh.vertex_bytes().len(), 4 * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), 2 * 3 * 4);
        let first: &[f32] = bytemuck::cast_slice(&mesh.vertex_bytes()[..12]);
        assert_eq!(first, &[-1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_mesh_changes_all() {
        let all = MeshChanges::ALL;
        assert!(all.contains(MeshChanges::VERTICES));
        assert!(all.contains(MeshChanges::TRIANGLES));
        assert!(all.contains(MeshChanges::COLORS));
        assert!(all.contains(MeshChanges::UVS));
        assert!(MeshChanges::default().is_empty());
    }
}
