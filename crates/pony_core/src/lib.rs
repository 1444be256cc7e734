//! Core types for the Pony engine
//!
//! - [`Mesh`] - Triangle mesh with validated indices and per-vertex attributes
//! - [`MeshChanges`] - Flags recording which parts of a mesh need uploading
//! - [`MeshError`] - Error returned by rejected mesh edits

mod mesh;
mod mesh_error;

pub use mesh::{Mesh, MeshChanges};
pub use mesh_error::MeshError;

// Re-export commonly used types from pony_math for convenience
pub use pony_math::{Vector2, Vector3, RGBA};
