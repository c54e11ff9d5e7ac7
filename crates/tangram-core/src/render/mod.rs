//! Render-side resources referenced by scene nodes.
//!
//! Meshes live in a [`MeshRegistry`] owned by the host; nodes hold a
//! [`MeshId`] into it and never free anything.

pub mod mesh;
pub mod shader;

pub use mesh::{MeshId, MeshRegistry};
pub use shader::{build_node_shader, NodeShader};
