/// Error types for mesh loading.
pub mod error;

/// Mesh data and its `Mesh` capability flags.
pub mod types;

/// OBJ to mesh data conversion.
pub mod obj_converter;

/// Identical-vertex joining.
pub mod vertex_join;

/// Tangent and bitangent generation.
pub mod tangents;

/// Built-in flat tangram pieces.
pub mod primitives;

/// The three tangram model files, loaded together.
pub mod library;

pub use error::MeshError;
pub use library::MeshLibrary;
pub use obj_converter::load_obj;
pub use types::MeshData;
