use std::path::PathBuf;

/// Errors that can occur while loading or preparing a mesh.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// I/O error reading files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse an OBJ mesh file.
    #[error("OBJ parse error for {path}: {message}")]
    ObjParse { path: PathBuf, message: String },

    /// A model file the library expects is not there.
    #[error("missing model file {0}")]
    MissingModel(PathBuf),

    /// Mesh data is inconsistent (empty, mismatched attribute counts,
    /// out-of-range indices).
    #[error("Validation error: {0}")]
    Validation(String),
}
