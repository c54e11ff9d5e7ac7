//! Scene graph, camera control and the tangram morph state.

pub mod camera;
pub mod graph;
pub mod morph;
pub mod node;
pub mod tangram;

pub use camera::{CameraConfig, CameraController, ProjectionMode, ViewPreset, ZoomClamp};
pub use graph::{FrameStats, SceneGraph};
pub use morph::{MorphConfig, MorphState};
pub use node::{NodeId, PoseChannel, SceneNode};

use crate::render::MeshId;

/// Errors surfaced by scene construction and traversal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A node refers to a mesh the registry does not hold.
    #[error("{0} is not in the mesh registry")]
    UnknownMesh(MeshId),
    #[error("{0} does not exist in this scene graph")]
    UnknownNode(NodeId),
    #[error("{parent} has no child at index {index}")]
    MissingChild { parent: NodeId, index: usize },
    #[error("scene graph has no root node")]
    NoRoot,
    #[error("scene graph already has a root node ({0})")]
    RootExists(NodeId),
}
