//! A single scene node with two independently authored pose channels.

use core::fmt;

use glam::{Mat4, Vec3};

use crate::math::{blend, DecompositionError, Transform};
use crate::render::{MeshId, NodeShader};

/// Index of a node inside its [`SceneGraph`](super::SceneGraph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// The two target configurations a node's transform is authored into.
/// Morph progress 0 is the crab, 1 is the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseChannel {
    Crab,
    Cube,
}

impl PoseChannel {
    pub const ALL: [PoseChannel; 2] = [PoseChannel::Crab, PoseChannel::Cube];
}

/// One node of the scene tree.
///
/// Pose setters are relative: `translate`, `rotate` and `scale` compose
/// into this frame's accumulators. The graph resets every accumulator
/// after the node and its subtree have been drawn.
pub struct SceneNode<P> {
    pub(crate) name: String,
    mesh: Option<MeshId>,
    color: Option<Vec3>,
    crab: Transform,
    cube: Transform,
    /// Applied to both channels.
    shared_scale: Vec3,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) shader: Option<NodeShader<P>>,
}

impl<P> SceneNode<P> {
    /// A node with no geometry. Useful as a grouping parent.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            color: None,
            crab: Transform::IDENTITY,
            cube: Transform::IDENTITY,
            shared_scale: Vec3::ONE,
            parent: None,
            children: Vec::new(),
            shader: None,
        }
    }

    pub fn with_mesh(name: impl Into<String>, mesh: MeshId) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name)
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = Some(color);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }

    pub fn color(&self) -> Option<Vec3> {
        self.color
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = Some(color);
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in render order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn shader(&self) -> Option<&NodeShader<P>> {
        self.shader.as_ref()
    }

    pub fn has_shader(&self) -> bool {
        self.shader.is_some()
    }

    pub fn pose(&self, channel: PoseChannel) -> &Transform {
        match channel {
            PoseChannel::Crab => &self.crab,
            PoseChannel::Cube => &self.cube,
        }
    }

    pub fn pose_mut(&mut self, channel: PoseChannel) -> &mut Transform {
        match channel {
            PoseChannel::Crab => &mut self.crab,
            PoseChannel::Cube => &mut self.cube,
        }
    }

    pub fn shared_scale(&self) -> Vec3 {
        self.shared_scale
    }

    /// Compose a translation into `channel`'s accumulator.
    ///
    /// Translations always sit outside the rotation (`T * R * S`), so a
    /// `translate` before or after a `rotate` gives the same pose. Call order
    /// only matters between calls to the same slot, and when whole
    /// transforms are multiplied (`Transform * Transform`).
    pub fn translate(&mut self, channel: PoseChannel, offset: Vec3) -> &mut Self {
        self.pose_mut(channel).translate(offset);
        self
    }

    /// Compose a rotation (radians) into `channel`'s accumulator.
    ///
    /// Successive rotations post-multiply, so their order matters. To orbit
    /// a piece about a point, multiply transforms instead; see
    /// [`translate`](Self::translate).
    pub fn rotate(&mut self, channel: PoseChannel, angle: f32, axis: Vec3) -> &mut Self {
        self.pose_mut(channel).rotate(angle, axis);
        self
    }

    /// Compose a scale into the accumulator shared by both channels.
    pub fn scale(&mut self, factors: Vec3) -> &mut Self {
        self.shared_scale *= factors;
        self
    }

    /// Local matrix for one channel: `T * R * S_channel * S_shared`.
    pub fn pose_matrix(&self, channel: PoseChannel) -> Mat4 {
        self.pose(channel).matrix() * Mat4::from_scale(self.shared_scale)
    }

    /// This node's local matrix at `progress` between crab and cube.
    pub fn blended_local(&self, progress: f32) -> Result<Mat4, DecompositionError> {
        blend(
            &self.pose_matrix(PoseChannel::Crab),
            &self.pose_matrix(PoseChannel::Cube),
            progress,
        )
    }

    /// True when every accumulator reads identity.
    pub fn is_pose_reset(&self) -> bool {
        self.crab.is_identity() && self.cube.is_identity() && self.shared_scale == Vec3::ONE
    }

    /// Clear both channels and the shared scale.
    pub fn reset_pose(&mut self) {
        self.crab.reset();
        self.cube.reset();
        self.shared_scale = Vec3::ONE;
    }
}

impl<P> fmt::Debug for SceneNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNode")
            .field("name", &self.name)
            .field("mesh", &self.mesh)
            .field("color", &self.color)
            .field("crab", &self.crab)
            .field("cube", &self.cube)
            .field("shared_scale", &self.shared_scale)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("has_shader", &self.shader.is_some())
            .finish()
    }
}
