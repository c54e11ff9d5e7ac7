//! Arena-backed scene tree plus the camera and morph state that drive it.

use glam::Mat4;
use tangram_hal::{Camera, Mesh, ShaderFactory, ShaderProgram};

use super::camera::CameraController;
use super::morph::MorphState;
use super::node::{NodeId, SceneNode};
use super::SceneError;
use crate::render::{build_node_shader, MeshRegistry};

/// What happened during one [`SceneGraph::draw`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Nodes visited, with or without geometry.
    pub visited: usize,
    /// Mesh draw calls issued.
    pub drawn: usize,
    /// Nodes with a mesh whose shader program was never built.
    pub skipped_unbuilt: usize,
    /// Nodes whose poses could not be decomposed this frame.
    pub skipped_degenerate: usize,
}

/// Owns every node, the camera controller and the morph progress.
///
/// Nodes are addressed by [`NodeId`]. The tree shape is fixed once built:
/// nodes can be added but never removed or re-parented.
pub struct SceneGraph<P, C> {
    nodes: Vec<SceneNode<P>>,
    root: Option<NodeId>,
    camera: CameraController<C>,
    morph: MorphState,
}

impl<P, C: Camera> SceneGraph<P, C> {
    pub fn new(camera: CameraController<C>, morph: MorphState) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            camera,
            morph,
        }
    }

    pub fn set_root(&mut self, node: SceneNode<P>) -> Result<NodeId, SceneError> {
        if let Some(root) = self.root {
            return Err(SceneError::RootExists(root));
        }
        let id = self.push(node, None);
        self.root = Some(id);
        Ok(id)
    }

    /// Append `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode<P>) -> Result<NodeId, SceneError> {
        if parent.0 >= self.nodes.len() {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = self.push(node, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, mut node: SceneNode<P>, parent: Option<NodeId>) -> NodeId {
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode<P>> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode<P>> {
        self.nodes.get_mut(id.0)
    }

    /// The `index`-th child of `parent`, in render order.
    pub fn child(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.node(parent)?.children.get(index).copied()
    }

    pub fn child_mut(&mut self, parent: NodeId, index: usize) -> Option<&mut SceneNode<P>> {
        let id = self.child(parent, index)?;
        self.node_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in depth-first pre-order, starting at the root.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        order
    }

    pub fn camera(&self) -> &CameraController<C> {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraController<C> {
        &mut self.camera
    }

    pub fn morph(&self) -> &MorphState {
        &self.morph
    }

    pub fn morph_mut(&mut self) -> &mut MorphState {
        &mut self.morph
    }
}

impl<P: ShaderProgram, C: Camera> SceneGraph<P, C> {
    /// Build a shader program for every node that has a mesh, in pre-order.
    ///
    /// A program that fails to compile or link is logged and left unbuilt;
    /// that node is then skipped at draw time. Returns the number of
    /// programs built.
    pub fn build_shaders<F, M>(
        &mut self,
        factory: &mut F,
        meshes: &MeshRegistry<M>,
    ) -> Result<usize, SceneError>
    where
        F: ShaderFactory<Program = P>,
        M: Mesh,
    {
        let root = self.root.ok_or(SceneError::NoRoot)?;
        let mut built = 0;
        self.build_node(root, factory, meshes, &mut built)?;
        log::info!("built {built} shader programs for {} nodes", self.nodes.len());
        Ok(built)
    }

    fn build_node<F, M>(
        &mut self,
        id: NodeId,
        factory: &mut F,
        meshes: &MeshRegistry<M>,
        built: &mut usize,
    ) -> Result<(), SceneError>
    where
        F: ShaderFactory<Program = P>,
        M: Mesh,
    {
        let node = &self.nodes[id.0];
        if let Some(mesh_id) = node.mesh() {
            let mesh = meshes.get(mesh_id).ok_or(SceneError::UnknownMesh(mesh_id))?;
            match build_node_shader(factory, mesh, node.color().is_some()) {
                Ok(shader) => {
                    self.nodes[id.0].shader = Some(shader);
                    *built += 1;
                }
                Err(err) => log::warn!("shader for '{}' failed to build: {err}", node.name()),
            }
        }

        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.build_node(child, factory, meshes, built)?;
        }
        Ok(())
    }

    /// Draw the whole tree at `progress` between the crab and cube poses.
    ///
    /// Each node blends its own two poses and composes the result with the
    /// blended world matrix its parent produced in this same call. After a
    /// node's subtree is done, its pose accumulators are reset, so every
    /// frame must author both channels again before drawing.
    ///
    /// An empty graph draws nothing. If the draw stops early on an unknown
    /// mesh, every node is still reset before the error is returned.
    pub fn draw<M: Mesh>(
        &mut self,
        progress: f32,
        meshes: &MeshRegistry<M>,
    ) -> Result<FrameStats, SceneError> {
        let mut stats = FrameStats::default();
        if let Some(root) = self.root {
            if let Err(err) = self.draw_node(root, &Mat4::IDENTITY, progress, meshes, &mut stats) {
                self.nodes.iter_mut().for_each(SceneNode::reset_pose);
                return Err(err);
            }
        }
        Ok(stats)
    }

    fn draw_node<M: Mesh>(
        &mut self,
        id: NodeId,
        parent_world: &Mat4,
        progress: f32,
        meshes: &MeshRegistry<M>,
        stats: &mut FrameStats,
    ) -> Result<(), SceneError> {
        stats.visited += 1;
        let node = &mut self.nodes[id.0];

        let world = match node.blended_local(progress) {
            Ok(local) => Some(*parent_world * local),
            Err(err) => {
                log::warn!("skipping '{}' this frame: {err}", node.name);
                stats.skipped_degenerate += 1;
                None
            }
        };

        if let (Some(world), Some(mesh_id)) = (world, node.mesh()) {
            let color = node.color();
            match node.shader.as_mut() {
                Some(shader) => {
                    let mesh = meshes.get(mesh_id).ok_or(SceneError::UnknownMesh(mesh_id))?;
                    log::trace!("drawing '{}' with {mesh_id}", node.name);
                    shader.render(&world, color, || mesh.draw());
                    stats.drawn += 1;
                }
                None => {
                    log::trace!("'{}' has no shader program, not drawn", node.name);
                    stats.skipped_unbuilt += 1;
                }
            }
        }

        // A node that failed to blend passes its parent's matrix through.
        let world = world.unwrap_or(*parent_world);
        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.draw_node(child, &world, progress, meshes, stats)?;
        }

        self.nodes[id.0].reset_pose();
        Ok(())
    }
}
