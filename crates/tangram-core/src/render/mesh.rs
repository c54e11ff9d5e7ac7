//! Mesh registry and handles.

use core::fmt;

use tangram_hal::Mesh;

/// Index of a mesh inside a [`MeshRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

impl MeshId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}

/// Owns every mesh the scene may reference. Meshes are never removed, so a
/// `MeshId` handed out by one registry stays valid for its lifetime.
#[derive(Debug)]
pub struct MeshRegistry<M> {
    meshes: Vec<M>,
}

impl<M> Default for MeshRegistry<M> {
    fn default() -> Self {
        Self { meshes: Vec::new() }
    }
}

impl<M: Mesh> MeshRegistry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mesh: M) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn get(&self, id: MeshId) -> Option<&M> {
        self.meshes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
