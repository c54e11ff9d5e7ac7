use glam::{Vec2, Vec3};
use tangram_hal::Mesh;

use crate::error::MeshError;

/// Indexed triangle mesh with optional per-vertex attributes.
///
/// Every non-empty attribute list has exactly one entry per position.
/// `indices` always holds whole triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Name used in log output (file stem or primitive name).
    pub name: String,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub tangents: Vec<Vec3>,
    pub bitangents: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(name: impl Into<String>, positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            positions,
            indices,
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all positions, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }

    /// Check the invariants documented on the type.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.positions.is_empty() || self.indices.is_empty() {
            return Err(MeshError::Validation(format!(
                "mesh '{}' has no vertices or faces",
                self.name
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::Validation(format!(
                "mesh '{}' has {} indices, not a multiple of 3",
                self.name,
                self.indices.len()
            )));
        }

        let count = self.positions.len();
        let attributes = [
            ("normals", self.normals.len()),
            ("texcoords", self.texcoords.len()),
            ("tangents", self.tangents.len()),
            ("bitangents", self.bitangents.len()),
        ];
        for (attribute, len) in attributes {
            if len != 0 && len != count {
                return Err(MeshError::Validation(format!(
                    "mesh '{}' has {len} {attribute} for {count} positions",
                    self.name
                )));
            }
        }

        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= count) {
            return Err(MeshError::Validation(format!(
                "mesh '{}' index {bad} out of range ({count} vertices)",
                self.name
            )));
        }
        Ok(())
    }

    /// Merge vertices whose attributes are bit-identical. Returns how many
    /// vertices were removed.
    pub fn join_identical_vertices(&mut self) -> usize {
        crate::vertex_join::join_identical_vertices(self)
    }

    /// Fill `tangents` and `bitangents` from normals and texture
    /// coordinates. Returns false (and leaves the mesh alone) when either
    /// is missing.
    pub fn generate_tangents(&mut self) -> bool {
        crate::tangents::generate_tangents(self)
    }
}

impl Mesh for MeshData {
    fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    fn has_tangents(&self) -> bool {
        !self.tangents.is_empty() && !self.bitangents.is_empty()
    }

    /// CPU-side meshes have nothing to submit; hosts with a GPU wrap
    /// `MeshData` in their own [`Mesh`] type.
    fn draw(&self) {
        log::trace!(
            "draw '{}' ({} triangles)",
            self.name,
            self.triangle_count()
        );
    }
}
