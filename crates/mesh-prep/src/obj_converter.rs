use std::path::Path;

use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::types::MeshData;

/// Load an OBJ file and merge all objects/groups into one `MeshData`.
///
/// Faces are triangulated and attributes share a single index. An
/// attribute missing from any object is dropped for the whole mesh.
pub fn load_obj(path: &Path) -> Result<MeshData, MeshError> {
    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };

    let (models, _materials) =
        tobj::load_obj(path, &load_options).map_err(|e| MeshError::ObjParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if models.is_empty() {
        return Err(MeshError::Validation(format!(
            "OBJ file has no geometry: {}",
            path.display()
        )));
    }
    if models.len() > 1 {
        log::warn!(
            "{} contains {} objects/groups, all geometry will be merged",
            path.display(),
            models.len()
        );
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mesh = merge_models(name, &models);
    mesh.validate()?;

    log::info!(
        "loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Merge all tobj models into a single vertex list and index list.
fn merge_models(name: String, models: &[tobj::Model]) -> MeshData {
    let populated: Vec<&tobj::Model> = models
        .iter()
        .filter(|model| !model.mesh.positions.is_empty())
        .collect();
    let keep_normals = populated.iter().all(|m| !m.mesh.normals.is_empty());
    let keep_texcoords = populated.iter().all(|m| !m.mesh.texcoords.is_empty());

    for model in &populated {
        if !keep_normals && !model.mesh.normals.is_empty() {
            log::warn!("dropping normals of '{}': not every object has them", model.name);
        }
        if !keep_texcoords && !model.mesh.texcoords.is_empty() {
            log::warn!(
                "dropping texture coordinates of '{}': not every object has them",
                model.name
            );
        }
    }

    let mut mesh = MeshData {
        name,
        ..MeshData::default()
    };
    let mut vertex_offset: u32 = 0;

    for model in populated {
        let source = &model.mesh;
        let vert_count = source.positions.len() / 3;

        mesh.positions
            .extend(source.positions.chunks_exact(3).map(Vec3::from_slice));
        if keep_normals {
            mesh.normals
                .extend(source.normals.chunks_exact(3).map(Vec3::from_slice));
        }
        if keep_texcoords {
            mesh.texcoords
                .extend(source.texcoords.chunks_exact(2).map(Vec2::from_slice));
        }
        mesh.indices
            .extend(source.indices.iter().map(|&idx| idx + vertex_offset));

        vertex_offset += vert_count as u32;
    }
    mesh
}
