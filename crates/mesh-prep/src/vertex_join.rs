use std::collections::BTreeMap;

use crate::types::MeshData;

/// Merge vertices whose every attribute is bit-identical and remap the
/// index buffer. Surviving vertices keep their first-seen order, so the
/// result is the same on every run.
///
/// Returns the number of vertices removed.
pub fn join_identical_vertices(mesh: &mut MeshData) -> usize {
    let before = mesh.positions.len();
    let mut first_seen: BTreeMap<Vec<u32>, u32> = BTreeMap::new();
    let mut remap = Vec::with_capacity(before);
    let mut kept = Vec::new();

    for old in 0..before {
        let key = vertex_key(mesh, old);
        let next = kept.len() as u32;
        let new = *first_seen.entry(key).or_insert_with(|| {
            kept.push(old);
            next
        });
        remap.push(new);
    }

    if kept.len() == before {
        return 0;
    }

    mesh.positions = gather(&mesh.positions, &kept);
    mesh.normals = gather(&mesh.normals, &kept);
    mesh.texcoords = gather(&mesh.texcoords, &kept);
    mesh.tangents = gather(&mesh.tangents, &kept);
    mesh.bitangents = gather(&mesh.bitangents, &kept);
    for index in &mut mesh.indices {
        *index = remap[*index as usize];
    }

    let removed = before - kept.len();
    log::debug!(
        "'{}': joined {removed} identical vertices ({before} -> {})",
        mesh.name,
        kept.len()
    );
    removed
}

/// Bit patterns of every attribute present on vertex `i`.
fn vertex_key(mesh: &MeshData, i: usize) -> Vec<u32> {
    let mut key: Vec<u32> = mesh.positions[i].to_array().map(f32::to_bits).to_vec();
    for attribute in [&mesh.normals, &mesh.tangents, &mesh.bitangents] {
        if let Some(v) = attribute.get(i) {
            key.extend(v.to_array().map(f32::to_bits));
        }
    }
    if let Some(uv) = mesh.texcoords.get(i) {
        key.extend(uv.to_array().map(f32::to_bits));
    }
    key
}

/// Empty attributes stay empty.
fn gather<T: Copy>(values: &[T], kept: &[usize]) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }
    kept.iter().map(|&i| values[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_duplicates_are_merged() {
        let mut mesh = MeshData::new(
            "split quad",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 3, 4, 5],
        );
        assert_eq!(join_identical_vertices(&mut mesh), 2);
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_differing_attribute_keeps_vertex() {
        let mut mesh = MeshData::new(
            "seam",
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ZERO],
            vec![0, 1, 2, 3, 1, 2],
        );
        mesh.texcoords = vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE];
        assert_eq!(join_identical_vertices(&mut mesh), 0);
        assert_eq!(mesh.positions.len(), 4);
    }

    #[test]
    fn test_no_duplicates_is_a_no_op() {
        let mut mesh = MeshData::new("tri", vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
        let before = mesh.clone();
        assert_eq!(join_identical_vertices(&mut mesh), 0);
        assert_eq!(mesh, before);
    }
}
