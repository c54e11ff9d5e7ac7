use glam::Vec3;

use crate::types::MeshData;

/// UV-space triangles with a smaller absolute determinant contribute
/// nothing to the tangent frame.
const MIN_UV_AREA: f32 = 1e-12;

/// Per-vertex tangents and bitangents from position and UV deltas.
///
/// Each triangle's tangent frame is accumulated onto its three vertices,
/// then made orthogonal to the vertex normal. Vertices that receive no
/// usable contribution get an arbitrary frame perpendicular to the normal.
pub fn generate_tangents(mesh: &mut MeshData) -> bool {
    let count = mesh.positions.len();
    if mesh.normals.len() != count || mesh.texcoords.len() != count {
        log::debug!(
            "'{}': no tangents without both normals and texcoords",
            mesh.name
        );
        return false;
    }

    let mut tangents = vec![Vec3::ZERO; count];
    let mut bitangents = vec![Vec3::ZERO; count];

    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let edge1 = mesh.positions[b] - mesh.positions[a];
        let edge2 = mesh.positions[c] - mesh.positions[a];
        let duv1 = mesh.texcoords[b] - mesh.texcoords[a];
        let duv2 = mesh.texcoords[c] - mesh.texcoords[a];

        let det = duv1.x * duv2.y - duv2.x * duv1.y;
        if det.abs() < MIN_UV_AREA {
            continue;
        }
        let r = 1.0 / det;
        let tangent = (edge1 * duv2.y - edge2 * duv1.y) * r;
        let bitangent = (edge2 * duv1.x - edge1 * duv2.x) * r;

        for i in [a, b, c] {
            tangents[i] += tangent;
            bitangents[i] += bitangent;
        }
    }

    for i in 0..count {
        let normal = mesh.normals[i].normalize_or_zero();
        // Gram-Schmidt against the normal.
        let t = (tangents[i] - normal * normal.dot(tangents[i]))
            .try_normalize()
            .unwrap_or_else(|| normal.any_orthonormal_vector());
        let mut bt = normal.cross(t);
        if bt.dot(bitangents[i]) < 0.0 {
            bt = -bt;
        }
        tangents[i] = t;
        bitangents[i] = bt;
    }

    mesh.tangents = tangents;
    mesh.bitangents = bitangents;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn uv_quad() -> MeshData {
        let mut mesh = MeshData::new(
            "uv quad",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        );
        mesh.normals = vec![Vec3::Z; 4];
        mesh.texcoords = vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        mesh
    }

    #[test]
    fn test_planar_quad_frame() {
        let mut mesh = uv_quad();
        assert!(generate_tangents(&mut mesh));
        for (t, b) in mesh.tangents.iter().zip(&mesh.bitangents) {
            assert!(t.abs_diff_eq(Vec3::X, 1e-5), "tangent {t:?}");
            assert!(b.abs_diff_eq(Vec3::Y, 1e-5), "bitangent {b:?}");
        }
    }

    #[test]
    fn test_requires_normals_and_texcoords() {
        let mut mesh = uv_quad();
        mesh.texcoords.clear();
        assert!(!generate_tangents(&mut mesh));
        assert!(mesh.tangents.is_empty());
    }

    #[test]
    fn test_degenerate_uvs_still_give_a_frame() {
        let mut mesh = uv_quad();
        mesh.texcoords = vec![Vec2::ZERO; 4];
        assert!(generate_tangents(&mut mesh));
        for (i, t) in mesh.tangents.iter().enumerate() {
            assert!((t.length() - 1.0).abs() < 1e-5);
            assert!(t.dot(mesh.normals[i]).abs() < 1e-5);
        }
    }
}
