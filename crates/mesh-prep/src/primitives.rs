//! Flat tangram pieces in the z = 0 plane, positions only.
//!
//! The unit pieces are sized for the small triangle; larger pieces reuse
//! the triangle and get their size from the scene's scale.

use glam::Vec3;

use crate::types::MeshData;

/// Leg length of the unit right triangle, and side of the square.
pub const UNIT: f32 = 0.25;

/// Right triangle with the right angle at `(UNIT, 0)`.
pub fn triangle() -> MeshData {
    MeshData::new(
        "triangle",
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(UNIT, 0.0, 0.0),
            Vec3::new(UNIT, UNIT, 0.0),
        ],
        vec![0, 1, 2],
    )
}

/// Square centred on the origin.
pub fn square() -> MeshData {
    let h = UNIT / 2.0;
    MeshData::new(
        "square",
        vec![
            Vec3::new(-h, -h, 0.0),
            Vec3::new(h, -h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(-h, h, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

/// Parallelogram with a `UNIT` base and a `UNIT * sqrt(2)` slanted side.
pub fn parallelogram() -> MeshData {
    MeshData::new(
        "parallelogram",
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(UNIT, 0.0, 0.0),
            Vec3::new(0.0, UNIT, 0.0),
            Vec3::new(-UNIT, UNIT, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}
