//! The seven-piece tangram: scene layout and the two authored poses.
//!
//! Piece geometry follows the unit pieces of the 2D demo: a right triangle
//! with legs of 0.25, a square of side 0.25 and a parallelogram with sides
//! 0.25 and 0.25 * sqrt(2). Sizes that differ between pieces come from the
//! shared scale, so both poses only carry translation and rotation.

use core::f32::consts::SQRT_2;

use glam::Vec3;
use tangram_hal::Camera;

use super::graph::SceneGraph;
use super::node::{NodeId, PoseChannel, SceneNode};
use super::SceneError;
use crate::render::MeshId;

/// Half the side of the assembled square.
const HALF: f32 = 0.353_553_4;
/// A quarter of the side of the assembled square.
const QUARTER: f32 = 0.176_776_7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceShape {
    Triangle,
    Square,
    Parallelogram,
}

impl PieceShape {
    pub const ALL: [PieceShape; 3] = [
        PieceShape::Triangle,
        PieceShape::Square,
        PieceShape::Parallelogram,
    ];
}

/// Tangram pieces in child order under the tangram root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    BigTriangle1,
    BigTriangle2,
    MediumTriangle,
    SmallTriangle1,
    SmallTriangle2,
    Parallelogram,
    Square,
}

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::BigTriangle1,
        Piece::BigTriangle2,
        Piece::MediumTriangle,
        Piece::SmallTriangle1,
        Piece::SmallTriangle2,
        Piece::Parallelogram,
        Piece::Square,
    ];

    /// Index of this piece among the root's children.
    pub fn child_index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::BigTriangle1 => "big triangle 1",
            Piece::BigTriangle2 => "big triangle 2",
            Piece::MediumTriangle => "medium triangle",
            Piece::SmallTriangle1 => "small triangle 1",
            Piece::SmallTriangle2 => "small triangle 2",
            Piece::Parallelogram => "parallelogram",
            Piece::Square => "square",
        }
    }

    pub fn shape(self) -> PieceShape {
        match self {
            Piece::Parallelogram => PieceShape::Parallelogram,
            Piece::Square => PieceShape::Square,
            _ => PieceShape::Triangle,
        }
    }

    pub fn color(self) -> Vec3 {
        match self {
            Piece::BigTriangle1 => Vec3::new(0.804, 0.055, 0.4),
            Piece::BigTriangle2 => Vec3::new(0.059, 0.510, 0.949),
            Piece::MediumTriangle => Vec3::new(0.43, 0.23, 0.75),
            Piece::SmallTriangle1 => Vec3::new(0.933, 0.380, 0.2),
            Piece::SmallTriangle2 => Vec3::new(0.0, 0.62, 0.65),
            Piece::Parallelogram => Vec3::new(0.992, 0.549, 0.0),
            Piece::Square => Vec3::new(0.0, 0.8, 0.0),
        }
    }

    /// Uniform size relative to the unit piece, the same in both poses.
    pub fn size(self) -> f32 {
        match self {
            Piece::BigTriangle1 | Piece::BigTriangle2 => 2.0,
            Piece::MediumTriangle => SQRT_2,
            _ => 1.0,
        }
    }
}

/// One authored edit: compose rotation, translation and scale into a
/// piece's channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseEdit {
    pub piece: Piece,
    pub channel: PoseChannel,
    pub translation: Vec3,
    pub rotation_degrees: f32,
    pub axis: Vec3,
    pub scale: Vec3,
}

const fn planar(piece: Piece, channel: PoseChannel, x: f32, y: f32, degrees: f32) -> PoseEdit {
    PoseEdit {
        piece,
        channel,
        translation: Vec3::new(x, y, 0.0),
        rotation_degrees: degrees,
        axis: Vec3::Z,
        scale: Vec3::ONE,
    }
}

/// The crab.
pub const CRAB_POSE: [PoseEdit; 7] = [
    planar(Piece::BigTriangle1, PoseChannel::Crab, 0.125, -0.125, 180.0),
    planar(Piece::BigTriangle2, PoseChannel::Crab, -0.125, -0.375, 0.0),
    planar(Piece::MediumTriangle, PoseChannel::Crab, 0.375, -0.125, 45.0),
    planar(Piece::SmallTriangle1, PoseChannel::Crab, -0.625, 0.125, 0.0),
    planar(Piece::SmallTriangle2, PoseChannel::Crab, 0.375, -0.625, 90.0),
    planar(Piece::Parallelogram, PoseChannel::Crab, -0.375, -0.125, 0.0),
    planar(Piece::Square, PoseChannel::Crab, 0.0, 0.0, 0.0),
];

/// The classic square, centred on the origin.
pub const CUBE_POSE: [PoseEdit; 7] = [
    planar(Piece::BigTriangle1, PoseChannel::Cube, HALF, -HALF, 135.0),
    planar(Piece::BigTriangle2, PoseChannel::Cube, HALF, HALF, 225.0),
    planar(Piece::MediumTriangle, PoseChannel::Cube, 0.0, HALF, 180.0),
    planar(Piece::SmallTriangle1, PoseChannel::Cube, -HALF, -HALF, 45.0),
    planar(Piece::SmallTriangle2, PoseChannel::Cube, -QUARTER, QUARTER, 315.0),
    planar(Piece::Parallelogram, PoseChannel::Cube, QUARTER, QUARTER, 45.0),
    planar(Piece::Square, PoseChannel::Cube, -QUARTER, 0.0, 45.0),
];

/// Registry handles for the three piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TangramMeshes {
    pub triangle: MeshId,
    pub square: MeshId,
    pub parallelogram: MeshId,
}

impl TangramMeshes {
    pub fn for_shape(&self, shape: PieceShape) -> MeshId {
        match shape {
            PieceShape::Triangle => self.triangle,
            PieceShape::Square => self.square,
            PieceShape::Parallelogram => self.parallelogram,
        }
    }
}

/// Add a mesh-less tangram root with one colored child per piece, in
/// [`Piece::ALL`] order. Returns the root.
pub fn build_tangram<P, C: Camera>(
    graph: &mut SceneGraph<P, C>,
    meshes: &TangramMeshes,
) -> Result<NodeId, SceneError> {
    let root = graph.set_root(SceneNode::group("tangram"))?;
    for piece in Piece::ALL {
        let node = SceneNode::with_mesh(piece.name(), meshes.for_shape(piece.shape()))
            .with_color(piece.color());
        graph.add_child(root, node)?;
    }
    Ok(root)
}

/// Compose every edit into the addressed child of `root`.
pub fn apply_pose_edits<P, C: Camera>(
    graph: &mut SceneGraph<P, C>,
    root: NodeId,
    edits: &[PoseEdit],
) -> Result<(), SceneError> {
    for edit in edits {
        let index = edit.piece.child_index();
        let node = graph
            .child_mut(root, index)
            .ok_or(SceneError::MissingChild {
                parent: root,
                index,
            })?;
        node.rotate(edit.channel, edit.rotation_degrees.to_radians(), edit.axis)
            .translate(edit.channel, edit.translation);
        node.pose_mut(edit.channel).scale(edit.scale);
    }
    Ok(())
}

/// Author one frame: piece sizes into the shared scale, then both poses.
/// Must run before every draw, since drawing resets the accumulators.
pub fn author_frame<P, C: Camera>(
    graph: &mut SceneGraph<P, C>,
    root: NodeId,
) -> Result<(), SceneError> {
    for piece in Piece::ALL {
        let index = piece.child_index();
        graph
            .child_mut(root, index)
            .ok_or(SceneError::MissingChild {
                parent: root,
                index,
            })?
            .scale(Vec3::splat(piece.size()));
    }
    apply_pose_edits(graph, root, &CRAB_POSE)?;
    apply_pose_edits(graph, root, &CUBE_POSE)
}
