//! Pose blending: decompose two affine matrices, interpolate their parts,
//! recompose.
//!
//! Translation and scale are interpolated linearly, rotation spherically
//! along the shortest arc. Skew and perspective terms are measured during
//! decomposition but dropped; the matrices authored by the scene are pure
//! TRS, so in practice there is nothing to drop.

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Below this `|det|` the upper 3x3 is treated as singular.
const MIN_DETERMINANT: f32 = 1e-12;

/// Column dot products above this count as skew worth reporting.
const SKEW_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DecompositionError {
    /// The linear part collapses at least one axis (zero scale).
    #[error("cannot decompose a degenerate matrix (determinant {determinant})")]
    Degenerate { determinant: f32 },
    #[error("cannot decompose a matrix with NaN or infinite components")]
    NonFinite,
}

/// Scale, rotation and translation pulled out of an affine matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    pub scale: Vec3,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Decomposed {
    /// `translate(T) * rotate(R) * scale(S)`.
    pub fn recompose(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Component-wise interpolation towards `end`. `t` is not clamped.
    pub fn interpolate(&self, end: &Decomposed, t: f32) -> Decomposed {
        Decomposed {
            scale: self.scale.lerp(end.scale, t),
            // glam's slerp flips `end` when the dot product is negative,
            // which keeps the interpolation on the short arc.
            rotation: self.rotation.slerp(end.rotation, t),
            translation: self.translation.lerp(end.translation, t),
        }
    }
}

/// Split an affine matrix into scale, unit-quaternion rotation and
/// translation.
pub fn decompose(matrix: &Mat4) -> Result<Decomposed, DecompositionError> {
    if !matrix.is_finite() {
        return Err(DecompositionError::NonFinite);
    }

    let linear = Mat3::from_mat4(*matrix);
    let determinant = linear.determinant();
    if determinant.abs() < MIN_DETERMINANT {
        return Err(DecompositionError::Degenerate { determinant });
    }

    if !matrix.row(3).abs_diff_eq(Vec4::W, f32::EPSILON) {
        log::debug!("dropping perspective row {:?}", matrix.row(3));
    }
    let skew = measure_skew(&linear);
    if skew > SKEW_TOLERANCE {
        log::debug!("dropping skew (max column dot {skew})");
    }

    let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
    Ok(Decomposed {
        scale,
        rotation: rotation.normalize(),
        translation,
    })
}

/// Blend two affine poses. `progress == 0` gives `start`, `progress == 1`
/// gives `end`. Values outside `[0, 1]` extrapolate; clamping is up to the
/// caller.
pub fn blend(start: &Mat4, end: &Mat4, progress: f32) -> Result<Mat4, DecompositionError> {
    let start = decompose(start)?;
    let end = decompose(end)?;
    Ok(start.interpolate(&end, progress).recompose())
}

/// Largest absolute dot product between the normalized basis columns.
fn measure_skew(linear: &Mat3) -> f32 {
    let x = linear.x_axis.normalize_or_zero();
    let y = linear.y_axis.normalize_or_zero();
    let z = linear.z_axis.normalize_or_zero();
    x.dot(y).abs().max(x.dot(z).abs()).max(y.dot(z).abs())
}
