//! Translation / rotation / scale accumulator.

use core::ops::Mul;

use glam::{Mat4, Quat, Vec3};

/// An affine transform kept as three separate slots.
///
/// The matrix form is always `T * R * S`. The `translate`, `rotate` and
/// `scale` methods compose into their own slot instead of assigning it, so
/// two `rotate` calls in one frame stack up, and the order of those calls
/// matters. Calls to different slots commute: a `translate` issued after a
/// `rotate` still ends up outermost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// `T_new = T_old * translate(offset)`.
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        self.translation += offset;
        self
    }

    /// `R_new = R_old * rotate(angle, axis)`, angle in radians.
    ///
    /// A zero-length axis leaves the rotation untouched.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) -> &mut Self {
        if let Some(axis) = axis.try_normalize() {
            self.rotation = self.rotation * Quat::from_axis_angle(axis, angle);
        } else {
            log::warn!("ignoring rotation about a zero-length axis");
        }
        self
    }

    /// `S_new = S_old * scale(factors)`.
    pub fn scale(&mut self, factors: Vec3) -> &mut Self {
        self.scale *= factors;
        self
    }

    /// Back to identity. Called once per frame after the node is drawn.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// `T * R * S`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (self.scale * point) + self.translation
    }

    /// `self` applied after `rhs`, as in `self.matrix() * rhs.matrix()`.
    ///
    /// Exact when `self` has uniform scale. With non-uniform scale the
    /// true product may contain shear, which a TRS triple cannot hold; the
    /// scales are then multiplied component-wise.
    pub fn mul_transform(&self, rhs: &Transform) -> Transform {
        Transform {
            translation: self.transform_point(rhs.translation),
            rotation: self.rotation * rhs.rotation,
            scale: self.scale * rhs.scale,
        }
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.mul_transform(&rhs)
    }
}

impl From<Transform> for Mat4 {
    fn from(transform: Transform) -> Self {
        transform.matrix()
    }
}
