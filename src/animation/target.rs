use glam::{Quat, Vec2, Vec3, Vec4};

use crate::animation::descriptor::Rotation;
use crate::math;

/// Snapshot of every property a lerp interval can animate.
///
/// Read from the target to fill in start values the descriptor leaves open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyValues {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub shear: Vec3,
    pub color: Vec4,
    pub color_scale: Vec4,
    pub tex_offset: Vec2,
    pub tex_rotation: f32,
    pub tex_scale: Vec2,
}

impl PropertyValues {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
        shear: Vec3::ZERO,
        color: Vec4::ONE,
        color_scale: Vec4::ONE,
        tex_offset: Vec2::ZERO,
        tex_rotation: 0.0,
        tex_scale: Vec2::ONE,
    };

    #[inline]
    #[must_use]
    pub fn hpr(&self) -> Vec3 {
        math::quat_to_hpr(self.rotation)
    }
}

impl Default for PropertyValues {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Interpolated values for one step. Only animated properties are `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LerpSample {
    pub position: Option<Vec3>,
    pub rotation: Option<Rotation>,
    pub scale: Option<Vec3>,
    pub shear: Option<Vec3>,
    pub color: Option<Vec4>,
    pub color_scale: Option<Vec4>,
    pub tex_offset: Option<Vec2>,
    pub tex_rotation: Option<f32>,
    pub tex_scale: Option<Vec2>,
}

/// Something a lerp interval can animate.
pub trait LerpTarget {
    /// Current runtime values of all animatable properties.
    fn property_values(&self) -> PropertyValues;

    /// Writes the `Some` fields of `sample`.
    ///
    /// `priority` is the descriptor's override priority. How competing writes
    /// are resolved is up to the target.
    fn apply_sample(&mut self, sample: &LerpSample, priority: i32);
}
