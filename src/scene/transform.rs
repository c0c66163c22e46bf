use glam::{Affine3A, Mat3, Quat, Vec3};

use crate::math;

/// Transform component
///
/// Position, rotation, scale and shear of a node, with a cached local matrix
/// and dirty checking against the last composed values.
#[derive(Debug, Clone)]
pub struct Transform {
    // === Public properties ===
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Shear factors `(xy, xz, yz)`.
    pub shear: Vec3,

    // === Matrix cache ===
    pub(crate) local_matrix: Affine3A,

    // === Dirty-check state ===
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    last_shear: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            shear: Vec3::ZERO,

            local_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            last_shear: Vec3::ZERO,
            force_update: true,
        }
    }

    // ========================================================================
    // Dirty-checked update
    // ========================================================================

    /// Recomposes the local matrix if any property changed since the last call.
    /// Returns whether it did.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.shear != self.last_shear
            || self.force_update;

        if changed {
            self.local_matrix = compose(self.position, self.rotation, self.scale, self.shear);

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.last_shear = self.shear;
            self.force_update = false;
        }

        changed
    }

    // ========================================================================
    // Getters & Helpers
    // ========================================================================

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Sets the rotation from a heading/pitch/roll triple.
    pub fn set_hpr(&mut self, hpr: Vec3) {
        self.rotation = math::hpr_to_quat(hpr);
    }

    /// Current rotation as heading/pitch/roll.
    #[must_use]
    pub fn hpr(&self) -> Vec3 {
        math::quat_to_hpr(self.rotation)
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// Forces the next [`update_local_matrix`](Self::update_local_matrix) to recompose.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// `T * R * (scale with shear)`. A point's y adds `shear.x * y` to x, its z adds
/// `shear.y * z` to x and `shear.z * z` to y, all after scaling.
fn compose(position: Vec3, rotation: Quat, scale: Vec3, shear: Vec3) -> Affine3A {
    let scale_shear = Mat3::from_cols(
        Vec3::new(scale.x, 0.0, 0.0),
        Vec3::new(shear.x * scale.y, scale.y, 0.0),
        Vec3::new(shear.y * scale.z, shear.z * scale.z, scale.z),
    );
    Affine3A::from_mat3_translation(Mat3::from_quat(rotation) * scale_shear, position)
}
