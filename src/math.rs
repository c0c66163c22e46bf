//! Rotation conversion helpers.
//!
//! HPR triples are `(heading, pitch, roll)` in radians. Heading turns about the
//! up axis (Y), pitch about X and roll about the forward axis (Z), applied in
//! that order. The heavy lifting is done by `glam`.

use glam::{EulerRot, Quat, Vec3};

/// Rotation order used for every HPR conversion in the crate.
pub const HPR_ORDER: EulerRot = EulerRot::YXZ;

/// Converts a heading/pitch/roll triple to a quaternion.
#[inline]
#[must_use]
pub fn hpr_to_quat(hpr: Vec3) -> Quat {
    Quat::from_euler(HPR_ORDER, hpr.x, hpr.y, hpr.z)
}

/// Converts a quaternion to a heading/pitch/roll triple.
#[inline]
#[must_use]
pub fn quat_to_hpr(quat: Quat) -> Vec3 {
    let (h, p, r) = quat.to_euler(HPR_ORDER);
    Vec3::new(h, p, r)
}

/// Values that can be checked for NaN/infinite components.
pub trait Finite {
    fn is_all_finite(&self) -> bool;
}

impl Finite for f32 {
    #[inline]
    fn is_all_finite(&self) -> bool {
        self.is_finite()
    }
}

macro_rules! impl_finite_glam {
    ($($ty:ty),*) => {
        $(
            impl Finite for $ty {
                #[inline]
                fn is_all_finite(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_finite_glam!(glam::Vec2, glam::Vec3, glam::Vec4, glam::Quat);
