use glam::{Quat, Vec2, Vec3, Vec4};

use crate::animation::flags::LerpFlags;
use crate::math::{self, Finite};

/// Optional start and end value of one animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LerpRange<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> Default for LerpRange<T> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
        }
    }
}

/// A rotation slot value, stored in whichever representation was set last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Heading, pitch, roll in radians.
    Hpr(Vec3),
    Quat(Quat),
}

impl Rotation {
    #[must_use]
    pub fn to_hpr(self) -> Vec3 {
        match self {
            Self::Hpr(hpr) => hpr,
            Self::Quat(quat) => math::quat_to_hpr(quat),
        }
    }

    #[must_use]
    pub fn to_quat(self) -> Quat {
        match self {
            Self::Hpr(hpr) => math::hpr_to_quat(hpr),
            Self::Quat(quat) => quat,
        }
    }
}

/// Sparse set of "animate this property from A to B" declarations.
///
/// Each property has an optional start and end. Only properties with an end
/// value are animated; a missing start means "whatever the target holds when
/// the interval starts". The descriptor is filled field by field and then handed
/// to a [`LerpInterval`](super::LerpInterval), which only reads it.
///
/// Every setter requires finite input. This is checked with `debug_assert!`
/// before anything is written, so a bad value panics in debug builds and leaves
/// the descriptor as it was.
///
/// # Example
///
/// ```rust,ignore
/// let mut lerp = PropertyLerpDescriptor::new();
/// lerp.set_end_pos(Vec3::new(1.0, 2.0, 3.0));
/// lerp.set_start_quat(Quat::IDENTITY);
/// lerp.set_end_hpr(Vec3::new(FRAC_PI_2, 0.0, 0.0)); // start converts at evaluation
/// lerp.set_override(5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLerpDescriptor {
    pos: LerpRange<Vec3>,
    rotation: LerpRange<Rotation>,
    scale: LerpRange<Vec3>,
    shear: LerpRange<Vec3>,
    color: LerpRange<Vec4>,
    color_scale: LerpRange<Vec4>,
    tex_offset: LerpRange<Vec2>,
    tex_rotation: LerpRange<f32>,
    tex_scale: LerpRange<Vec2>,

    // Only BAKE_IN_START and SLERP_SETUP live here; presence is derived.
    state: LerpFlags,
    override_priority: i32,
}

/// Generates start/end setters and getters for a plain (non-rotation) property.
macro_rules! impl_lerp_properties {
    ( $( ($field:ident, $ty:ty, $start_bit:ident, $end_bit:ident, $doc:literal) ),* $(,)? ) => {
        impl PropertyLerpDescriptor {
            $(
                paste::paste! {
                    #[doc = concat!("Sets the start ", $doc, ".")]
                    pub fn [<set_start_ $field>](&mut self, value: $ty) {
                        debug_assert!(
                            value.is_all_finite(),
                            concat!("non-finite start ", $doc, ": {:?}"),
                            value
                        );
                        self.$field.start = Some(value);
                    }

                    #[doc = concat!("Sets the end ", $doc, ".")]
                    pub fn [<set_end_ $field>](&mut self, value: $ty) {
                        debug_assert!(
                            value.is_all_finite(),
                            concat!("non-finite end ", $doc, ": {:?}"),
                            value
                        );
                        self.$field.end = Some(value);
                    }

                    #[inline]
                    #[must_use]
                    pub fn [<start_ $field>](&self) -> Option<$ty> {
                        self.$field.start
                    }

                    #[inline]
                    #[must_use]
                    pub fn [<end_ $field>](&self) -> Option<$ty> {
                        self.$field.end
                    }

                    #[inline]
                    #[must_use]
                    pub fn [<$field _range>](&self) -> &LerpRange<$ty> {
                        &self.$field
                    }
                }
            )*

            fn plain_presence(&self) -> LerpFlags {
                let mut flags = LerpFlags::empty();
                $(
                    flags.set(LerpFlags::$start_bit, self.$field.start.is_some());
                    flags.set(LerpFlags::$end_bit, self.$field.end.is_some());
                )*
                flags
            }
        }
    };
}

impl_lerp_properties!(
    (pos, Vec3, START_POS, END_POS, "position"),
    (scale, Vec3, START_SCALE, END_SCALE, "scale"),
    (shear, Vec3, START_SHEAR, END_SHEAR, "shear"),
    (color, Vec4, START_COLOR, END_COLOR, "color"),
    (color_scale, Vec4, START_COLOR_SCALE, END_COLOR_SCALE, "color scale"),
    (tex_offset, Vec2, START_TEX_OFFSET, END_TEX_OFFSET, "texture offset"),
    (tex_rotation, f32, START_TEX_ROTATION, END_TEX_ROTATION, "texture rotation"),
    (tex_scale, Vec2, START_TEX_SCALE, END_TEX_SCALE, "texture scale"),
);

impl PropertyLerpDescriptor {
    /// Creates an empty descriptor: nothing present, start values baked in,
    /// override priority 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pos: LerpRange::default(),
            rotation: LerpRange::default(),
            scale: LerpRange::default(),
            shear: LerpRange::default(),
            color: LerpRange::default(),
            color_scale: LerpRange::default(),
            tex_offset: LerpRange::default(),
            tex_rotation: LerpRange::default(),
            tex_scale: LerpRange::default(),
            state: LerpFlags::BAKE_IN_START,
            override_priority: 0,
        }
    }

    // ========================================================================
    // Scale convenience
    // ========================================================================

    /// Sets a uniform start scale on all three axes.
    pub fn set_start_scale_uniform(&mut self, scale: f32) {
        debug_assert!(scale.is_finite(), "non-finite start scale: {scale}");
        self.set_start_scale(Vec3::splat(scale));
    }

    /// Sets a uniform end scale on all three axes.
    pub fn set_end_scale_uniform(&mut self, scale: f32) {
        debug_assert!(scale.is_finite(), "non-finite end scale: {scale}");
        self.set_end_scale(Vec3::splat(scale));
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// Sets the start rotation as heading/pitch/roll, replacing any start quaternion.
    pub fn set_start_hpr(&mut self, hpr: Vec3) {
        debug_assert!(hpr.is_finite(), "non-finite start hpr: {hpr:?}");
        self.rotation.start = Some(Rotation::Hpr(hpr));
        self.state.remove(LerpFlags::SLERP_SETUP);
    }

    /// Sets the end rotation as heading/pitch/roll, replacing any end quaternion.
    pub fn set_end_hpr(&mut self, hpr: Vec3) {
        debug_assert!(hpr.is_finite(), "non-finite end hpr: {hpr:?}");
        self.rotation.end = Some(Rotation::Hpr(hpr));
        self.state.remove(LerpFlags::SLERP_SETUP);
    }

    /// Sets the start rotation as a quaternion, replacing any start HPR.
    pub fn set_start_quat(&mut self, quat: Quat) {
        debug_assert!(quat.is_finite(), "non-finite start quat: {quat:?}");
        debug_assert!(quat.length_squared() > 0.0, "zero-length start quat");
        self.rotation.start = Some(Rotation::Quat(quat));
        self.state.remove(LerpFlags::SLERP_SETUP);
    }

    /// Sets the end rotation as a quaternion, replacing any end HPR.
    pub fn set_end_quat(&mut self, quat: Quat) {
        debug_assert!(quat.is_finite(), "non-finite end quat: {quat:?}");
        debug_assert!(quat.length_squared() > 0.0, "zero-length end quat");
        self.rotation.end = Some(Rotation::Quat(quat));
        self.state.remove(LerpFlags::SLERP_SETUP);
    }

    /// Stores `quat` as a start HPR.
    pub fn set_start_hpr_from_quat(&mut self, quat: Quat) {
        debug_assert!(quat.is_finite(), "non-finite start quat: {quat:?}");
        debug_assert!(quat.length_squared() > 0.0, "zero-length start quat");
        self.set_start_hpr(math::quat_to_hpr(quat));
    }

    /// Stores `quat` as an end HPR.
    pub fn set_end_hpr_from_quat(&mut self, quat: Quat) {
        debug_assert!(quat.is_finite(), "non-finite end quat: {quat:?}");
        debug_assert!(quat.length_squared() > 0.0, "zero-length end quat");
        self.set_end_hpr(math::quat_to_hpr(quat));
    }

    /// Stores `hpr` as a start quaternion.
    pub fn set_start_quat_from_hpr(&mut self, hpr: Vec3) {
        debug_assert!(hpr.is_finite(), "non-finite start hpr: {hpr:?}");
        self.set_start_quat(math::hpr_to_quat(hpr));
    }

    /// Stores `hpr` as an end quaternion.
    pub fn set_end_quat_from_hpr(&mut self, hpr: Vec3) {
        debug_assert!(hpr.is_finite(), "non-finite end hpr: {hpr:?}");
        self.set_end_quat(math::hpr_to_quat(hpr));
    }

    #[inline]
    #[must_use]
    pub fn start_rotation(&self) -> Option<Rotation> {
        self.rotation.start
    }

    #[inline]
    #[must_use]
    pub fn end_rotation(&self) -> Option<Rotation> {
        self.rotation.end
    }

    /// Start HPR, if the start rotation is held as HPR.
    #[must_use]
    pub fn start_hpr(&self) -> Option<Vec3> {
        match self.rotation.start {
            Some(Rotation::Hpr(hpr)) => Some(hpr),
            _ => None,
        }
    }

    /// End HPR, if the end rotation is held as HPR.
    #[must_use]
    pub fn end_hpr(&self) -> Option<Vec3> {
        match self.rotation.end {
            Some(Rotation::Hpr(hpr)) => Some(hpr),
            _ => None,
        }
    }

    /// Start quaternion, if the start rotation is held as a quaternion.
    #[must_use]
    pub fn start_quat(&self) -> Option<Quat> {
        match self.rotation.start {
            Some(Rotation::Quat(quat)) => Some(quat),
            _ => None,
        }
    }

    /// End quaternion, if the end rotation is held as a quaternion.
    #[must_use]
    pub fn end_quat(&self) -> Option<Quat> {
        match self.rotation.end {
            Some(Rotation::Quat(quat)) => Some(quat),
            _ => None,
        }
    }

    // ========================================================================
    // Evaluation options
    // ========================================================================

    /// Sets the priority forwarded to the target with every applied sample.
    pub fn set_override(&mut self, priority: i32) {
        self.override_priority = priority;
    }

    #[inline]
    #[must_use]
    pub fn override_priority(&self) -> i32 {
        self.override_priority
    }

    /// When off, start values that were not set are re-read from the target on
    /// every step instead of once when the interval starts.
    pub fn set_bake_in_start(&mut self, bake_in_start: bool) {
        self.state.set(LerpFlags::BAKE_IN_START, bake_in_start);
    }

    #[inline]
    #[must_use]
    pub fn bake_in_start(&self) -> bool {
        self.state.contains(LerpFlags::BAKE_IN_START)
    }

    #[inline]
    #[must_use]
    pub fn is_slerp_setup(&self) -> bool {
        self.state.contains(LerpFlags::SLERP_SETUP)
    }

    pub(crate) fn mark_slerp_setup(&mut self) {
        self.state.insert(LerpFlags::SLERP_SETUP);
    }

    // ========================================================================
    // Presence
    // ========================================================================

    /// Full flag register: presence bits, rotation modes and evaluation state.
    #[must_use]
    pub fn flags(&self) -> LerpFlags {
        let mut flags = self.plain_presence() | self.state;
        match self.rotation.start {
            Some(Rotation::Hpr(_)) => flags.insert(LerpFlags::START_HPR),
            Some(Rotation::Quat(_)) => flags.insert(LerpFlags::START_QUAT),
            None => {}
        }
        match self.rotation.end {
            Some(Rotation::Hpr(_)) => flags.insert(LerpFlags::END_HPR),
            Some(Rotation::Quat(_)) => flags.insert(LerpFlags::END_QUAT),
            None => {}
        }
        flags
    }

    /// Returns `true` if no end value is present, i.e. there is nothing to animate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.flags().intersects(LerpFlags::ANY_END)
    }
}

impl Default for PropertyLerpDescriptor {
    fn default() -> Self {
        Self::new()
    }
}
