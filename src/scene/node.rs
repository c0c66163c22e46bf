use glam::{Vec2, Vec4};

use crate::animation::descriptor::Rotation;
use crate::animation::target::{LerpSample, LerpTarget, PropertyValues};
use crate::scene::transform::Transform;

/// Animatable state of a scene node.
///
/// Holds the spatial [`Transform`] plus the render attributes a lerp can drive:
/// flat color, color scale and the texture transform.
#[derive(Debug, Clone)]
pub struct NodeState {
    pub transform: Transform,

    pub color: Vec4,
    pub color_scale: Vec4,

    pub tex_offset: Vec2,
    /// Texture rotation in radians.
    pub tex_rotation: f32,
    pub tex_scale: Vec2,

    /// Priority of the last lerp that wrote a render attribute.
    pub(crate) override_priority: i32,
}

impl NodeState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: Transform::new(),
            color: Vec4::ONE,
            color_scale: Vec4::ONE,
            tex_offset: Vec2::ZERO,
            tex_rotation: 0.0,
            tex_scale: Vec2::ONE,
            override_priority: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn override_priority(&self) -> i32 {
        self.override_priority
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new()
    }
}

impl LerpTarget for NodeState {
    fn property_values(&self) -> PropertyValues {
        PropertyValues {
            position: self.transform.position,
            rotation: self.transform.rotation,
            scale: self.transform.scale,
            shear: self.transform.shear,
            color: self.color,
            color_scale: self.color_scale,
            tex_offset: self.tex_offset,
            tex_rotation: self.tex_rotation,
            tex_scale: self.tex_scale,
        }
    }

    fn apply_sample(&mut self, sample: &LerpSample, priority: i32) {
        let transform = &mut self.transform;
        if let Some(position) = sample.position {
            transform.position = position;
        }
        match sample.rotation {
            Some(Rotation::Hpr(hpr)) => transform.set_hpr(hpr),
            Some(Rotation::Quat(quat)) => transform.rotation = quat,
            None => {}
        }
        if let Some(scale) = sample.scale {
            transform.scale = scale;
        }
        if let Some(shear) = sample.shear {
            transform.shear = shear;
        }

        // Render attributes carry the override priority.
        let mut attrib_written = false;
        if let Some(color) = sample.color {
            self.color = color;
            attrib_written = true;
        }
        if let Some(color_scale) = sample.color_scale {
            self.color_scale = color_scale;
            attrib_written = true;
        }
        if let Some(offset) = sample.tex_offset {
            self.tex_offset = offset;
            attrib_written = true;
        }
        if let Some(rotation) = sample.tex_rotation {
            self.tex_rotation = rotation;
            attrib_written = true;
        }
        if let Some(scale) = sample.tex_scale {
            self.tex_scale = scale;
            attrib_written = true;
        }
        if attrib_written {
            self.override_priority = priority;
        }
    }
}
