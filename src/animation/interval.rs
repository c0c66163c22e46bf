use glam::{Quat, Vec4};

use crate::animation::blend::BlendType;
use crate::animation::descriptor::{PropertyLerpDescriptor, Rotation};
use crate::animation::settings::IntervalSettings;
use crate::animation::target::{LerpSample, LerpTarget, PropertyValues};
use crate::animation::values::{Interpolatable, lerp_or};
use crate::errors::{LerpError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalState {
    /// Not yet started; the next step captures start values.
    Initial,
    Started,
    /// End values applied. Stepping again restarts the interval.
    Final,
}

/// Normalized quaternion endpoints, with the start sign chosen for the short arc.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SlerpSetup {
    start: Quat,
    end: Quat,
}

impl SlerpSetup {
    fn new(start: Quat, end: Quat) -> Self {
        let end = normalize_or_identity(end);
        let mut start = normalize_or_identity(start);
        if start.dot(end) < 0.0 {
            start = -start;
        }
        Self { start, end }
    }
}

/// Zero-length quaternions (e.g. read back from a target) fall back to identity.
fn normalize_or_identity(quat: Quat) -> Quat {
    Vec4::from(quat)
        .try_normalize()
        .map_or(Quat::IDENTITY, Quat::from_vec4)
}

/// Animates a target from a descriptor's start values to its end values over
/// a fixed duration.
///
/// Start values the descriptor leaves open are taken from the target when the
/// interval starts (or on every step, if the descriptor does not bake in its
/// start).
#[derive(Debug, Clone)]
pub struct LerpInterval {
    name: String,
    descriptor: PropertyLerpDescriptor,
    duration: f32,
    blend: BlendType,
    state: IntervalState,

    baseline: PropertyValues,
    slerp: Option<SlerpSetup>,
}

impl LerpInterval {
    /// Creates an interval. `duration` is in seconds and must be finite and
    /// non-negative.
    pub fn new(
        name: impl Into<String>,
        duration: f32,
        blend: BlendType,
        descriptor: PropertyLerpDescriptor,
    ) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(LerpError::InvalidDuration(duration));
        }

        Ok(Self {
            name: name.into(),
            descriptor,
            duration,
            blend,
            state: IntervalState::Initial,
            baseline: PropertyValues::IDENTITY,
            slerp: None,
        })
    }

    /// Creates an interval from settings, copying the settings' start baking and
    /// override priority onto the descriptor.
    pub fn from_settings(
        name: impl Into<String>,
        settings: &IntervalSettings,
        mut descriptor: PropertyLerpDescriptor,
    ) -> Result<Self> {
        descriptor.set_bake_in_start(settings.bake_in_start);
        descriptor.set_override(settings.override_priority);
        Self::new(name, settings.duration, settings.blend, descriptor)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn blend(&self) -> BlendType {
        self.blend
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> IntervalState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &PropertyLerpDescriptor {
        &self.descriptor
    }

    /// Mutable access to the descriptor, e.g. to retarget a running interval.
    ///
    /// Changes take effect on the next step. Changing a rotation drops the
    /// cached slerp parameters; they are rebuilt from the start values captured
    /// when the interval started.
    #[inline]
    pub fn descriptor_mut(&mut self) -> &mut PropertyLerpDescriptor {
        &mut self.descriptor
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Captures the target's current values and enters [`IntervalState::Started`].
    pub fn initialize<T: LerpTarget + ?Sized>(&mut self, target: &T) {
        self.baseline = target.property_values();
        self.setup_slerp();
        self.state = IntervalState::Started;
        log::debug!("LerpInterval '{}': started ({}s, {:?})", self.name, self.duration, self.blend);
    }

    /// Applies the values at `time` seconds into the interval.
    ///
    /// Starts the interval first if it has not started yet or already finished.
    pub fn step<T: LerpTarget + ?Sized>(&mut self, time: f32, target: &mut T) {
        if self.state != IntervalState::Started {
            self.initialize(&*target);
        }

        if !self.descriptor.bake_in_start() {
            self.baseline = target.property_values();
            if self.descriptor.start_rotation().is_none() {
                self.setup_slerp();
            }
        }
        if !self.descriptor.is_slerp_setup() {
            self.setup_slerp();
        }

        let d = self.progress(time);
        log::trace!("LerpInterval '{}': step t={time} d={d}", self.name);
        self.apply(d, target);
    }

    /// Applies the end values and enters [`IntervalState::Final`].
    pub fn finish<T: LerpTarget + ?Sized>(&mut self, target: &mut T) {
        if self.state == IntervalState::Final {
            return;
        }
        if self.state == IntervalState::Initial {
            self.initialize(&*target);
        }
        if !self.descriptor.bake_in_start() {
            self.baseline = target.property_values();
        }
        if !self.descriptor.is_slerp_setup() {
            self.setup_slerp();
        }

        self.apply(1.0, target);
        self.state = IntervalState::Final;
        log::debug!("LerpInterval '{}': finished", self.name);
    }

    /// Jumps straight to the end values, restarting from the target's current state.
    pub fn instant<T: LerpTarget + ?Sized>(&mut self, target: &mut T) {
        self.initialize(&*target);
        self.finish(target);
    }

    /// Interpolation weight at `time` seconds, after easing.
    #[must_use]
    pub fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.blend.apply(time / self.duration)
    }

    /// Evaluates the descriptor at weight `d`, filling unset starts from `baseline`.
    ///
    /// Does not touch the interval's own playback state.
    #[must_use]
    pub fn sample(&self, d: f32, baseline: &PropertyValues) -> LerpSample {
        self.sample_with(d, baseline, self.slerp_setup_for(baseline))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn apply<T: LerpTarget + ?Sized>(&self, d: f32, target: &mut T) {
        let slerp = self.slerp.or_else(|| self.slerp_setup_for(&self.baseline));
        let sample = self.sample_with(d, &self.baseline, slerp);
        target.apply_sample(&sample, self.descriptor.override_priority());
    }

    fn slerp_setup_for(&self, baseline: &PropertyValues) -> Option<SlerpSetup> {
        let Some(Rotation::Quat(end)) = self.descriptor.end_rotation() else {
            return None;
        };
        let start = self
            .descriptor
            .start_rotation()
            .map_or(baseline.rotation, Rotation::to_quat);
        Some(SlerpSetup::new(start, end))
    }

    fn setup_slerp(&mut self) {
        self.slerp = self.slerp_setup_for(&self.baseline);
        if let Some(setup) = self.slerp {
            self.descriptor.mark_slerp_setup();
            log::debug!(
                "LerpInterval '{}': slerp setup {:?} -> {:?}",
                self.name,
                setup.start,
                setup.end
            );
        }
    }

    fn sample_with(
        &self,
        d: f32,
        baseline: &PropertyValues,
        slerp: Option<SlerpSetup>,
    ) -> LerpSample {
        let desc = &self.descriptor;

        let rotation = desc.end_rotation().and_then(|end| match end {
            Rotation::Hpr(end) => {
                let start = desc
                    .start_rotation()
                    .map_or_else(|| baseline.hpr(), Rotation::to_hpr);
                Some(Rotation::Hpr(start.lerp(end, d)))
            }
            Rotation::Quat(_) => {
                slerp.map(|s| Rotation::Quat(Quat::interpolate_linear(s.start, s.end, d)))
            }
        });

        LerpSample {
            position: desc
                .end_pos()
                .map(|end| lerp_or(desc.start_pos(), baseline.position, end, d)),
            rotation,
            scale: desc
                .end_scale()
                .map(|end| lerp_or(desc.start_scale(), baseline.scale, end, d)),
            shear: desc
                .end_shear()
                .map(|end| lerp_or(desc.start_shear(), baseline.shear, end, d)),
            color: desc
                .end_color()
                .map(|end| lerp_or(desc.start_color(), baseline.color, end, d)),
            color_scale: desc
                .end_color_scale()
                .map(|end| lerp_or(desc.start_color_scale(), baseline.color_scale, end, d)),
            tex_offset: desc
                .end_tex_offset()
                .map(|end| lerp_or(desc.start_tex_offset(), baseline.tex_offset, end, d)),
            tex_rotation: desc
                .end_tex_rotation()
                .map(|end| lerp_or(desc.start_tex_rotation(), baseline.tex_rotation, end, d)),
            tex_scale: desc
                .end_tex_scale()
                .map(|end| lerp_or(desc.start_tex_scale(), baseline.tex_scale, end, d)),
        }
    }
}
