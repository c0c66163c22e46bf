use serde::{Deserialize, Serialize};

/// Easing applied to an interval's progress fraction before interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendType {
    /// Constant rate.
    #[default]
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl BlendType {
    /// Maps a progress fraction to an interpolation weight.
    ///
    /// `t` is clamped to `[0, 1]`; every curve maps 0 to 0 and 1 to 1.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        match self {
            Self::Linear => t,
            Self::EaseIn => (3.0 * t2 - t2 * t) * 0.5,
            Self::EaseOut => (3.0 * t - t2 * t) * 0.5,
            Self::EaseInOut => 3.0 * t2 - 2.0 * t * t2,
        }
    }
}
