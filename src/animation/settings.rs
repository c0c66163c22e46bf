//! Interval Settings
//!
//! Serializable timing and evaluation options for a [`LerpInterval`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use node_lerp::animation::{BlendType, IntervalSettings};
//!
//! // Default: one second, linear, start values baked in, priority 0
//! let settings = IntervalSettings::default();
//!
//! let settings = IntervalSettings {
//!     duration: 0.25,
//!     blend: BlendType::EaseOut,
//!     ..Default::default()
//! };
//!
//! // Or from a config file
//! let settings = IntervalSettings::from_json(r#"{ "duration": 2.0, "blend": "ease_in_out" }"#)?;
//! ```
//!
//! [`LerpInterval`]: super::LerpInterval

use serde::{Deserialize, Serialize};

use crate::animation::blend::BlendType;
use crate::errors::Result;

/// Timing and evaluation options applied when building a [`LerpInterval`](super::LerpInterval).
///
/// `bake_in_start` and `override_priority` are copied onto the descriptor,
/// replacing whatever it held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalSettings {
    /// Length of the interval in seconds.
    pub duration: f32,
    /// Easing applied to the progress fraction.
    pub blend: BlendType,
    /// Capture unspecified start values once when the interval starts.
    pub bake_in_start: bool,
    /// Priority forwarded to the target with every write.
    pub override_priority: i32,
}

impl Default for IntervalSettings {
    fn default() -> Self {
        Self {
            duration: 1.0,
            blend: BlendType::Linear,
            bake_in_start: true,
            override_priority: 0,
        }
    }
}

impl IntervalSettings {
    /// Parses settings from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
