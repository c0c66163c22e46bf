#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod errors;
pub mod math;
pub mod scene;

pub use animation::{
    BlendType, IntervalSettings, LerpFlags, LerpInterval, LerpMixer, LerpTarget,
    PropertyLerpDescriptor, Rotation,
};
pub use errors::{LerpError, Result};
pub use scene::{NodeKey, NodeState, Transform};
