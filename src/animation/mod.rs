pub mod blend;
pub mod descriptor;
pub mod flags;
pub mod interval;
pub mod mixer;
pub mod settings;
pub mod target;
pub mod values;

pub use blend::BlendType;
pub use descriptor::{LerpRange, PropertyLerpDescriptor, Rotation};
pub use flags::LerpFlags;
pub use interval::{IntervalState, LerpInterval};
pub use mixer::LerpMixer;
pub use settings::IntervalSettings;
pub use target::{LerpSample, LerpTarget, PropertyValues};
pub use values::Interpolatable;
