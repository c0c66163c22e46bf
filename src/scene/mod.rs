//! Scene-side lerp targets
//!
//! - Transform: position, rotation, scale and shear with a cached local matrix
//! - NodeState: transform plus color and texture-transform attributes

pub mod node;
pub mod transform;

pub use node::NodeState;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
}
