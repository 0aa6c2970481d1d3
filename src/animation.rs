// src/animation.rs
//! Layout animations: geometry snapshots, value bags, the manager seam and the
//! [`LayoutAnimationsProxy`] that ships start requests onto the UI thread.

pub mod manager;
pub mod proxy;
pub mod types;
pub mod value_bag;

pub use manager::{DefaultLayoutAnimationsManager, LayoutAnimationsManager, SCRIPT_MANAGER_GLOBAL};
pub use proxy::LayoutAnimationsProxy;
pub use types::{AnimationKind, AnimationPayload, AnimationRequest, GeometryValues, ViewTag};
pub use value_bag::build_value_bag;
