pub mod animation;
pub mod bridge;
pub mod config;
pub mod errors;
pub mod host;
pub mod runtime;
pub mod scheduler;

pub use animation::{AnimationKind, GeometryValues, LayoutAnimationsManager, LayoutAnimationsProxy, ViewTag};
pub use bridge::decorate;
pub use config::{init_logging, BridgeConfig};
pub use errors::BridgeError;
pub use runtime::{RuntimeValue, ScriptRuntime};
pub use scheduler::{UiScheduler, UiSpawnArgs, UiThread, UiThreadHandle};
