// src/bridge.rs
//! UI runtime bridge: native-backed functions installed into the UI runtime's global scope.
//!
//! - [`BridgeFunction`]: one forwarding shim around one host operation.
//! - [`RendererVariant`]: supplies the variant-specific functions. [`variants::fabric`] addresses
//!   views by node handle, [`variants::paper`] by view tag.
//! - [`CommonHostOperations`]: functions installed under every variant.
//! - [`decorate`]: installs all of the above, once per UI runtime.

pub mod decorator;
pub mod frame;
pub mod function;
pub mod host;
pub mod variant;
pub mod variants;

pub use decorator::decorate;
pub use frame::FrameCallbacks;
pub use function::BridgeFunction;
pub use host::CommonHostOperations;
pub use variant::{Addressing, RendererVariant};

#[cfg(feature = "fabric")]
pub use variants::fabric::{FabricHostOperations, FabricVariant};
#[cfg(feature = "paper")]
pub use variants::paper::{PaperHostOperations, PaperVariant};
