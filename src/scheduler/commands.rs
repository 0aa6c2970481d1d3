//! Messages flowing into and out of the UI thread.
//!
//! - [`UiCommand`]: work posted to the UI thread. Every variant owns its data.
//! - [`UiEvent`]: what the UI thread reports back, broadcast to all subscribers.

use tokio::sync::oneshot;
use crate::animation::{AnimationKind, AnimationRequest, ViewTag};
use crate::errors::BridgeError;
use crate::runtime::RuntimeId;

#[derive(Debug)]
pub enum UiCommand {
    // ****************************************
    // ** Layout animations
    /// Build a value bag and start a layout animation through the manager
    StartAnimation(AnimationRequest),

    // ****************************************
    // ** Frames
    /// Run every frame callback requested so far with the given timestamp
    AnimationFrame { timestamp_ms: f64 },

    // ****************************************
    // ** Lifecycle
    /// Stop the UI thread once every earlier command has been handled
    Shutdown {
        reply: oneshot::Sender<Result<(), BridgeError>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The manager accepted a layout animation start
    AnimationStarted { tag: ViewTag, kind: AnimationKind },
    /// The manager (or the script it called) failed to start an animation
    AnimationFailed { tag: ViewTag, kind: AnimationKind, message: String },
    /// Frame callbacks have been run
    FrameFlushed { timestamp_ms: f64, callbacks: usize },
    /// A frame callback raised an exception
    FrameFailed { timestamp_ms: f64, message: String },
    /// The UI runtime is gone
    RuntimeShutdown { runtime: RuntimeId },
}
