//! Native host operations consumed by the bridge.
//!
//! Each operation is a shared native function reference, supplied once at setup time by the host
//! integration. The bridge only references them; it never owns what they forward to.

use std::sync::Arc;
use crate::animation::ViewTag;
use crate::bridge::BridgeFunction;
use crate::runtime::{arg, NodeHandle, Object, RuntimeValue, ScriptRuntime};

// ****************************************
// ** Common operations
pub type RequestAnimationFrameFunction = Arc<dyn Fn(RuntimeValue) -> anyhow::Result<()> + Send + Sync>;
pub type GetAnimationTimestampFunction = Arc<dyn Fn() -> anyhow::Result<f64> + Send + Sync>;
/// `(tag, progress values, is shared element transition)`
pub type ProgressLayoutAnimationFunction = Arc<dyn Fn(ViewTag, Object, bool) -> anyhow::Result<()> + Send + Sync>;
/// `(tag, is cancelled, remove view)`
pub type EndLayoutAnimationFunction = Arc<dyn Fn(ViewTag, bool, bool) -> anyhow::Result<()> + Send + Sync>;
/// `(handler tag, new state)`
pub type SetGestureStateFunction = Arc<dyn Fn(i32, i32) -> anyhow::Result<()> + Send + Sync>;
pub type MaybeFlushUiUpdatesQueueFunction = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

// ****************************************
// ** New architecture (node handle addressed)
pub type UpdatePropsFabricFunction = Arc<dyn Fn(NodeHandle, Object) -> anyhow::Result<()> + Send + Sync>;
pub type RemoveFromPropsRegistryFunction = Arc<dyn Fn(NodeHandle) -> anyhow::Result<()> + Send + Sync>;
pub type DispatchCommandFabricFunction = Arc<dyn Fn(NodeHandle, String, RuntimeValue) -> anyhow::Result<()> + Send + Sync>;
pub type MeasureFabricFunction = Arc<dyn Fn(NodeHandle) -> anyhow::Result<Object> + Send + Sync>;
pub type ObtainPropFabricFunction =
    Arc<dyn Fn(&mut ScriptRuntime, NodeHandle, String) -> anyhow::Result<RuntimeValue> + Send + Sync>;

// ****************************************
// ** Legacy architecture (view tag addressed)
/// `(tag, view name, props)`
pub type UpdatePropsPaperFunction = Arc<dyn Fn(ViewTag, String, Object) -> anyhow::Result<()> + Send + Sync>;
pub type DispatchCommandPaperFunction = Arc<dyn Fn(ViewTag, String, RuntimeValue) -> anyhow::Result<()> + Send + Sync>;
/// `(tag, x, y, animated)`
pub type ScrollToFunction = Arc<dyn Fn(ViewTag, f64, f64, bool) -> anyhow::Result<()> + Send + Sync>;
/// Returns an ordered list of `(field name, value)` pairs.
pub type MeasurePaperFunction = Arc<dyn Fn(ViewTag) -> anyhow::Result<Vec<(String, f64)>> + Send + Sync>;
pub type ObtainPropPaperFunction =
    Arc<dyn Fn(&mut ScriptRuntime, ViewTag, String) -> anyhow::Result<RuntimeValue> + Send + Sync>;

pub const REQUEST_ANIMATION_FRAME: &str = "requestAnimationFrame";
pub const GET_ANIMATION_TIMESTAMP: &str = "_getAnimationTimestamp";
pub const NOTIFY_ABOUT_PROGRESS: &str = "_notifyAboutProgress";
pub const NOTIFY_ABOUT_END: &str = "_notifyAboutEnd";
pub const SET_GESTURE_STATE: &str = "_setGestureState";
pub const MAYBE_FLUSH_UI_UPDATES_QUEUE: &str = "_maybeFlushUIUpdatesQueue";
/// Installed by every variant, with variant-specific addressing.
pub const OBTAIN_PROP: &str = "_obtainProp";

/// Host operations installed under every renderer variant.
#[derive(Clone)]
pub struct CommonHostOperations {
    pub request_animation_frame: RequestAnimationFrameFunction,
    pub get_animation_timestamp: GetAnimationTimestampFunction,
    pub progress_layout_animation: ProgressLayoutAnimationFunction,
    pub end_layout_animation: EndLayoutAnimationFunction,
    pub set_gesture_state: SetGestureStateFunction,
    pub maybe_flush_ui_updates_queue: MaybeFlushUiUpdatesQueueFunction,
}

impl CommonHostOperations {
    pub fn bridge_functions(&self) -> Vec<BridgeFunction> {
        let request_animation_frame = self.request_animation_frame.clone();
        let get_animation_timestamp = self.get_animation_timestamp.clone();
        let progress_layout_animation = self.progress_layout_animation.clone();
        let end_layout_animation = self.end_layout_animation.clone();
        let set_gesture_state = self.set_gesture_state.clone();
        let maybe_flush_ui_updates_queue = self.maybe_flush_ui_updates_queue.clone();

        vec![
            BridgeFunction::new(REQUEST_ANIMATION_FRAME, move |_rt, args| {
                let callback = arg::<RuntimeValue>(args, 0)?;
                request_animation_frame(callback)?;
                Ok(RuntimeValue::Undefined)
            }),
            BridgeFunction::nullary(GET_ANIMATION_TIMESTAMP, move || get_animation_timestamp()),
            BridgeFunction::ternary(NOTIFY_ABOUT_PROGRESS, move |tag: ViewTag, values: Object, shared: bool| {
                progress_layout_animation(tag, values, shared)
            }),
            BridgeFunction::ternary(NOTIFY_ABOUT_END, move |tag: ViewTag, cancelled: bool, remove_view: bool| {
                end_layout_animation(tag, cancelled, remove_view)
            }),
            BridgeFunction::binary(SET_GESTURE_STATE, move |handler_tag: i32, new_state: i32| {
                set_gesture_state(handler_tag, new_state)
            }),
            BridgeFunction::nullary(MAYBE_FLUSH_UI_UPDATES_QUEUE, move || maybe_flush_ui_updates_queue()),
        ]
    }
}

impl std::fmt::Debug for CommonHostOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommonHostOperations").finish_non_exhaustive()
    }
}
