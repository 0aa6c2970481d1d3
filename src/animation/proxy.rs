use std::sync::Arc;
use crate::animation::{AnimationKind, AnimationPayload, AnimationRequest, GeometryValues, ViewTag};
use crate::errors::BridgeError;
use crate::scheduler::{UiCommand, UiScheduler};

/// Entry point for application code to start layout animations.
///
/// Both operations copy their arguments into an [`AnimationRequest`] and post it to the UI
/// thread. They return as soon as the request is queued; the animation itself starts later on
/// the UI thread. An error only means the UI thread is gone.
#[derive(Clone)]
pub struct LayoutAnimationsProxy {
    scheduler: Arc<dyn UiScheduler>,
}

impl LayoutAnimationsProxy {
    pub fn new(scheduler: Arc<dyn UiScheduler>) -> Self {
        Self { scheduler }
    }

    /// Start a single-state animation (entering, exiting, ...) for a view.
    pub fn start_animation(&self, tag: ViewTag, kind: AnimationKind, values: GeometryValues) -> Result<(), BridgeError> {
        self.dispatch(AnimationRequest {
            tag,
            kind,
            payload: AnimationPayload::Single(values),
        })
    }

    /// Start a layout transition from `current` to `target`. Always uses [`AnimationKind::Layout`].
    pub fn start_layout_transition_animation(
        &self,
        tag: ViewTag,
        current: GeometryValues,
        target: GeometryValues,
    ) -> Result<(), BridgeError> {
        self.dispatch(AnimationRequest {
            tag,
            kind: AnimationKind::Layout,
            payload: AnimationPayload::Transition { current, target },
        })
    }

    fn dispatch(&self, request: AnimationRequest) -> Result<(), BridgeError> {
        log::trace!("Posting {} animation for view {} to the UI thread", request.kind, request.tag);
        self.scheduler.schedule_on_ui(UiCommand::StartAnimation(request))
    }
}
