use tokio::sync::{broadcast, mpsc, oneshot};
use crate::animation::{build_value_bag, AnimationRequest, LayoutAnimationsManager};
use crate::bridge::{decorate, FrameCallbacks};
use crate::errors::BridgeError;
use crate::runtime::{RuntimeId, ScriptRuntime};
use crate::scheduler::{UiCommand, UiEvent, UiSpawnArgs};

/// Run loop of the UI thread. Owns the UI runtime; nothing else ever touches it.
pub struct UiWorker {
    runtime: ScriptRuntime,
    cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    event_tx: broadcast::Sender<UiEvent>,
    manager: Box<dyn LayoutAnimationsManager>,
    frames: Option<FrameCallbacks>,
}

impl UiWorker {
    /// Create the UI runtime, decorate it and run the init script. Must be called on the UI
    /// thread, before any command is handled.
    pub fn new(
        args: UiSpawnArgs,
        cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
        event_tx: broadcast::Sender<UiEvent>,
    ) -> Result<Self, BridgeError> {
        let mut runtime = ScriptRuntime::new_ui();

        decorate(&mut runtime, args.variant.as_ref(), &args.common)?;

        if let Some(init_script) = args.init_script {
            init_script(&mut runtime)?;
        }

        Ok(Self {
            runtime,
            cmd_rx,
            event_tx,
            manager: args.manager,
            frames: args.frames,
        })
    }

    pub fn runtime_id(&self) -> RuntimeId {
        self.runtime.id()
    }

    /// Handle commands until shutdown is requested or every sender is gone.
    pub fn run(mut self) {
        log::info!("UI runtime {} started", self.runtime.id());

        let mut shutdown_reply: Option<oneshot::Sender<Result<(), BridgeError>>> = None;

        while let Some(cmd) = self.cmd_rx.blocking_recv() {
            match cmd {
                UiCommand::StartAnimation(request) => self.start_animation(request),
                UiCommand::AnimationFrame { timestamp_ms } => self.animation_frame(timestamp_ms),
                UiCommand::Shutdown { reply } => {
                    shutdown_reply = Some(reply);
                    break;
                }
            }
        }

        log::info!("UI runtime {} shutting down", self.runtime.id());
        let _ = self.event_tx.send(UiEvent::RuntimeShutdown { runtime: self.runtime.id() });

        if let Some(reply) = shutdown_reply {
            let _ = reply.send(Ok(()));
        }
    }

    fn start_animation(&mut self, request: AnimationRequest) {
        let AnimationRequest { tag, kind, payload } = request;
        let values = build_value_bag(&payload);

        log::debug!("Starting {} animation for view {}: {}", kind, tag, serde_json::Value::from(&values));

        match self.manager.start_layout_animation(&mut self.runtime, tag, kind, values) {
            Ok(()) => {
                let _ = self.event_tx.send(UiEvent::AnimationStarted { tag, kind });
            }
            Err(e) => {
                log::error!("Layout animation {} for view {} failed: {}", kind, tag, e);
                let _ = self.event_tx.send(UiEvent::AnimationFailed { tag, kind, message: e.to_string() });
            }
        }
    }

    fn animation_frame(&mut self, timestamp_ms: f64) {
        let Some(frames) = self.frames.clone() else {
            log::trace!("Frame at {}ms ignored, no frame callbacks attached", timestamp_ms);
            return;
        };

        match frames.flush(&mut self.runtime, timestamp_ms) {
            Ok(callbacks) => {
                let _ = self.event_tx.send(UiEvent::FrameFlushed { timestamp_ms, callbacks });
            }
            Err(e) => {
                log::warn!("Frame callback at {}ms failed: {}", timestamp_ms, e);
                let _ = self.event_tx.send(UiEvent::FrameFailed { timestamp_ms, message: e.to_string() });
            }
        }
    }
}
