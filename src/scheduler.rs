// src/scheduler.rs
//! UI thread: [`UiThread`], [`UiThreadHandle`] and the [`UiScheduler`] seam.
//!
//! The UI thread is a dedicated, named OS thread that owns the UI runtime. Work reaches it as
//! owned [`UiCommand`] messages on an unbounded channel, so posting never blocks and commands
//! from one sender run in the order they were posted.

pub mod commands;
pub mod handle;
pub mod worker;

pub use commands::{UiCommand, UiEvent};
pub use handle::UiThreadHandle;
pub use worker::UiWorker;

use std::thread;
use tokio::sync::{broadcast, mpsc};
use crate::animation::LayoutAnimationsManager;
use crate::bridge::{CommonHostOperations, FrameCallbacks, RendererVariant};
use crate::config::BridgeConfig;
use crate::errors::BridgeError;
use crate::runtime::{RuntimeException, RuntimeId, ScriptRuntime};

/// Something that can run commands on the UI thread later, exactly once, in post order.
pub trait UiScheduler: Send + Sync {
    fn schedule_on_ui(&self, command: UiCommand) -> Result<(), BridgeError>;
}

/// Script run once in the UI runtime right after decoration.
pub type InitScript = Box<dyn FnOnce(&mut ScriptRuntime) -> Result<(), RuntimeException> + Send>;

/// Everything the UI thread needs. Moved onto the thread at spawn time.
pub struct UiSpawnArgs {
    /// Renderer variant providing the variant-specific bridge functions
    pub variant: Box<dyn RendererVariant>,
    /// Host operations installed under both variants
    pub common: CommonHostOperations,
    /// Receiver of layout animation starts
    pub manager: Box<dyn LayoutAnimationsManager>,
    /// Frame callback queue flushed on every [`UiCommand::AnimationFrame`]
    pub frames: Option<FrameCallbacks>,
    /// Optional script evaluated after decoration
    pub init_script: Option<InitScript>,
}

pub struct UiThread;

impl UiThread {
    /// Spawn the UI thread and wait until its runtime is decorated.
    ///
    /// Decoration failures are fatal for the runtime: the thread exits and the error is returned.
    pub fn spawn(config: &BridgeConfig, args: UiSpawnArgs) -> Result<UiThreadHandle, BridgeError> {
        config.validate()?;

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();
        let (event_tx, _first_rx) = broadcast::channel::<UiEvent>(config.event_capacity);
        let (ready_tx, ready_rx) = std::sync::mpsc::sync_channel::<Result<RuntimeId, BridgeError>>(1);

        let worker_event_tx = event_tx.clone();
        let thread = thread::Builder::new()
            .name(config.ui_thread_name.clone())
            .spawn(move || {
                let worker = match UiWorker::new(args, cmd_rx, worker_event_tx) {
                    Ok(worker) => worker,
                    Err(e) => {
                        log::error!("UI runtime setup failed: {}", e);
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                let _ = ready_tx.send(Ok(worker.runtime_id()));
                worker.run();
            })?;

        match ready_rx.recv() {
            Ok(Ok(runtime_id)) => Ok(UiThreadHandle::new(runtime_id, cmd_tx, event_tx, thread)),
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(e)
            }
            Err(_) => {
                let _ = thread.join();
                Err(BridgeError::ThreadPanic)
            }
        }
    }
}
