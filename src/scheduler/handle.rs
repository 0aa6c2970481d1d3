use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tokio::sync::{broadcast, mpsc, oneshot};
use crate::errors::BridgeError;
use crate::runtime::RuntimeId;
use crate::scheduler::{UiCommand, UiEvent, UiScheduler};

/// Cloneable handle to a running UI thread.
#[derive(Clone)]
pub struct UiThreadHandle {
    /// ID of the runtime owned by the UI thread
    runtime_id: RuntimeId,
    /// Command sender into the UI run loop
    cmd_tx: mpsc::UnboundedSender<UiCommand>,
    /// Event sender, used to hand out subscriptions
    event_tx: broadcast::Sender<UiEvent>,
    /// Join handle of the UI thread, taken by the first `join()`
    thread: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl std::fmt::Debug for UiThreadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiThreadHandle")
            .field("runtime_id", &self.runtime_id)
            .field("cmd_tx", &self.cmd_tx)
            .finish()
    }
}

impl UiThreadHandle {
    pub(crate) fn new(
        runtime_id: RuntimeId,
        cmd_tx: mpsc::UnboundedSender<UiCommand>,
        event_tx: broadcast::Sender<UiEvent>,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            runtime_id,
            cmd_tx,
            event_tx,
            thread: Arc::new(Mutex::new(Some(thread))),
        }
    }

    pub fn runtime_id(&self) -> RuntimeId {
        self.runtime_id
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<UiEvent> {
        self.event_tx.subscribe()
    }

    /// Post a frame tick. Frame callbacks requested so far run with `timestamp_ms`.
    pub fn request_frame(&self, timestamp_ms: f64) -> Result<(), BridgeError> {
        self.schedule_on_ui(UiCommand::AnimationFrame { timestamp_ms })
    }

    /// Stop the UI thread after every command posted before this call has been handled.
    pub async fn shutdown(&self) -> Result<(), BridgeError> {
        let (tx, rx) = oneshot::channel();

        self.cmd_tx
            .send(UiCommand::Shutdown { reply: tx })
            .map_err(|_| BridgeError::ChannelClosed)?;

        rx.await.map_err(|_| BridgeError::ChannelClosed)?
    }

    /// Wait for the UI thread to finish. Only the first call actually joins.
    pub fn join(&self) -> Result<(), BridgeError> {
        let thread = self.thread.lock().map_err(|_| BridgeError::Internal)?.take();
        if let Some(thread) = thread {
            thread.join().map_err(|_| BridgeError::ThreadPanic)?;
        }
        Ok(())
    }
}

impl UiScheduler for UiThreadHandle {
    fn schedule_on_ui(&self, command: UiCommand) -> Result<(), BridgeError> {
        self.cmd_tx.send(command).map_err(|_| BridgeError::ChannelClosed)
    }
}
