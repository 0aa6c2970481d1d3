use std::sync::{Arc, Mutex};
use anyhow::{anyhow, bail};
use crate::bridge::host::{GetAnimationTimestampFunction, RequestAnimationFrameFunction};
use crate::runtime::{RuntimeException, RuntimeValue, ScriptRuntime};

#[derive(Debug, Default)]
struct FrameState {
    pending: Vec<RuntimeValue>,
    last_timestamp_ms: f64,
}

/// Queue behind `requestAnimationFrame`.
///
/// Callbacks requested by script are kept until the next frame, then each is called once with
/// the frame timestamp. Callbacks requested while a frame is being flushed wait for the next one.
#[derive(Debug, Clone, Default)]
pub struct FrameCallbacks {
    state: Arc<Mutex<FrameState>>,
}

impl FrameCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host operation that queues a callback for the next frame.
    pub fn request_animation_frame_function(&self) -> RequestAnimationFrameFunction {
        let state = self.state.clone();
        Arc::new(move |callback: RuntimeValue| -> anyhow::Result<()> {
            if callback.as_function().is_none() {
                bail!("requestAnimationFrame expects a function, got {}", callback.type_name());
            }
            state
                .lock()
                .map_err(|_| anyhow!("frame callback queue poisoned"))?
                .pending
                .push(callback);
            Ok(())
        })
    }

    /// Host operation returning the timestamp of the last flushed frame.
    pub fn animation_timestamp_function(&self) -> GetAnimationTimestampFunction {
        let state = self.state.clone();
        Arc::new(move || -> anyhow::Result<f64> {
            let state = state.lock().map_err(|_| anyhow!("frame callback queue poisoned"))?;
            Ok(state.last_timestamp_ms)
        })
    }

    pub fn pending(&self) -> usize {
        self.state.lock().map(|s| s.pending.len()).unwrap_or_default()
    }

    /// Run every queued callback with `timestamp_ms`. Returns how many ran.
    ///
    /// Stops at the first callback that throws; callbacks after it are dropped with the frame.
    pub fn flush(&self, runtime: &mut ScriptRuntime, timestamp_ms: f64) -> Result<usize, RuntimeException> {
        let callbacks = {
            let mut state = self
                .state
                .lock()
                .map_err(|_| RuntimeException::Host("frame callback queue poisoned".into()))?;
            state.last_timestamp_ms = timestamp_ms;
            std::mem::take(&mut state.pending)
        };

        let count = callbacks.len();
        for callback in &callbacks {
            runtime.call_function(callback, &[RuntimeValue::Number(timestamp_ms)])?;
        }

        Ok(count)
    }
}
