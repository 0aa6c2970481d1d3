use crate::runtime::{RuntimeException, RuntimeId};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("UI runtime {0} is already decorated")]
    AlreadyDecorated(RuntimeId),

    #[error("Runtime {0} is not a UI runtime")]
    NotUiRuntime(RuntimeId),

    #[error("UI thread channel closed")]
    ChannelClosed,

    #[error("UI thread panicked")]
    ThreadPanic,

    #[error("Failed to spawn UI thread: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("Runtime exception: {0}")]
    Runtime(#[from] RuntimeException),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal bridge error")]
    Internal,
}
