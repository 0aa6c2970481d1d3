/// Exception raised inside a script runtime. Bridge functions never catch these; they travel
/// back to whatever script (or manager) made the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeException {
    #[error("ReferenceError: {0} is not defined")]
    ReferenceError(String),

    #[error("TypeError: {0}")]
    TypeError(String),

    #[error("Error: {0}")]
    Host(String),
}

impl From<anyhow::Error> for RuntimeException {
    fn from(e: anyhow::Error) -> Self {
        RuntimeException::Host(format!("{e:#}"))
    }
}
