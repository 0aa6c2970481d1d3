use std::fmt::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a script runtime, represented as a UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeId(Uuid);

impl RuntimeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RuntimeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RuntimeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the bridge a runtime lives on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RuntimeKind {
    /// Main application runtime. Never decorated.
    Main,
    /// Runtime bound to the UI thread.
    Ui,
}

/// Per-runtime context, created once together with the runtime.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    id: RuntimeId,
    kind: RuntimeKind,
    /// Name of the renderer variant that decorated this runtime, if any
    decorated_by: Option<&'static str>,
}

impl RuntimeContext {
    pub fn new(kind: RuntimeKind) -> Self {
        Self {
            id: RuntimeId::new(),
            kind,
            decorated_by: None,
        }
    }

    pub fn id(&self) -> RuntimeId {
        self.id
    }

    pub fn kind(&self) -> RuntimeKind {
        self.kind
    }

    pub fn is_ui(&self) -> bool {
        self.kind == RuntimeKind::Ui
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated_by.is_some()
    }

    pub fn decorated_by(&self) -> Option<&'static str> {
        self.decorated_by
    }

    pub(crate) fn mark_decorated(&mut self, variant: &'static str) {
        self.decorated_by = Some(variant);
    }
}
