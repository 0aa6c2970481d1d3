use std::fmt::Display;
use serde::{Deserialize, Serialize};
use crate::runtime::RuntimeValue;

/// Integer identifier of a rendered view. Uniqueness is not checked here.
pub type ViewTag = i32;

/// Frame of a view at a point in time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryValues {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GeometryValues {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Kind of layout animation. Numeric codes match what the script-side manager expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimationKind {
    Entering = 1,
    Exiting = 2,
    Layout = 3,
    SharedElementTransition = 4,
    SharedElementTransitionProgress = 5,
}

impl AnimationKind {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for AnimationKind {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(AnimationKind::Entering),
            2 => Ok(AnimationKind::Exiting),
            3 => Ok(AnimationKind::Layout),
            4 => Ok(AnimationKind::SharedElementTransition),
            5 => Ok(AnimationKind::SharedElementTransitionProgress),
            other => Err(other),
        }
    }
}

impl Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationKind::Entering => write!(f, "ENTERING"),
            AnimationKind::Exiting => write!(f, "EXITING"),
            AnimationKind::Layout => write!(f, "LAYOUT"),
            AnimationKind::SharedElementTransition => write!(f, "SHARED_ELEMENT_TRANSITION"),
            AnimationKind::SharedElementTransitionProgress => write!(f, "SHARED_ELEMENT_TRANSITION_PROGRESS"),
        }
    }
}

impl From<AnimationKind> for RuntimeValue {
    fn from(kind: AnimationKind) -> Self {
        RuntimeValue::Number(kind.code() as f64)
    }
}

/// Geometry carried by a start request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnimationPayload {
    /// One snapshot (entering, exiting, ...)
    Single(GeometryValues),
    /// Current and target snapshots of a layout transition
    Transition { current: GeometryValues, target: GeometryValues },
}

/// A fully owned start request. Everything is `Copy`, so posting one to the UI thread copies the
/// caller's snapshot rather than sharing it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationRequest {
    pub tag: ViewTag,
    pub kind: AnimationKind,
    pub payload: AnimationPayload,
}
