// src/runtime.rs
//! Script runtime model: [`ScriptRuntime`], [`RuntimeValue`] and [`RuntimeContext`].
//!
//! A [`ScriptRuntime`] is either the main application runtime or the UI-thread runtime. Only the
//! UI runtime gets decorated with bridge functions, and only it carries the `_UI` marker.

pub mod context;
pub mod convert;
pub mod exception;
pub mod script_runtime;
pub mod value;

pub use context::{RuntimeContext, RuntimeId, RuntimeKind};
pub use convert::{arg, FromRuntimeValue, IntoRuntimeValue};
pub use exception::RuntimeException;
pub use script_runtime::{ScriptRuntime, UI_MARKER};
pub use value::{Function, NodeHandle, Object, RuntimeValue};
