use crate::runtime::{Object, RuntimeContext, RuntimeException, RuntimeId, RuntimeKind, RuntimeValue};

/// Global flag telling script code it runs inside the UI-thread runtime.
pub const UI_MARKER: &str = "_UI";

/// A script runtime: a global scope plus the context it was created with.
///
/// Runtimes are single threaded. The UI runtime is created on, and never leaves, the UI thread.
#[derive(Debug)]
pub struct ScriptRuntime {
    context: RuntimeContext,
    global: Object,
}

impl ScriptRuntime {
    pub fn new(kind: RuntimeKind) -> Self {
        Self {
            context: RuntimeContext::new(kind),
            global: Object::new(),
        }
    }

    pub fn new_ui() -> Self {
        Self::new(RuntimeKind::Ui)
    }

    pub fn new_main() -> Self {
        Self::new(RuntimeKind::Main)
    }

    pub fn id(&self) -> RuntimeId {
        self.context.id()
    }

    pub fn context(&self) -> &RuntimeContext {
        &self.context
    }

    pub(crate) fn context_mut(&mut self) -> &mut RuntimeContext {
        &mut self.context
    }

    pub fn global(&self) -> &Object {
        &self.global
    }

    pub fn set_global(&mut self, name: impl Into<String>, value: impl Into<RuntimeValue>) {
        self.global.set_property(name, value);
    }

    pub fn get_global(&self, name: &str) -> Option<&RuntimeValue> {
        self.global.get_property(name)
    }

    /// True when the `_UI` marker reads as `true` in this runtime's global scope.
    pub fn is_ui_runtime(&self) -> bool {
        matches!(self.get_global(UI_MARKER), Some(RuntimeValue::Bool(true)))
    }

    /// Call a function value with the given arguments.
    pub fn call_function(&mut self, callee: &RuntimeValue, args: &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> {
        let function = callee
            .as_function()
            .cloned()
            .ok_or_else(|| RuntimeException::TypeError(format!("{} is not a function", callee.type_name())))?;

        function.call(self, args)
    }

    /// Look up a global by name and call it.
    pub fn call_global(&mut self, name: &str, args: &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> {
        let callee = self
            .get_global(name)
            .cloned()
            .ok_or_else(|| RuntimeException::ReferenceError(name.to_string()))?;

        match callee {
            RuntimeValue::Function(function) => function.call(self, args),
            _ => Err(RuntimeException::TypeError(format!("{name} is not a function"))),
        }
    }
}
