use std::fmt::Debug;
use std::sync::Arc;
use indexmap::IndexMap;
use crate::runtime::{RuntimeException, ScriptRuntime};

/// Signature of every callable living in a runtime.
pub type NativeFunction =
    dyn Fn(&mut ScriptRuntime, &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> + Send + Sync;

/// Callable runtime value. Cloning shares the underlying function.
#[derive(Clone)]
pub struct Function {
    name: String,
    body: Arc<NativeFunction>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut ScriptRuntime, &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, runtime: &mut ScriptRuntime, args: &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> {
        (self.body)(runtime, args)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Function {}]", self.name)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

/// Opaque reference to a shadow-tree node (new architecture). Script code can pass it around but
/// never look inside.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeHandle(u64);

impl NodeHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Keyed runtime object. Keeps insertion order so results read back in the order they were built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    properties: IndexMap<String, RuntimeValue>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            properties: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets a property, replacing any previous value under the same key in place.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<RuntimeValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn get_property(&self, key: &str) -> Option<&RuntimeValue> {
        self.properties.get(key)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get_property(key).and_then(RuntimeValue::as_number)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuntimeValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<RuntimeValue>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.set_property(key, value);
        }
        object
    }
}

/// A value as seen from script code.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RuntimeValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(Object),
    Array(Vec<RuntimeValue>),
    Function(Function),
    NodeHandle(NodeHandle),
}

impl RuntimeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            RuntimeValue::Undefined => "undefined",
            RuntimeValue::Null => "null",
            RuntimeValue::Bool(_) => "boolean",
            RuntimeValue::Number(_) => "number",
            RuntimeValue::String(_) => "string",
            RuntimeValue::Object(_) => "object",
            RuntimeValue::Array(_) => "array",
            RuntimeValue::Function(_) => "function",
            RuntimeValue::NodeHandle(_) => "node handle",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, RuntimeValue::Undefined)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RuntimeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RuntimeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuntimeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            RuntimeValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            RuntimeValue::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_node_handle(&self) -> Option<NodeHandle> {
        match self {
            RuntimeValue::NodeHandle(h) => Some(*h),
            _ => None,
        }
    }
}

impl From<f64> for RuntimeValue {
    fn from(n: f64) -> Self {
        RuntimeValue::Number(n)
    }
}

impl From<i32> for RuntimeValue {
    fn from(n: i32) -> Self {
        RuntimeValue::Number(n as f64)
    }
}

impl From<bool> for RuntimeValue {
    fn from(b: bool) -> Self {
        RuntimeValue::Bool(b)
    }
}

impl From<&str> for RuntimeValue {
    fn from(s: &str) -> Self {
        RuntimeValue::String(s.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(s: String) -> Self {
        RuntimeValue::String(s)
    }
}

impl From<Object> for RuntimeValue {
    fn from(o: Object) -> Self {
        RuntimeValue::Object(o)
    }
}

impl From<Vec<RuntimeValue>> for RuntimeValue {
    fn from(items: Vec<RuntimeValue>) -> Self {
        RuntimeValue::Array(items)
    }
}

impl From<Function> for RuntimeValue {
    fn from(f: Function) -> Self {
        RuntimeValue::Function(f)
    }
}

impl From<NodeHandle> for RuntimeValue {
    fn from(h: NodeHandle) -> Self {
        RuntimeValue::NodeHandle(h)
    }
}

/// Diagnostic JSON view of a runtime value. Functions and node handles have no JSON form and are
/// rendered as descriptive strings.
impl From<&RuntimeValue> for serde_json::Value {
    fn from(value: &RuntimeValue) -> Self {
        match value {
            RuntimeValue::Undefined | RuntimeValue::Null => serde_json::Value::Null,
            RuntimeValue::Bool(b) => serde_json::Value::Bool(*b),
            RuntimeValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            RuntimeValue::String(s) => serde_json::Value::String(s.clone()),
            RuntimeValue::Object(o) => serde_json::Value::from(o),
            RuntimeValue::Array(items) => serde_json::Value::Array(items.iter().map(Into::into).collect()),
            RuntimeValue::Function(f) => serde_json::Value::String(format!("{f:?}")),
            RuntimeValue::NodeHandle(h) => serde_json::Value::String(format!("[NodeHandle {}]", h.raw())),
        }
    }
}

impl From<&Object> for serde_json::Value {
    fn from(object: &Object) -> Self {
        serde_json::Value::Object(object.iter().map(|(k, v)| (k.to_string(), v.into())).collect())
    }
}
