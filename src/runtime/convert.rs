//! Conversions between runtime values and the native types host operations work with.

use crate::runtime::{Function, NodeHandle, Object, RuntimeException, RuntimeValue};

/// Decode a native value from a runtime value.
pub trait FromRuntimeValue: Sized {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException>;
}

/// Encode a native value as a runtime value.
pub trait IntoRuntimeValue {
    fn into_runtime_value(self) -> RuntimeValue;
}

fn type_error(expected: &str, got: &RuntimeValue) -> RuntimeException {
    RuntimeException::TypeError(format!("expected {expected}, got {}", got.type_name()))
}

impl FromRuntimeValue for f64 {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        value.as_number().ok_or_else(|| type_error("number", value))
    }
}

/// View tags and gesture states travel as numbers. The fractional part is dropped; NaN, infinities
/// and values outside the `i32` range are rejected rather than saturated onto another view.
impl FromRuntimeValue for i32 {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        let n = value.as_number().ok_or_else(|| type_error("number", value))?.trunc();
        if !n.is_finite() || n < i32::MIN as f64 || n > i32::MAX as f64 {
            return Err(RuntimeException::TypeError(format!("expected 32-bit integer, got {n}")));
        }
        Ok(n as i32)
    }
}

impl FromRuntimeValue for bool {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        value.as_bool().ok_or_else(|| type_error("boolean", value))
    }
}

impl FromRuntimeValue for String {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        value.as_str().map(str::to_string).ok_or_else(|| type_error("string", value))
    }
}

impl FromRuntimeValue for NodeHandle {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        value.as_node_handle().ok_or_else(|| type_error("node handle", value))
    }
}

impl FromRuntimeValue for Object {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        value.as_object().cloned().ok_or_else(|| type_error("object", value))
    }
}

impl FromRuntimeValue for Function {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        value.as_function().cloned().ok_or_else(|| type_error("function", value))
    }
}

impl FromRuntimeValue for RuntimeValue {
    fn from_runtime_value(value: &RuntimeValue) -> Result<Self, RuntimeException> {
        Ok(value.clone())
    }
}

impl IntoRuntimeValue for () {
    fn into_runtime_value(self) -> RuntimeValue {
        RuntimeValue::Undefined
    }
}

macro_rules! into_runtime_value_via_from {
    ($($ty:ty),*) => {
        $(
            impl IntoRuntimeValue for $ty {
                fn into_runtime_value(self) -> RuntimeValue {
                    self.into()
                }
            }
        )*
    };
}

into_runtime_value_via_from!(f64, bool, String, Object, NodeHandle, RuntimeValue);

/// Decode argument `index`. Missing arguments read as `undefined`, like in script.
pub fn arg<T: FromRuntimeValue>(args: &[RuntimeValue], index: usize) -> Result<T, RuntimeException> {
    let value = args.get(index).unwrap_or(&RuntimeValue::Undefined);
    T::from_runtime_value(value).map_err(|e| match e {
        RuntimeException::TypeError(msg) => RuntimeException::TypeError(format!("argument {index}: {msg}")),
        other => other,
    })
}
