use crate::runtime::{arg, FromRuntimeValue, Function, IntoRuntimeValue, RuntimeException, RuntimeValue, ScriptRuntime};

/// A named, native-backed callable ready to be installed into a UI runtime.
///
/// The typed constructors (`nullary` .. `quaternary`) wrap a native host operation with the
/// argument decoding and result encoding it needs. Host failures become
/// [`RuntimeException::Host`] and travel back to the calling script untouched.
#[derive(Debug, Clone)]
pub struct BridgeFunction {
    name: &'static str,
    function: Function,
}

impl BridgeFunction {
    pub fn new<F>(name: &'static str, shim: F) -> Self
    where
        F: Fn(&mut ScriptRuntime, &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> + Send + Sync + 'static,
    {
        Self {
            name,
            function: Function::new(name, shim),
        }
    }

    pub fn nullary<R, F>(name: &'static str, native: F) -> Self
    where
        R: IntoRuntimeValue,
        F: Fn() -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self::new(name, move |_rt, _args| Ok(native()?.into_runtime_value()))
    }

    pub fn unary<A, R, F>(name: &'static str, native: F) -> Self
    where
        A: FromRuntimeValue,
        R: IntoRuntimeValue,
        F: Fn(A) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self::new(name, move |_rt, args| {
            let a = arg::<A>(args, 0)?;
            Ok(native(a)?.into_runtime_value())
        })
    }

    pub fn binary<A, B, R, F>(name: &'static str, native: F) -> Self
    where
        A: FromRuntimeValue,
        B: FromRuntimeValue,
        R: IntoRuntimeValue,
        F: Fn(A, B) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self::new(name, move |_rt, args| {
            let a = arg::<A>(args, 0)?;
            let b = arg::<B>(args, 1)?;
            Ok(native(a, b)?.into_runtime_value())
        })
    }

    pub fn ternary<A, B, C, R, F>(name: &'static str, native: F) -> Self
    where
        A: FromRuntimeValue,
        B: FromRuntimeValue,
        C: FromRuntimeValue,
        R: IntoRuntimeValue,
        F: Fn(A, B, C) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self::new(name, move |_rt, args| {
            let a = arg::<A>(args, 0)?;
            let b = arg::<B>(args, 1)?;
            let c = arg::<C>(args, 2)?;
            Ok(native(a, b, c)?.into_runtime_value())
        })
    }

    pub fn quaternary<A, B, C, D, R, F>(name: &'static str, native: F) -> Self
    where
        A: FromRuntimeValue,
        B: FromRuntimeValue,
        C: FromRuntimeValue,
        D: FromRuntimeValue,
        R: IntoRuntimeValue,
        F: Fn(A, B, C, D) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self::new(name, move |_rt, args| {
            let a = arg::<A>(args, 0)?;
            let b = arg::<B>(args, 1)?;
            let c = arg::<C>(args, 2)?;
            let d = arg::<D>(args, 3)?;
            Ok(native(a, b, c, d)?.into_runtime_value())
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Call the shim directly, without going through a runtime's global scope.
    pub fn invoke(&self, runtime: &mut ScriptRuntime, args: &[RuntimeValue]) -> Result<RuntimeValue, RuntimeException> {
        self.function.call(runtime, args)
    }

    pub(crate) fn install(self, runtime: &mut ScriptRuntime) {
        runtime.set_global(self.name, self.function);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[test]
    fn typed_shim_decodes_and_encodes() {
        let add = BridgeFunction::binary("add", |a: f64, b: f64| Ok(a + b));
        let mut rt = ScriptRuntime::new_ui();

        let result = add.invoke(&mut rt, &[RuntimeValue::from(1.5), RuntimeValue::from(2.0)]).unwrap();
        assert_eq!(result, RuntimeValue::Number(3.5));
    }

    #[test]
    fn unit_results_read_as_undefined() {
        let noop = BridgeFunction::nullary("noop", || Ok(()));
        let mut rt = ScriptRuntime::new_ui();

        assert!(noop.invoke(&mut rt, &[]).unwrap().is_undefined());
    }

    #[test]
    fn host_failures_surface_as_runtime_exceptions() {
        let measure = BridgeFunction::unary("measure", |tag: i32| -> anyhow::Result<f64> {
            bail!("view {tag} is detached")
        });
        let mut rt = ScriptRuntime::new_ui();

        let err = measure.invoke(&mut rt, &[RuntimeValue::from(3)]).unwrap_err();
        assert_eq!(err, RuntimeException::Host("view 3 is detached".into()));
    }

    #[test]
    fn bad_arguments_never_reach_the_host() {
        let called = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = called.clone();
        let shim = BridgeFunction::unary("f", move |_tag: i32| {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        });
        let mut rt = ScriptRuntime::new_ui();

        assert!(matches!(
            shim.invoke(&mut rt, &[RuntimeValue::from("x")]),
            Err(RuntimeException::TypeError(_))
        ));
        assert!(!called.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn install_exposes_the_shim_by_name() {
        let mut rt = ScriptRuntime::new_ui();
        BridgeFunction::nullary("_getAnimationTimestamp", || Ok(16.0)).install(&mut rt);

        assert_eq!(rt.call_global("_getAnimationTimestamp", &[]).unwrap(), RuntimeValue::Number(16.0));
    }
}
