use std::collections::HashMap;
use crate::animation::{AnimationKind, ViewTag};
use crate::runtime::{Object, RuntimeException, RuntimeValue, ScriptRuntime};

/// Global object through which the script side exposes its layout animation entry point.
pub const SCRIPT_MANAGER_GLOBAL: &str = "LayoutAnimationsManager";
const SCRIPT_START_FUNCTION: &str = "start";

/// Receives layout animation starts on the UI thread. Decides curves and timing; this crate only
/// delivers the request.
pub trait LayoutAnimationsManager: Send {
    fn start_layout_animation(
        &mut self,
        runtime: &mut ScriptRuntime,
        tag: ViewTag,
        kind: AnimationKind,
        values: Object,
    ) -> Result<(), RuntimeException>;
}

/// Manager backed by a registry of per-view animation configs.
///
/// Starting an animation for a view without a config for that kind is a no-op. Otherwise the
/// script-side `LayoutAnimationsManager.start(tag, kind, values, config)` is invoked in the UI
/// runtime.
#[derive(Debug, Default)]
pub struct DefaultLayoutAnimationsManager {
    configs: HashMap<(ViewTag, AnimationKind), RuntimeValue>,
}

impl DefaultLayoutAnimationsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the animation config for a view and kind, replacing any previous one.
    pub fn configure_animation(&mut self, tag: ViewTag, kind: AnimationKind, config: RuntimeValue) {
        self.configs.insert((tag, kind), config);
    }

    /// Forget every config registered for a view.
    pub fn clear_animation_config(&mut self, tag: ViewTag) {
        self.configs.retain(|(t, _), _| *t != tag);
    }

    pub fn has_layout_animation(&self, tag: ViewTag, kind: AnimationKind) -> bool {
        self.configs.contains_key(&(tag, kind))
    }
}

impl LayoutAnimationsManager for DefaultLayoutAnimationsManager {
    fn start_layout_animation(
        &mut self,
        runtime: &mut ScriptRuntime,
        tag: ViewTag,
        kind: AnimationKind,
        values: Object,
    ) -> Result<(), RuntimeException> {
        let Some(config) = self.configs.get(&(tag, kind)).cloned() else {
            log::debug!("No {} animation configured for view {}", kind, tag);
            return Ok(());
        };

        let start = runtime
            .get_global(SCRIPT_MANAGER_GLOBAL)
            .ok_or_else(|| RuntimeException::ReferenceError(SCRIPT_MANAGER_GLOBAL.to_string()))?
            .as_object()
            .and_then(|manager| manager.get_property(SCRIPT_START_FUNCTION))
            .cloned()
            .ok_or_else(|| {
                RuntimeException::TypeError(format!("{SCRIPT_MANAGER_GLOBAL}.{SCRIPT_START_FUNCTION} is not a function"))
            })?;

        runtime.call_function(&start, &[tag.into(), kind.into(), values.into(), config])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::runtime::Function;

    fn install_script_manager(rt: &mut ScriptRuntime) -> Arc<Mutex<Vec<Vec<RuntimeValue>>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut manager = Object::new();
        manager.set_property(
            SCRIPT_START_FUNCTION,
            Function::new("start", move |_rt, args| {
                sink.lock().unwrap().push(args.to_vec());
                Ok(RuntimeValue::Undefined)
            }),
        );
        rt.set_global(SCRIPT_MANAGER_GLOBAL, manager);
        seen
    }

    #[test]
    fn configured_animation_calls_script_start() {
        let mut rt = ScriptRuntime::new_ui();
        let seen = install_script_manager(&mut rt);

        let mut manager = DefaultLayoutAnimationsManager::new();
        manager.configure_animation(42, AnimationKind::Entering, RuntimeValue::from("fade-in"));

        let mut values = Object::new();
        values.set_property("originX", 1.0);
        manager
            .start_layout_animation(&mut rt, 42, AnimationKind::Entering, values.clone())
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            vec![
                RuntimeValue::Number(42.0),
                RuntimeValue::Number(1.0),
                RuntimeValue::Object(values),
                RuntimeValue::from("fade-in"),
            ]
        );
    }

    #[test]
    fn unconfigured_animation_is_a_no_op() {
        let mut rt = ScriptRuntime::new_ui();
        let seen = install_script_manager(&mut rt);

        let mut manager = DefaultLayoutAnimationsManager::new();
        manager.configure_animation(42, AnimationKind::Entering, RuntimeValue::Null);

        manager
            .start_layout_animation(&mut rt, 42, AnimationKind::Exiting, Object::new())
            .unwrap();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_script_manager_is_reported() {
        let mut rt = ScriptRuntime::new_ui();
        let mut manager = DefaultLayoutAnimationsManager::new();
        manager.configure_animation(1, AnimationKind::Layout, RuntimeValue::Null);

        let err = manager
            .start_layout_animation(&mut rt, 1, AnimationKind::Layout, Object::new())
            .unwrap_err();
        assert_eq!(err, RuntimeException::ReferenceError(SCRIPT_MANAGER_GLOBAL.into()));
    }

    #[test]
    fn clearing_removes_all_kinds_for_a_view() {
        let mut manager = DefaultLayoutAnimationsManager::new();
        manager.configure_animation(1, AnimationKind::Entering, RuntimeValue::Null);
        manager.configure_animation(1, AnimationKind::Exiting, RuntimeValue::Null);
        manager.configure_animation(2, AnimationKind::Entering, RuntimeValue::Null);

        manager.clear_animation_config(1);

        assert!(!manager.has_layout_animation(1, AnimationKind::Entering));
        assert!(!manager.has_layout_animation(1, AnimationKind::Exiting));
        assert!(manager.has_layout_animation(2, AnimationKind::Entering));
    }
}
