use crate::bridge::{CommonHostOperations, RendererVariant};
use crate::errors::BridgeError;
use crate::runtime::{ScriptRuntime, UI_MARKER};

/// Install the bridge into a UI runtime.
///
/// Sets the `_UI` marker first, then installs the variant's bridge functions followed by the
/// common ones. Must run once per UI runtime, on the UI thread, before any animation manager code.
/// A second call on the same runtime fails with [`BridgeError::AlreadyDecorated`] and leaves the
/// runtime untouched, as does decorating a main runtime.
pub fn decorate(
    runtime: &mut ScriptRuntime,
    variant: &dyn RendererVariant,
    common: &CommonHostOperations,
) -> Result<(), BridgeError> {
    if !runtime.context().is_ui() {
        return Err(BridgeError::NotUiRuntime(runtime.id()));
    }
    if runtime.context().is_decorated() {
        return Err(BridgeError::AlreadyDecorated(runtime.id()));
    }

    runtime.set_global(UI_MARKER, true);

    for function in variant.bridge_functions().into_iter().chain(common.bridge_functions()) {
        log::debug!("Installing {} into UI runtime {}", function.name(), runtime.id());
        function.install(runtime);
    }

    runtime.context_mut().mark_decorated(variant.name());
    log::info!("UI runtime {} decorated for the {} renderer", runtime.id(), variant.name());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::host::{
        GET_ANIMATION_TIMESTAMP, MAYBE_FLUSH_UI_UPDATES_QUEUE, NOTIFY_ABOUT_END, NOTIFY_ABOUT_PROGRESS, OBTAIN_PROP,
        REQUEST_ANIMATION_FRAME, SET_GESTURE_STATE,
    };
    use crate::host::{HostCall, NullHost};
    use crate::runtime::{Object, RuntimeException, RuntimeValue};

    const COMMON: [&str; 7] = [
        REQUEST_ANIMATION_FRAME,
        GET_ANIMATION_TIMESTAMP,
        NOTIFY_ABOUT_PROGRESS,
        NOTIFY_ABOUT_END,
        SET_GESTURE_STATE,
        MAYBE_FLUSH_UI_UPDATES_QUEUE,
        OBTAIN_PROP,
    ];

    #[cfg(feature = "fabric")]
    #[test]
    fn fabric_decoration_installs_marker_and_catalog() {
        use crate::bridge::variants::fabric;

        let host = NullHost::new();
        let mut rt = ScriptRuntime::new_ui();
        decorate(&mut rt, &host.fabric_variant(), &host.common_operations()).unwrap();

        assert!(rt.is_ui_runtime());
        assert_eq!(rt.context().decorated_by(), Some("fabric"));
        for name in [fabric::UPDATE_PROPS, fabric::REMOVE_FROM_PROPS_REGISTRY, fabric::DISPATCH_COMMAND, fabric::MEASURE]
            .into_iter()
            .chain(COMMON)
        {
            assert!(rt.get_global(name).and_then(RuntimeValue::as_function).is_some(), "{name}");
        }
        assert!(rt.get_global("_scrollToPaper").is_none());
        assert!(rt.get_global("_measurePaper").is_none());
    }

    #[cfg(feature = "paper")]
    #[test]
    fn paper_decoration_installs_marker_and_catalog() {
        use crate::bridge::variants::paper;

        let host = NullHost::new();
        let mut rt = ScriptRuntime::new_ui();
        decorate(&mut rt, &host.paper_variant(), &host.common_operations()).unwrap();

        assert!(rt.is_ui_runtime());
        for name in [paper::UPDATE_PROPS, paper::DISPATCH_COMMAND, paper::SCROLL_TO, paper::MEASURE]
            .into_iter()
            .chain(COMMON)
        {
            assert!(rt.get_global(name).and_then(RuntimeValue::as_function).is_some(), "{name}");
        }
        assert!(rt.get_global("_removeFromPropsRegistry").is_none());
        assert!(rt.get_global("_measureFabric").is_none());
    }

    #[cfg(feature = "paper")]
    #[test]
    fn second_decoration_is_rejected() {
        let host = NullHost::new();
        let mut rt = ScriptRuntime::new_ui();
        decorate(&mut rt, &host.paper_variant(), &host.common_operations()).unwrap();
        let installed = rt.global().len();

        let err = decorate(&mut rt, &host.paper_variant(), &host.common_operations()).unwrap_err();
        assert!(matches!(err, BridgeError::AlreadyDecorated(id) if id == rt.id()));
        assert_eq!(rt.global().len(), installed);
    }

    #[cfg(feature = "paper")]
    #[test]
    fn main_runtime_is_never_marked() {
        let host = NullHost::new();
        let mut main = ScriptRuntime::new_main();

        let err = decorate(&mut main, &host.paper_variant(), &host.common_operations()).unwrap_err();
        assert!(matches!(err, BridgeError::NotUiRuntime(_)));
        assert!(!main.is_ui_runtime());
        assert!(main.global().is_empty());
    }

    #[test]
    fn bridge_calls_before_decoration_are_reference_errors() {
        let mut rt = ScriptRuntime::new_ui();
        let err = rt.call_global(NOTIFY_ABOUT_END, &[RuntimeValue::from(1), false.into(), true.into()]).unwrap_err();
        assert_eq!(err, RuntimeException::ReferenceError(NOTIFY_ABOUT_END.into()));
    }

    #[cfg(feature = "paper")]
    #[test]
    fn common_functions_forward_to_the_host() {
        let host = NullHost::new();
        let mut rt = ScriptRuntime::new_ui();
        decorate(&mut rt, &host.paper_variant(), &host.common_operations()).unwrap();

        let mut progress = Object::new();
        progress.set_property("opacity", 0.25);

        rt.call_global(NOTIFY_ABOUT_PROGRESS, &[RuntimeValue::from(4), progress.clone().into(), false.into()])
            .unwrap();
        rt.call_global(NOTIFY_ABOUT_END, &[RuntimeValue::from(4), false.into(), true.into()]).unwrap();
        rt.call_global(SET_GESTURE_STATE, &[RuntimeValue::from(11), RuntimeValue::from(4)]).unwrap();
        rt.call_global(MAYBE_FLUSH_UI_UPDATES_QUEUE, &[]).unwrap();

        assert_eq!(
            host.calls(),
            vec![
                HostCall::NotifyProgress { tag: 4, values: progress, is_shared_transition: false },
                HostCall::NotifyEnd { tag: 4, is_cancelled: false, remove_view: true },
                HostCall::SetGestureState { handler_tag: 11, new_state: 4 },
                HostCall::FlushUiUpdatesQueue,
            ]
        );
    }
}
