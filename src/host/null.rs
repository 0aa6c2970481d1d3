use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use anyhow::{anyhow, bail, Result};
use crate::animation::{GeometryValues, ViewTag};
use crate::bridge::{CommonHostOperations, FrameCallbacks};
use crate::runtime::{NodeHandle, Object, RuntimeValue, ScriptRuntime};

#[cfg(feature = "fabric")]
use crate::bridge::{FabricHostOperations, FabricVariant};
#[cfg(feature = "paper")]
use crate::bridge::{PaperHostOperations, PaperVariant};

/// A host operation as received by [`NullHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    UpdatePropsFabric { node: NodeHandle, props: Object },
    RemoveFromPropsRegistry { node: NodeHandle },
    DispatchCommandFabric { node: NodeHandle, command: String, args: RuntimeValue },
    MeasureFabric { node: NodeHandle },
    ObtainPropFabric { node: NodeHandle, prop_name: String },
    UpdatePropsPaper { tag: ViewTag, view_name: String, props: Object },
    DispatchCommandPaper { tag: ViewTag, command: String, args: RuntimeValue },
    ScrollTo { tag: ViewTag, x: f64, y: f64, animated: bool },
    MeasurePaper { tag: ViewTag },
    ObtainPropPaper { tag: ViewTag, prop_name: String },
    NotifyProgress { tag: ViewTag, values: Object, is_shared_transition: bool },
    NotifyEnd { tag: ViewTag, is_cancelled: bool, remove_view: bool },
    SetGestureState { handler_tag: i32, new_state: i32 },
    FlushUiUpdatesQueue,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum ViewKey {
    Node(NodeHandle),
    Tag(ViewTag),
}

impl std::fmt::Display for ViewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKey::Node(node) => write!(f, "node {}", node.raw()),
            ViewKey::Tag(tag) => write!(f, "view {}", tag),
        }
    }
}

#[derive(Debug, Default)]
struct HostState {
    calls: Vec<HostCall>,
    props: HashMap<ViewKey, Object>,
    detached: HashSet<ViewKey>,
}

/// Host integration that does not render anything.
///
/// Every operation is recorded, props written through update-props can be read back through
/// obtain-prop, and every view measures as the same configured frame. Operations on a view marked
/// detached fail the way a real host would.
#[derive(Debug, Clone, Default)]
pub struct NullHost {
    state: Arc<Mutex<HostState>>,
    measurement: GeometryValues,
    frames: FrameCallbacks,
}

impl NullHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose views all measure as `measurement`.
    pub fn with_measurement(measurement: GeometryValues) -> Self {
        Self {
            measurement,
            ..Self::default()
        }
    }

    /// Every operation received so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().map(|s| s.calls.clone()).unwrap_or_default()
    }

    /// Frame callback queue behind this host's `requestAnimationFrame`.
    pub fn frames(&self) -> FrameCallbacks {
        self.frames.clone()
    }

    pub fn detach_view(&self, tag: ViewTag) {
        if let Ok(mut state) = self.state.lock() {
            state.detached.insert(ViewKey::Tag(tag));
        }
    }

    pub fn detach_node(&self, node: NodeHandle) {
        if let Ok(mut state) = self.state.lock() {
            state.detached.insert(ViewKey::Node(node));
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HostState>> {
        self.state.lock().map_err(|_| anyhow!("host state poisoned"))
    }

    /// Record the call, then fail if it targets a detached view.
    fn record(&self, call: HostCall, target: Option<ViewKey>) -> Result<MutexGuard<'_, HostState>> {
        let mut state = self.lock()?;
        state.calls.push(call);
        if let Some(key) = target {
            if state.detached.contains(&key) {
                bail!("{} is detached", key);
            }
        }
        Ok(state)
    }

    /// Same as [`NullHost::record`] for calls that do not touch the prop store.
    fn log_call(&self, call: HostCall, target: Option<ViewKey>) -> Result<()> {
        self.record(call, target).map(drop)
    }

    fn update_props(&self, key: ViewKey, props: Object, call: HostCall) -> Result<()> {
        let mut state = self.record(call, Some(key))?;
        let stored = state.props.entry(key).or_default();
        for (name, value) in props.iter() {
            stored.set_property(name, value.clone());
        }
        Ok(())
    }

    fn obtain_prop(&self, key: ViewKey, prop_name: &str, call: HostCall) -> Result<RuntimeValue> {
        let state = self.record(call, Some(key))?;
        Ok(state
            .props
            .get(&key)
            .and_then(|props| props.get_property(prop_name))
            .cloned()
            .unwrap_or_default())
    }

    fn measurement_pairs(&self) -> Vec<(String, f64)> {
        let m = self.measurement;
        vec![
            ("x".to_string(), m.x),
            ("y".to_string(), m.y),
            ("width".to_string(), m.width),
            ("height".to_string(), m.height),
            ("pageX".to_string(), m.x),
            ("pageY".to_string(), m.y),
        ]
    }

    /// Operations installed under every variant. `requestAnimationFrame` and
    /// `_getAnimationTimestamp` are served by [`NullHost::frames`].
    pub fn common_operations(&self) -> CommonHostOperations {
        let progress = self.clone();
        let end = self.clone();
        let gesture = self.clone();
        let flush = self.clone();

        CommonHostOperations {
            request_animation_frame: self.frames.request_animation_frame_function(),
            get_animation_timestamp: self.frames.animation_timestamp_function(),
            progress_layout_animation: Arc::new(move |tag: ViewTag, values: Object, is_shared_transition: bool| -> Result<()> {
                progress.log_call(HostCall::NotifyProgress { tag, values, is_shared_transition }, Some(ViewKey::Tag(tag)))?;
                Ok(())
            }),
            end_layout_animation: Arc::new(move |tag: ViewTag, is_cancelled: bool, remove_view: bool| -> Result<()> {
                end.log_call(HostCall::NotifyEnd { tag, is_cancelled, remove_view }, None)?;
                Ok(())
            }),
            set_gesture_state: Arc::new(move |handler_tag: i32, new_state: i32| -> Result<()> {
                gesture.log_call(HostCall::SetGestureState { handler_tag, new_state }, None)?;
                Ok(())
            }),
            maybe_flush_ui_updates_queue: Arc::new(move || -> Result<()> {
                flush.log_call(HostCall::FlushUiUpdatesQueue, None)?;
                Ok(())
            }),
        }
    }

    #[cfg(feature = "fabric")]
    pub fn fabric_operations(&self) -> FabricHostOperations {
        let update = self.clone();
        let remove = self.clone();
        let dispatch = self.clone();
        let measure = self.clone();
        let obtain = self.clone();

        FabricHostOperations {
            update_props: Arc::new(move |node: NodeHandle, props: Object| -> Result<()> {
                let call = HostCall::UpdatePropsFabric { node, props: props.clone() };
                update.update_props(ViewKey::Node(node), props, call)
            }),
            remove_from_props_registry: Arc::new(move |node: NodeHandle| -> Result<()> {
                let mut state = remove.record(HostCall::RemoveFromPropsRegistry { node }, None)?;
                state.props.remove(&ViewKey::Node(node));
                Ok(())
            }),
            dispatch_command: Arc::new(move |node: NodeHandle, command: String, args: RuntimeValue| -> Result<()> {
                dispatch.log_call(HostCall::DispatchCommandFabric { node, command, args }, Some(ViewKey::Node(node)))?;
                Ok(())
            }),
            measure: Arc::new(move |node: NodeHandle| -> Result<Object> {
                measure.log_call(HostCall::MeasureFabric { node }, Some(ViewKey::Node(node)))?;
                Ok(measure.measurement_pairs().into_iter().collect())
            }),
            obtain_prop: Arc::new(move |_rt: &mut ScriptRuntime, node: NodeHandle, prop_name: String| -> Result<RuntimeValue> {
                let call = HostCall::ObtainPropFabric { node, prop_name: prop_name.clone() };
                obtain.obtain_prop(ViewKey::Node(node), &prop_name, call)
            }),
        }
    }

    #[cfg(feature = "fabric")]
    pub fn fabric_variant(&self) -> FabricVariant {
        FabricVariant::new(self.fabric_operations())
    }

    #[cfg(feature = "paper")]
    pub fn paper_operations(&self) -> PaperHostOperations {
        let update = self.clone();
        let dispatch = self.clone();
        let scroll = self.clone();
        let measure = self.clone();
        let obtain = self.clone();

        PaperHostOperations {
            update_props: Arc::new(move |tag: ViewTag, view_name: String, props: Object| -> Result<()> {
                let call = HostCall::UpdatePropsPaper { tag, view_name, props: props.clone() };
                update.update_props(ViewKey::Tag(tag), props, call)
            }),
            dispatch_command: Arc::new(move |tag: ViewTag, command: String, args: RuntimeValue| -> Result<()> {
                dispatch.log_call(HostCall::DispatchCommandPaper { tag, command, args }, Some(ViewKey::Tag(tag)))?;
                Ok(())
            }),
            scroll_to: Arc::new(move |tag: ViewTag, x: f64, y: f64, animated: bool| -> Result<()> {
                scroll.log_call(HostCall::ScrollTo { tag, x, y, animated }, Some(ViewKey::Tag(tag)))?;
                Ok(())
            }),
            measure: Arc::new(move |tag: ViewTag| -> Result<Vec<(String, f64)>> {
                measure.log_call(HostCall::MeasurePaper { tag }, Some(ViewKey::Tag(tag)))?;
                Ok(measure.measurement_pairs())
            }),
            obtain_prop: Arc::new(move |_rt: &mut ScriptRuntime, tag: ViewTag, prop_name: String| -> Result<RuntimeValue> {
                let call = HostCall::ObtainPropPaper { tag, prop_name: prop_name.clone() };
                obtain.obtain_prop(ViewKey::Tag(tag), &prop_name, call)
            }),
        }
    }

    #[cfg(feature = "paper")]
    pub fn paper_variant(&self) -> PaperVariant {
        PaperVariant::new(self.paper_operations())
    }
}
