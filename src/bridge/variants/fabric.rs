use crate::bridge::host::{
    DispatchCommandFabricFunction, MeasureFabricFunction, ObtainPropFabricFunction, RemoveFromPropsRegistryFunction,
    UpdatePropsFabricFunction, OBTAIN_PROP,
};
use crate::bridge::{Addressing, BridgeFunction, RendererVariant};
use crate::runtime::{arg, NodeHandle, Object, RuntimeValue};

pub const UPDATE_PROPS: &str = "_updatePropsFabric";
pub const REMOVE_FROM_PROPS_REGISTRY: &str = "_removeFromPropsRegistry";
pub const DISPATCH_COMMAND: &str = "_dispatchCommandFabric";
pub const MEASURE: &str = "_measureFabric";

/// Host operations of the new (tree-diffing) renderer.
#[derive(Clone)]
pub struct FabricHostOperations {
    pub update_props: UpdatePropsFabricFunction,
    pub remove_from_props_registry: RemoveFromPropsRegistryFunction,
    pub dispatch_command: DispatchCommandFabricFunction,
    pub measure: MeasureFabricFunction,
    pub obtain_prop: ObtainPropFabricFunction,
}

/// New architecture variant. Every operation is addressed by an opaque [`NodeHandle`].
pub struct FabricVariant {
    ops: FabricHostOperations,
}

impl FabricVariant {
    pub fn new(ops: FabricHostOperations) -> Self {
        Self { ops }
    }
}

impl RendererVariant for FabricVariant {
    fn name(&self) -> &'static str {
        "fabric"
    }

    fn addressing(&self) -> Addressing {
        Addressing::NodeHandle
    }

    fn bridge_functions(&self) -> Vec<BridgeFunction> {
        let update_props = self.ops.update_props.clone();
        let remove_from_props_registry = self.ops.remove_from_props_registry.clone();
        let dispatch_command = self.ops.dispatch_command.clone();
        let measure = self.ops.measure.clone();
        let obtain_prop = self.ops.obtain_prop.clone();

        vec![
            BridgeFunction::binary(UPDATE_PROPS, move |node: NodeHandle, props: Object| update_props(node, props)),
            BridgeFunction::unary(REMOVE_FROM_PROPS_REGISTRY, move |node: NodeHandle| remove_from_props_registry(node)),
            BridgeFunction::ternary(DISPATCH_COMMAND, move |node: NodeHandle, command: String, args: RuntimeValue| {
                dispatch_command(node, command, args)
            }),
            BridgeFunction::unary(MEASURE, move |node: NodeHandle| measure(node)),
            BridgeFunction::new(OBTAIN_PROP, move |rt, args| {
                let node = arg::<NodeHandle>(args, 0)?;
                let prop_name = arg::<String>(args, 1)?;
                Ok(obtain_prop(rt, node, prop_name)?)
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, NullHost};
    use crate::runtime::{RuntimeException, ScriptRuntime};

    fn installed(host: &NullHost) -> ScriptRuntime {
        let mut rt = ScriptRuntime::new_ui();
        for function in host.fabric_variant().bridge_functions() {
            function.install(&mut rt);
        }
        rt
    }

    #[test]
    fn installs_node_handle_addressed_functions() {
        let host = NullHost::new();
        let variant = host.fabric_variant();
        assert_eq!(variant.addressing(), Addressing::NodeHandle);

        let names: Vec<_> = variant.bridge_functions().iter().map(BridgeFunction::name).collect();
        assert_eq!(names, vec![UPDATE_PROPS, REMOVE_FROM_PROPS_REGISTRY, DISPATCH_COMMAND, MEASURE, OBTAIN_PROP]);
    }

    #[test]
    fn forwards_to_the_host_by_node_handle() {
        let host = NullHost::new();
        let mut rt = installed(&host);
        let node = NodeHandle::new(5);

        let mut props = Object::new();
        props.set_property("opacity", 0.5);

        rt.call_global(UPDATE_PROPS, &[node.into(), props.clone().into()]).unwrap();
        rt.call_global(DISPATCH_COMMAND, &[node.into(), "focus".into(), RuntimeValue::Array(vec![])])
            .unwrap();
        rt.call_global(REMOVE_FROM_PROPS_REGISTRY, &[node.into()]).unwrap();

        assert_eq!(
            host.calls(),
            vec![
                HostCall::UpdatePropsFabric { node, props },
                HostCall::DispatchCommandFabric { node, command: "focus".into(), args: RuntimeValue::Array(vec![]) },
                HostCall::RemoveFromPropsRegistry { node },
            ]
        );
    }

    #[test]
    fn measure_and_obtain_prop_return_runtime_values() {
        let host = NullHost::new();
        let mut rt = installed(&host);
        let node = NodeHandle::new(9);

        let mut props = Object::new();
        props.set_property("backgroundColor", "red");
        rt.call_global(UPDATE_PROPS, &[node.into(), props.into()]).unwrap();

        let measured = rt.call_global(MEASURE, &[node.into()]).unwrap();
        assert!(measured.as_object().is_some_and(|o| o.has_property("width")));

        let prop = rt.call_global(OBTAIN_PROP, &[node.into(), "backgroundColor".into()]).unwrap();
        assert_eq!(prop, RuntimeValue::from("red"));
    }

    #[test]
    fn view_tags_are_rejected() {
        let host = NullHost::new();
        let mut rt = installed(&host);

        let err = rt.call_global(MEASURE, &[RuntimeValue::from(5)]).unwrap_err();
        assert!(matches!(err, RuntimeException::TypeError(_)));
        assert!(host.calls().is_empty());
    }
}
