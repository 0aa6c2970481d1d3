use crate::animation::ViewTag;
use crate::bridge::host::{
    DispatchCommandPaperFunction, MeasurePaperFunction, ObtainPropPaperFunction, ScrollToFunction,
    UpdatePropsPaperFunction, OBTAIN_PROP,
};
use crate::bridge::{Addressing, BridgeFunction, RendererVariant};
use crate::runtime::{arg, Object, RuntimeValue};

pub const UPDATE_PROPS: &str = "_updatePropsPaper";
pub const DISPATCH_COMMAND: &str = "_dispatchCommandPaper";
pub const SCROLL_TO: &str = "_scrollToPaper";
pub const MEASURE: &str = "_measurePaper";

/// Host operations of the legacy renderer.
#[derive(Clone)]
pub struct PaperHostOperations {
    pub update_props: UpdatePropsPaperFunction,
    pub dispatch_command: DispatchCommandPaperFunction,
    pub scroll_to: ScrollToFunction,
    pub measure: MeasurePaperFunction,
    pub obtain_prop: ObtainPropPaperFunction,
}

/// Legacy architecture variant. Every operation is addressed by an integer view tag.
pub struct PaperVariant {
    ops: PaperHostOperations,
}

impl PaperVariant {
    pub fn new(ops: PaperHostOperations) -> Self {
        Self { ops }
    }
}

/// Reshape the native `(field, value)` measurement list into a runtime object, so script sees the
/// same object-shaped result under both variants.
pub fn measurement_to_object(measurement: Vec<(String, f64)>) -> Object {
    measurement.into_iter().collect()
}

impl RendererVariant for PaperVariant {
    fn name(&self) -> &'static str {
        "paper"
    }

    fn addressing(&self) -> Addressing {
        Addressing::ViewTag
    }

    fn bridge_functions(&self) -> Vec<BridgeFunction> {
        let update_props = self.ops.update_props.clone();
        let dispatch_command = self.ops.dispatch_command.clone();
        let scroll_to = self.ops.scroll_to.clone();
        let measure = self.ops.measure.clone();
        let obtain_prop = self.ops.obtain_prop.clone();

        vec![
            BridgeFunction::ternary(UPDATE_PROPS, move |tag: ViewTag, view_name: String, props: Object| {
                update_props(tag, view_name, props)
            }),
            BridgeFunction::ternary(DISPATCH_COMMAND, move |tag: ViewTag, command: String, args: RuntimeValue| {
                dispatch_command(tag, command, args)
            }),
            BridgeFunction::quaternary(SCROLL_TO, move |tag: ViewTag, x: f64, y: f64, animated: bool| {
                scroll_to(tag, x, y, animated)
            }),
            BridgeFunction::unary(MEASURE, move |tag: ViewTag| Ok(measurement_to_object(measure(tag)?))),
            BridgeFunction::new(OBTAIN_PROP, move |rt, args| {
                let tag = arg::<ViewTag>(args, 0)?;
                let prop_name = arg::<String>(args, 1)?;
                Ok(obtain_prop(rt, tag, prop_name)?)
            }),
        ]
    }
}
