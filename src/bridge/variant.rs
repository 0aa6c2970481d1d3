use crate::bridge::BridgeFunction;

/// How bridge functions of a variant address views.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Addressing {
    /// Opaque shadow-tree node handles (new architecture)
    NodeHandle,
    /// Integer view tags (legacy architecture)
    ViewTag,
}

/// A renderer architecture variant. Supplies the variant-specific part of the bridge; the
/// installer only ever talks to this trait.
pub trait RendererVariant: Send + Sync {
    /// Name of the variant, used in logs and in the runtime context.
    fn name(&self) -> &'static str;

    /// Addressing scheme used by this variant's bridge functions.
    fn addressing(&self) -> Addressing;

    /// Bridge functions specific to this variant, `_obtainProp` included.
    fn bridge_functions(&self) -> Vec<BridgeFunction>;
}
