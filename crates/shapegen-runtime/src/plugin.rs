use crate::{operation::OperationShape, shape_id::ShapeId};
use tower::{Layer, util::Either};

///
/// Plugin
///
/// A modifier applied to every upgraded operation as a service is built.
/// Knows the protocol and the operation, so it can act per operation.
///

pub trait Plugin<P, Op, S> {
    type Output;

    fn apply(&self, input: S) -> Self::Output;
}

///
/// IdentityPlugin
/// the default modifier; leaves the upgraded service untouched
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityPlugin;

impl<P, Op, S> Plugin<P, Op, S> for IdentityPlugin {
    type Output = S;

    fn apply(&self, input: S) -> Self::Output {
        input
    }
}

///
/// LayerPlugin
/// applies one tower layer to every operation
///

#[derive(Clone, Debug)]
pub struct LayerPlugin<L>(pub L);

impl<P, Op, S, L> Plugin<P, Op, S> for LayerPlugin<L>
where
    L: Layer<S>,
{
    type Output = L::Service;

    fn apply(&self, input: S) -> Self::Output {
        self.0.layer(input)
    }
}

///
/// PluginStack
/// runs `inner` first, then `outer` over its output
///

#[derive(Clone, Debug)]
pub struct PluginStack<Inner, Outer> {
    inner: Inner,
    outer: Outer,
}

impl<Inner, Outer> PluginStack<Inner, Outer> {
    pub const fn new(inner: Inner, outer: Outer) -> Self {
        Self { inner, outer }
    }
}

impl<P, Op, S, Inner, Outer> Plugin<P, Op, S> for PluginStack<Inner, Outer>
where
    Inner: Plugin<P, Op, S>,
    Outer: Plugin<P, Op, Inner::Output>,
{
    type Output = Outer::Output;

    fn apply(&self, input: S) -> Self::Output {
        self.outer.apply(self.inner.apply(input))
    }
}

///
/// OperationFilter
/// applies `plugin` only to operations whose shape id passes `predicate`
///

#[derive(Clone, Debug)]
pub struct OperationFilter<Pl, F> {
    plugin: Pl,
    predicate: F,
}

impl<Pl, F> OperationFilter<Pl, F> {
    pub const fn new(plugin: Pl, predicate: F) -> Self {
        Self { plugin, predicate }
    }
}

impl<P, Op, S, Pl, F> Plugin<P, Op, S> for OperationFilter<Pl, F>
where
    Op: OperationShape,
    Pl: Plugin<P, Op, S>,
    F: Fn(ShapeId) -> bool,
{
    type Output = Either<Pl::Output, S>;

    fn apply(&self, input: S) -> Self::Output {
        if (self.predicate)(Op::ID) {
            Either::Left(self.plugin.apply(input))
        } else {
            Either::Right(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower::layer::layer_fn;

    struct Proto;
    struct Ping;

    impl OperationShape for Ping {
        const ID: ShapeId = ShapeId::new("test#Ping", "test", "Ping");

        type Input = ();
        type Output = ();
        type Error = std::convert::Infallible;
    }

    #[derive(Debug, PartialEq)]
    struct Wrapped<S>(S);

    #[test]
    fn identity_is_a_no_op() {
        let out = <IdentityPlugin as Plugin<Proto, Ping, u8>>::apply(&IdentityPlugin, 7);
        assert_eq!(out, 7);
    }

    #[test]
    fn layer_plugin_wraps() {
        let plugin = LayerPlugin(layer_fn(Wrapped::<u8>));
        let out = <_ as Plugin<Proto, Ping, u8>>::apply(&plugin, 7);

        assert_eq!(out, Wrapped(7));
    }

    #[test]
    fn stack_applies_inner_first() {
        let plugin = PluginStack::new(
            LayerPlugin(layer_fn(Wrapped::<u8>)),
            LayerPlugin(layer_fn(Wrapped::<Wrapped<u8>>)),
        );
        let out = <_ as Plugin<Proto, Ping, u8>>::apply(&plugin, 1);

        assert_eq!(out, Wrapped(Wrapped(1)));
    }

    #[test]
    fn filter_skips_rejected_operations() {
        let plugin = OperationFilter::new(LayerPlugin(layer_fn(Wrapped::<u8>)), |id: ShapeId| {
            id.name() != "Ping"
        });
        let out = <_ as Plugin<Proto, Ping, u8>>::apply(&plugin, 3);

        assert!(matches!(out, Either::Right(3)));
    }
}
