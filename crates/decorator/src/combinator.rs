use crate::Decorator;

/// Hands its input back untouched, the neutral element of composition.
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline(always)]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}

/// Two decorators applied one after the other.
///
/// `Inner` decorates the raw value, `Outer` decorates whatever `Inner` produced, so `Outer`'s
/// layer ends up around `Inner`'s.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorComposer<Inner, Outer> {
    inner: Inner,
    outer: Outer,
}

impl<Inner, Outer> DecoratorComposer<Inner, Outer> {
    pub fn new(inner: Inner, outer: Outer) -> Self {
        Self { inner, outer }
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }

    pub fn outer(&self) -> &Outer {
        &self.outer
    }
}

impl Default for DecoratorComposer<IdentityDecorator, IdentityDecorator> {
    fn default() -> Self {
        Self::new(IdentityDecorator, IdentityDecorator)
    }
}

impl<In, Inner, Outer> Decorator<In> for DecoratorComposer<Inner, Outer>
where
    Inner: Decorator<In>,
    Outer: Decorator<Inner::Out>,
{
    type Out = Outer::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        let layered = self.inner.decorate(raw);
        self.outer.decorate(layered)
    }
}
