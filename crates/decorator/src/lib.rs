//! Composable decorators.
//!
//! A [`Decorator`] turns one value into another, usually by wrapping it: a decorator for a
//! renderable text turns `Text` into `Bold<Text>`, a decorator for a ticket turns `Ticket`
//! into `VipDiscount<Ticket>`. Decorators compose with [`DecoratorExt::and_then`] and
//! [`DecoratorExt::compose`], so a whole chain of wrappers can be described once and
//! applied to many values.
//!
//! ```
//! use micro_decorator::{decorator_fn, Decorator, DecoratorExt};
//!
//! let quoted = decorator_fn(|s: String| format!("'{s}'"));
//! let shouted = decorator_fn(|s: String| s.to_uppercase());
//!
//! // `and_then` applies `quoted` first, so `shouted` is the outermost layer
//! assert_eq!(quoted.and_then(shouted).decorate("hi".to_string()), "'HI'");
//! ```

mod combinator;
mod decorator_fn;

pub use combinator::{DecoratorComposer, IdentityDecorator};
pub use decorator_fn::{decorator_fn, DecoratorFn};

/// Turns a value of type `In` into a value of type [`Decorator::Out`].
pub trait Decorator<In> {
    /// the decorated value
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

pub trait DecoratorExt<In>: Decorator<In> {
    /// Applies `self` first and `decorator` last, `decorator` ends up as the outermost layer.
    fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D>
    where
        Self: Sized,
    {
        DecoratorComposer::new(self, decorator)
    }

    /// Applies `decorator` first and `self` last, `self` ends up as the outermost layer.
    fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self>
    where
        Self: Sized,
    {
        DecoratorComposer::new(decorator, self)
    }
}

impl<T: Decorator<In> + ?Sized, In> DecoratorExt<In> for T {}

#[cfg(test)]
mod tests {
    use super::*;

    trait Service {
        fn call(&self, input: &str) -> String;
    }

    struct Service0;
    struct Service1<S: Service>(S);
    struct Service2<S: Service>(S);

    impl Service for Service0 {
        fn call(&self, input: &str) -> String {
            format!("s0 {input}")
        }
    }

    impl<S: Service> Service for Service1<S> {
        fn call(&self, input: &str) -> String {
            let result = self.0.call(input);
            format!("s1 {result}")
        }
    }

    impl<S: Service> Service for Service2<S> {
        fn call(&self, input: &str) -> String {
            let result = self.0.call(input);
            format!("s2 {result}")
        }
    }

    struct Service1Decorator;
    struct Service2Decorator;

    impl<S: Service> Decorator<S> for Service1Decorator {
        type Out = Service1<S>;

        fn decorate(&self, raw: S) -> Self::Out {
            Service1(raw)
        }
    }

    impl<S: Service> Decorator<S> for Service2Decorator {
        type Out = Service2<S>;

        fn decorate(&self, raw: S) -> Self::Out {
            Service2(raw)
        }
    }

    // both decorators accept any `Service`, so the input type is pinned explicitly
    #[test]
    fn test_and_then() {
        let chain = DecoratorExt::<Service0>::and_then(Service1Decorator, Service2Decorator);
        assert_eq!(chain.decorate(Service0).call("Hello"), "s2 s1 s0 Hello");
    }

    #[test]
    fn test_compose() {
        let chain = DecoratorExt::<Service0>::compose(Service1Decorator, Service2Decorator);
        assert_eq!(chain.decorate(Service0).call("Hello"), "s1 s2 s0 Hello");
    }

    #[test]
    fn test_identity_is_neutral() {
        let left = DecoratorComposer::new(IdentityDecorator, Service1Decorator).decorate(Service0);
        let right = DecoratorComposer::new(Service1Decorator, IdentityDecorator).decorate(Service0);
        assert_eq!(left.call("x"), Service1(Service0).call("x"));
        assert_eq!(right.call("x"), Service1(Service0).call("x"));
    }

    #[test]
    fn test_default_composer_is_identity() {
        let composer = DecoratorComposer::default();
        assert_eq!(composer.decorate(42), 42);
    }

    #[test]
    fn test_fn_decorators_chain() {
        let s1 = decorator_fn(|s: Service0| Service1(s));
        let s2 = decorator_fn(|s: Service1<Service0>| Service2(s));
        let chain = s1.and_then(s2);
        assert_eq!(chain.decorate(Service0).call("x"), "s2 s1 s0 x");
    }

    #[test]
    fn test_decorator_is_reusable() {
        let chain = DecoratorComposer::new(Service1Decorator, Service1Decorator);
        let first = chain.decorate(Service0);
        let second = chain.decorate(Service0);
        assert_eq!(first.call("x"), "s1 s1 s0 x");
        assert_eq!(first.call("x"), second.call("x"));
    }
}
