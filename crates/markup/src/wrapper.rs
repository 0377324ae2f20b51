//! Markup wrappers.
//!
//! Each wrapper owns exactly one inner [`Renderable`]. Rendering a wrapper renders the inner
//! value first and then surrounds the result with the wrapper's tags, so a chain renders from
//! the innermost leaf outwards.

use crate::Renderable;
use micro_decorator::Decorator;

/// Surrounds the inner render output with `<b>` and `</b>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bold<R> {
    inner: R,
}

/// Surrounds the inner render output with `<i>` and `</i>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Italic<R> {
    inner: R,
}

pub(crate) const BOLD_TAGS: (&str, &str) = ("<b>", "</b>");
pub(crate) const ITALIC_TAGS: (&str, &str) = ("<i>", "</i>");

impl<R: Renderable> Bold<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Removes this layer and hands back the wrapped value.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Renderable> Italic<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Removes this layer and hands back the wrapped value.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Renderable> Renderable for Bold<R> {
    fn render(&self) -> String {
        surround(BOLD_TAGS, &self.inner.render())
    }
}

impl<R: Renderable> Renderable for Italic<R> {
    fn render(&self) -> String {
        surround(ITALIC_TAGS, &self.inner.render())
    }
}

fn surround((open, close): (&str, &str), content: &str) -> String {
    let mut out = String::with_capacity(open.len() + content.len() + close.len());
    out.push_str(open);
    out.push_str(content);
    out.push_str(close);
    out
}

/// Wraps any [`Renderable`] into a [`Bold`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BoldDecorator;

/// Wraps any [`Renderable`] into an [`Italic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ItalicDecorator;

impl<R: Renderable> Decorator<R> for BoldDecorator {
    type Out = Bold<R>;

    fn decorate(&self, raw: R) -> Self::Out {
        Bold::new(raw)
    }
}

impl<R: Renderable> Decorator<R> for ItalicDecorator {
    type Out = Italic<R>;

    fn decorate(&self, raw: R) -> Self::Out {
        Italic::new(raw)
    }
}
