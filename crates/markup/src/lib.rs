//! Renderable text and the markup wrappers layered on top of it.
//!
//! A [`Text`] renders its value unchanged. [`Bold`] and [`Italic`] each own exactly one inner
//! [`Renderable`], render it, and surround the result with their tags. Wrappers nest freely,
//! the outermost wrapper's tag is the outermost in the output:
//!
//! ```
//! use micro_markup::{Bold, Italic, Renderable, Text};
//!
//! assert_eq!(Bold::new(Italic::new(Text::new("hello"))).render(), "<b><i>hello</i></b>");
//! assert_eq!(Italic::new(Bold::new(Text::new("hello"))).render(), "<i><b>hello</b></i>");
//! ```
//!
//! Chains whose shape is only known at runtime are assembled with [`RenderChainBuilder`] or
//! deserialized from a [`RenderChainConfig`].

mod builder;
mod error;
mod markup;
mod text;
mod wrapper;

pub use builder::{RenderChainBuilder, RenderChainConfig};
pub use error::{ChainBuildError, MarkupError};
pub use markup::Markup;
pub use text::Text;
pub use wrapper::{Bold, BoldDecorator, Italic, ItalicDecorator};

/// Something that renders to a string.
///
/// Rendering has no side effects: calling [`Renderable::render`] any number of times on the
/// same value yields the same string.
#[cfg_attr(test, mockall::automock)]
pub trait Renderable {
    fn render(&self) -> String;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}
