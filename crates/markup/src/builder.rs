//! Runtime assembly of render chains.
//!
//! Markups are applied in the order they are added: the first markup wraps the text
//! directly, the last one ends up as the outermost tag.

use crate::error::ChainBuildError;
use crate::{Markup, Renderable, Text};
use micro_decorator::Decorator;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct RenderChainBuilder {
    text: Option<String>,
    markups: Vec<Markup>,
}

impl RenderChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// add a [`Markup`] around everything added so far
    pub fn markup(mut self, markup: Markup) -> Self {
        self.markups.push(markup);
        self
    }

    pub fn markups<I: IntoIterator<Item = Markup>>(mut self, markups: I) -> Self {
        self.markups.extend(markups);
        self
    }

    pub fn build(self) -> Result<Box<dyn Renderable>, ChainBuildError> {
        let text = self.text.ok_or(ChainBuildError::MissingText)?;
        debug!(depth = self.markups.len(), "building render chain");

        let leaf: Box<dyn Renderable> = Box::new(Text::new(text));
        Ok(self.markups.iter().fold(leaf, |inner, markup| markup.decorate(inner)))
    }
}

/// A serializable description of a render chain.
///
/// ```
/// use micro_markup::{RenderChainConfig, Renderable};
///
/// let config: RenderChainConfig = serde_json::from_str(r#"{"text": "hello", "markups": ["italic", "bold"]}"#).unwrap();
/// assert_eq!(config.build().render(), "<b><i>hello</i></b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderChainConfig {
    pub text: String,
    #[serde(default)]
    pub markups: Vec<Markup>,
}

impl RenderChainConfig {
    pub fn build(self) -> Box<dyn Renderable> {
        let leaf: Box<dyn Renderable> = Box::new(Text::new(self.text));
        self.markups.iter().fold(leaf, |inner, markup| markup.decorate(inner))
    }
}

impl From<RenderChainConfig> for RenderChainBuilder {
    fn from(config: RenderChainConfig) -> Self {
        RenderChainBuilder::new().text(config.text).markups(config.markups)
    }
}
