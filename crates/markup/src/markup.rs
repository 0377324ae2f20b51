use crate::error::MarkupError;
use crate::wrapper::{BOLD_TAGS, ITALIC_TAGS};
use crate::{Bold, Italic, Renderable};
use micro_decorator::Decorator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A markup wrapper picked at runtime.
///
/// Decorating a boxed renderable with a `Markup` wraps it in the matching [`Bold`] or
/// [`Italic`] and boxes the result again, so chains of any shape share one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    Bold,
    Italic,
}

impl Markup {
    pub fn name(self) -> &'static str {
        match self {
            Markup::Bold => "bold",
            Markup::Italic => "italic",
        }
    }

    /// The opening and closing tag this markup renders with.
    pub fn tags(self) -> (&'static str, &'static str) {
        match self {
            Markup::Bold => BOLD_TAGS,
            Markup::Italic => ITALIC_TAGS,
        }
    }
}

impl Decorator<Box<dyn Renderable>> for Markup {
    type Out = Box<dyn Renderable>;

    fn decorate(&self, raw: Box<dyn Renderable>) -> Self::Out {
        trace!(markup = %self, "wrapping renderable");
        match self {
            Markup::Bold => Box::new(Bold::new(raw)),
            Markup::Italic => Box::new(Italic::new(raw)),
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Markup {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" | "b" => Ok(Markup::Bold),
            "italic" | "i" => Ok(Markup::Italic),
            _ => Err(MarkupError::unknown(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;
    use micro_decorator::DecoratorExt;

    #[test]
    fn test_from_str() {
        assert_eq!("bold".parse::<Markup>().unwrap(), Markup::Bold);
        assert_eq!(" Italic ".parse::<Markup>().unwrap(), Markup::Italic);
        assert_eq!("b".parse::<Markup>().unwrap(), Markup::Bold);
        assert_eq!("I".parse::<Markup>().unwrap(), Markup::Italic);

        assert_eq!("underline".parse::<Markup>(), Err(MarkupError::unknown("underline")));
    }

    #[test]
    fn test_display_matches_parse() {
        for markup in [Markup::Bold, Markup::Italic] {
            assert_eq!(markup.to_string().parse::<Markup>().unwrap(), markup);
        }
    }

    #[test]
    fn test_decorate_boxed() {
        let text: Box<dyn Renderable> = Box::new(Text::new("hello"));
        assert_eq!(Markup::Bold.decorate(text).render(), "<b>hello</b>");
    }

    #[test]
    fn test_runtime_chain() {
        let chain = Markup::Italic.and_then(Markup::Bold);
        let text: Box<dyn Renderable> = Box::new(Text::new("hello"));
        let rendered = chain.decorate(text).render();
        assert_eq!(rendered, "<b><i>hello</i></b>");
    }

    #[test]
    fn test_tags() {
        assert_eq!(Markup::Bold.tags(), ("<b>", "</b>"));
        assert_eq!(Markup::Italic.tags(), ("<i>", "</i>"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Markup::Bold).unwrap(), "\"bold\"");
        assert_eq!(serde_json::from_str::<Markup>("\"italic\"").unwrap(), Markup::Italic);
    }
}
