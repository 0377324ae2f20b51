use crate::Renderable;

/// The leaf of a render chain, renders its value as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Renderable for Text {
    fn render(&self) -> String {
        self.value.clone()
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_returns_value() {
        for s in ["hello", "", "<b>already tagged</b>", "multi\nline", "ünïcødé"] {
            assert_eq!(Text::new(s).render(), s);
        }
    }

    #[test]
    fn test_from() {
        assert_eq!(Text::from("hi"), Text::new("hi"));
        assert_eq!(Text::from(String::from("hi")).value(), "hi");
    }
}
