use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unknown markup: {name:?}, expected one of \"bold\", \"italic\"")]
    Unknown { name: String },
}

impl MarkupError {
    pub fn unknown<S: ToString>(name: S) -> Self {
        Self::Unknown { name: name.to_string() }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainBuildError {
    #[error("text must be set")]
    MissingText,
}
