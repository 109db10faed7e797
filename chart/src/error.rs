use thiserror::Error;

/// Errors raised when raw type labels are turned into chart types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("A typing needs at least one type")]
    EmptyTyping,

    #[error("A typing has at most two types, got {0}")]
    TooManyTypes(usize),
}
