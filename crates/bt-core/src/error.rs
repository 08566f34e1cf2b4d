use thiserror::Error;

/// Errors raised when reading a [`TypedValue`](crate::TypedValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("cannot read a value that was never set")]
    Uninitialized,

    #[error("type mismatch: stored `{stored}`, requested `{requested}`")]
    TypeMismatch {
        stored: &'static str,
        requested: &'static str,
    },
}

/// Errors raised by [`Blackboard`](crate::Blackboard) lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("blackboard key not found: `{0}`")]
    KeyNotFound(String),

    #[error("blackboard key `{key}`: {source}")]
    Value {
        key: String,
        #[source]
        source: ValueError,
    },
}
