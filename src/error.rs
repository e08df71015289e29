//! Error taxonomy for the AST query model.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = AstError> = std::result::Result<T, E>;

/// Every contract the query model can find violated in a dump.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("failed to decode AST JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("`{kind}` node has no `{field}` field")]
    MissingField { kind: String, field: &'static str },

    #[error("expected a `{expected}` node, found `{found}`")]
    UnexpectedKind {
        expected: &'static str,
        found: String,
    },

    #[error("translation unit declares no functions")]
    NoFunctions,

    #[error("function `{function}` has no FullComment")]
    MissingComment { function: String },

    #[error("malformed `{kind}` node: {reason}")]
    MalformedComment { kind: String, reason: String },

    #[error("function `{function}` declares no parameters")]
    NoParameters { function: String },

    #[error("parameter `{parameter}` of `{function}` has no matching @param block")]
    UnmatchedParameter { function: String, parameter: String },

    #[error("no `size:` annotation in the documentation of parameter `{parameter}`")]
    AnnotationNotFound { parameter: String },
}

impl AstError {
    pub(crate) fn malformed(kind: &str, reason: impl Into<String>) -> Self {
        AstError::MalformedComment {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }
}
