//! Format-agnostic record of what astdoc reports about a dump.

use crate::ast::TranslationUnitDecl;
use crate::error::Result;
use serde::Serialize;

/// Documentation facts for the first function of a translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Function name
    pub function: String,
    /// Name of its first parameter
    pub parameter: String,
    /// Paragraph prose of the function's FullComment
    pub description: String,
    /// Text of the first @param block in document order
    pub parameter_doc: String,
    /// Identifier from the first parameter's `size:` annotation
    pub size: String,
}

impl Summary {
    pub fn from_unit(unit: &TranslationUnitDecl<'_>) -> Result<Self> {
        let function = unit.first_function()?;
        let comment = function.comment()?;
        let param = function.first_param_with_comment(&comment)?;
        tracing::debug!(function = function.name()?, parameter = param.name()?, "summarizing");

        Ok(Summary {
            function: function.name()?.to_string(),
            parameter: param.name()?.to_string(),
            description: comment.text()?,
            parameter_doc: comment.first_param_comment()?.text()?.to_string(),
            size: param.size()?.to_string(),
        })
    }
}
