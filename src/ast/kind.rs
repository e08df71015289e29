//! Node kind tags consumed from clang's JSON dump.

use super::node::Node;
use crate::error::{AstError, Result};

pub const TRANSLATION_UNIT_DECL: &str = "TranslationUnitDecl";
pub const FUNCTION_DECL: &str = "FunctionDecl";
pub const PARM_VAR_DECL: &str = "ParmVarDecl";
pub const FULL_COMMENT: &str = "FullComment";
pub const PARAGRAPH_COMMENT: &str = "ParagraphComment";
pub const PARAM_COMMAND_COMMENT: &str = "ParamCommandComment";

pub(crate) fn expect(node: &Node, expected: &'static str) -> Result<()> {
    if node.is(expected) {
        Ok(())
    } else {
        Err(AstError::UnexpectedKind {
            expected,
            found: node.kind().to_string(),
        })
    }
}
