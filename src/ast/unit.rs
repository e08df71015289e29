//! Root of a dump: the `TranslationUnitDecl`.

use super::decl::FunctionDecl;
use super::kind;
use super::node::Node;
use crate::error::{AstError, Result};

#[derive(Debug, Clone, Copy)]
pub struct TranslationUnitDecl<'a> {
    node: &'a Node,
}

impl<'a> TranslationUnitDecl<'a> {
    pub fn new(node: &'a Node) -> Result<Self> {
        kind::expect(node, kind::TRANSLATION_UNIT_DECL)?;
        Ok(Self { node })
    }

    /// Function declarations in document order.
    pub fn functions(&self) -> Vec<FunctionDecl<'a>> {
        self.node
            .children_of_kind(kind::FUNCTION_DECL)
            .map(FunctionDecl::from_node)
            .collect()
    }

    pub fn first_function(&self) -> Result<FunctionDecl<'a>> {
        self.node
            .children_of_kind(kind::FUNCTION_DECL)
            .next()
            .map(FunctionDecl::from_node)
            .ok_or(AstError::NoFunctions)
    }
}
