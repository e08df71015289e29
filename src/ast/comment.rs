//! Documentation comment views: `FullComment` and `ParamCommandComment`.

use super::node::Node;
use super::kind;
use crate::error::{AstError, Result};
use std::fmt;
use std::str::FromStr;

/// The complete documentation block attached to a declaration.
#[derive(Debug, Clone, Copy)]
pub struct FullComment<'a> {
    node: &'a Node,
}

impl<'a> FullComment<'a> {
    pub fn new(node: &'a Node) -> Result<Self> {
        kind::expect(node, kind::FULL_COMMENT)?;
        Ok(Self { node })
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Paragraph prose: each paragraph's first text leaf trimmed, empty
    /// paragraphs dropped, survivors separated by a blank line.
    pub fn text(&self) -> Result<String> {
        let mut paragraphs = Vec::new();
        for paragraph in self.node.children_of_kind(kind::PARAGRAPH_COMMENT) {
            let leaf = paragraph
                .first_child()
                .ok_or_else(|| AstError::malformed(paragraph.kind(), "paragraph has no text"))?;
            let text = leaf.text()?.trim();
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
        Ok(paragraphs.join("\n\n"))
    }

    /// `@param` blocks in document order. Duplicate names are kept.
    pub fn param_comments(&self) -> Vec<ParamComment<'a>> {
        self.node
            .children_of_kind(kind::PARAM_COMMAND_COMMENT)
            .map(|node| ParamComment { node })
            .collect()
    }

    /// First `@param` block in document order, whichever parameter it names.
    pub fn first_param_comment(&self) -> Result<ParamComment<'a>> {
        self.node
            .children_of_kind(kind::PARAM_COMMAND_COMMENT)
            .next()
            .map(|node| ParamComment { node })
            .ok_or_else(|| AstError::malformed(self.node.kind(), "no @param blocks"))
    }

    /// First `@param` block naming `name` exactly.
    pub fn param_comment(&self, name: &str) -> Result<Option<ParamComment<'a>>> {
        for comment in self.param_comments() {
            if comment.name()? == name {
                return Ok(Some(comment));
            }
        }
        Ok(None)
    }
}

/// Data flow direction declared by `@param[in]`, `@param[out]` or
/// `@param[in,out]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDirection {
    In,
    Out,
    InOut,
}

impl FromStr for ParamDirection {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in" => Ok(ParamDirection::In),
            "out" => Ok(ParamDirection::Out),
            "in,out" => Ok(ParamDirection::InOut),
            other => Err(AstError::malformed(
                kind::PARAM_COMMAND_COMMENT,
                format!("unknown direction `{other}`"),
            )),
        }
    }
}

impl fmt::Display for ParamDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamDirection::In => "in",
            ParamDirection::Out => "out",
            ParamDirection::InOut => "in,out",
        })
    }
}

/// One `@param` block of a `FullComment`.
#[derive(Debug, Clone, Copy)]
pub struct ParamComment<'a> {
    node: &'a Node,
}

impl<'a> ParamComment<'a> {
    pub fn new(node: &'a Node) -> Result<Self> {
        kind::expect(node, kind::PARAM_COMMAND_COMMENT)?;
        Ok(Self { node })
    }

    /// Name of the documented parameter.
    pub fn name(&self) -> Result<&'a str> {
        self.node.param()
    }

    pub fn direction(&self) -> Result<ParamDirection> {
        self.node.direction()?.parse()
    }

    /// The block's paragraph text: `inner[0].inner[0].text`, trimmed.
    pub fn text(&self) -> Result<&'a str> {
        let paragraph = self
            .node
            .first_child()
            .ok_or_else(|| self.malformed("no paragraph"))?;
        let leaf = paragraph
            .first_child()
            .ok_or_else(|| self.malformed("empty paragraph"))?;
        Ok(leaf.text()?.trim())
    }

    fn malformed(&self, what: &str) -> AstError {
        let name = self.node.param().unwrap_or("?");
        AstError::malformed(self.node.kind(), format!("@param {name}: {what}"))
    }
}
