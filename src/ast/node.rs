//! Generic AST node decoded from a clang JSON dump.
//!
//! Only the fields the query model reads are kept; everything else in the
//! dump (locations, types, ranges) is dropped by serde during decode.

use crate::error::{AstError, Result};
use serde::Deserialize;

/// One node of the dump. `kind` is always present, every other field is
/// optional and read through an accessor that reports its absence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    mangled_name: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    param: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    inner: Option<Vec<Node>>,
}

/// Decode a JSON document into a node tree.
pub fn parse(input: &str) -> Result<Node> {
    Ok(serde_json::from_str(input)?)
}

impl Node {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Child nodes in document order; empty when `inner` is absent.
    pub fn children(&self) -> &[Node] {
        self.inner.as_deref().unwrap_or_default()
    }

    /// Whether the dump carried an `inner` list at all (possibly empty).
    pub fn has_inner(&self) -> bool {
        self.inner.is_some()
    }

    pub fn children_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children().iter().filter(move |child| child.is(kind))
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children().first()
    }

    pub fn name(&self) -> Result<&str> {
        self.require("name", &self.name)
    }

    pub fn mangled_name(&self) -> Result<&str> {
        self.require("mangledName", &self.mangled_name)
    }

    pub fn text(&self) -> Result<&str> {
        self.require("text", &self.text)
    }

    pub fn param(&self) -> Result<&str> {
        self.require("param", &self.param)
    }

    pub fn direction(&self) -> Result<&str> {
        self.require("direction", &self.direction)
    }

    fn require<'a>(&self, field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
        value.as_deref().ok_or_else(|| AstError::MissingField {
            kind: self.kind.clone(),
            field,
        })
    }
}
