//! Declaration views: functions and their parameters.

use super::comment::{FullComment, ParamComment};
use super::kind;
use super::node::Node;
use crate::annotation;
use crate::error::{AstError, Result};

/// A `FunctionDecl` node. Comment and parameters are derived on demand.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDecl<'a> {
    node: &'a Node,
}

impl<'a> FunctionDecl<'a> {
    pub fn new(node: &'a Node) -> Result<Self> {
        kind::expect(node, kind::FUNCTION_DECL)?;
        Ok(Self { node })
    }

    pub(crate) fn from_node(node: &'a Node) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn name(&self) -> Result<&'a str> {
        self.node.name()
    }

    pub fn mangled_name(&self) -> Result<&'a str> {
        self.node.mangled_name()
    }

    /// The function's documentation. Exactly one `FullComment` child is
    /// expected; extras are reported and the first one is used.
    pub fn comment(&self) -> Result<FullComment<'a>> {
        let mut comments = self.node.children_of_kind(kind::FULL_COMMENT);
        let Some(first) = comments.next() else {
            return Err(AstError::MissingComment {
                function: self.display_name(),
            });
        };

        let extra = comments.count();
        if extra > 0 {
            tracing::warn!(
                function = %self.display_name(),
                count = extra + 1,
                "function has more than one FullComment, using the first"
            );
        }
        FullComment::new(first)
    }

    /// Parameters in declaration order, each paired with the first `@param`
    /// block naming it.
    pub fn params(&self) -> Result<Vec<ParmVarDecl<'a>>> {
        self.params_with_comment(&self.comment()?)
    }

    /// Same as [`params`](Self::params), pairing against a `FullComment`
    /// the caller already resolved.
    pub fn params_with_comment(&self, comment: &FullComment<'a>) -> Result<Vec<ParmVarDecl<'a>>> {
        let blocks = comment.param_comments();

        let mut params = Vec::new();
        for node in self.node.children_of_kind(kind::PARM_VAR_DECL) {
            let name = node.name()?;
            let mut matched = None;
            for block in &blocks {
                if block.name()? == name {
                    matched = Some(*block);
                    break;
                }
            }
            let Some(block) = matched else {
                return Err(AstError::UnmatchedParameter {
                    function: self.display_name(),
                    parameter: name.to_string(),
                });
            };
            tracing::trace!(parameter = name, "matched @param block");
            params.push(ParmVarDecl {
                node,
                comment: block,
            });
        }
        Ok(params)
    }

    pub fn first_param(&self) -> Result<ParmVarDecl<'a>> {
        self.first_param_with_comment(&self.comment()?)
    }

    pub fn first_param_with_comment(&self, comment: &FullComment<'a>) -> Result<ParmVarDecl<'a>> {
        self.params_with_comment(comment)?
            .into_iter()
            .next()
            .ok_or_else(|| AstError::NoParameters {
                function: self.display_name(),
            })
    }

    fn display_name(&self) -> String {
        self.node.name().unwrap_or("<anonymous>").to_string()
    }
}

/// A `ParmVarDecl` node together with its `@param` block.
#[derive(Debug, Clone, Copy)]
pub struct ParmVarDecl<'a> {
    node: &'a Node,
    comment: ParamComment<'a>,
}

impl<'a> ParmVarDecl<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn name(&self) -> Result<&'a str> {
        self.node.name()
    }

    pub fn mangled_name(&self) -> Result<&'a str> {
        self.node.mangled_name()
    }

    pub fn comment(&self) -> ParamComment<'a> {
        self.comment
    }

    /// Identifier named by the `size:` annotation in this parameter's docs.
    pub fn size(&self) -> Result<&'a str> {
        let text = self.comment.text()?;
        annotation::find_size(text).ok_or_else(|| AstError::AnnotationNotFound {
            parameter: self.node.name().unwrap_or("<anonymous>").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use serde_json::{json, Value};

    fn node(value: Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    fn parm(name: &str) -> Value {
        json!({
            "kind": "ParmVarDecl",
            "name": name,
            "mangledName": format!("_{name}"),
            "type": { "qualType": "int" }
        })
    }

    fn param_block(name: &str, text: &str) -> Value {
        json!({
            "kind": "ParamCommandComment",
            "param": name,
            "direction": "in",
            "inner": [{
                "kind": "ParagraphComment",
                "inner": [{ "kind": "TextComment", "text": text }]
            }]
        })
    }

    fn full_comment(inner: Vec<Value>) -> Value {
        json!({ "kind": "FullComment", "inner": inner })
    }

    fn function(inner: Vec<Value>) -> Node {
        node(json!({
            "kind": "FunctionDecl",
            "name": "copy",
            "mangledName": "_copy",
            "inner": inner
        }))
    }

    #[test]
    fn size_from_paired_comment() {
        let f = function(vec![
            parm("dst"),
            full_comment(vec![param_block("dst", " Destination buffer. size:n")]),
        ]);
        let func = FunctionDecl::new(&f).unwrap();
        let params = func.params().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name().unwrap(), "dst");
        assert_eq!(params[0].mangled_name().unwrap(), "_dst");
        assert_eq!(params[0].size().unwrap(), "n");
    }

    #[test]
    fn size_missing_is_annotation_not_found() {
        let f = function(vec![
            parm("dst"),
            full_comment(vec![param_block("dst", " Destination buffer.")]),
        ]);
        let func = FunctionDecl::new(&f).unwrap();
        let err = func.first_param().unwrap().size().unwrap_err();
        match err {
            AstError::AnnotationNotFound { parameter } => assert_eq!(parameter, "dst"),
            other => panic!("expected AnnotationNotFound, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_parameter_names_it() {
        let f = function(vec![
            parm("dst"),
            parm("n"),
            full_comment(vec![param_block("dst", "buffer, size:n")]),
        ]);
        let err = FunctionDecl::new(&f).unwrap().params().unwrap_err();
        match err {
            AstError::UnmatchedParameter { function, parameter } => {
                assert_eq!(function, "copy");
                assert_eq!(parameter, "n");
            }
            other => panic!("expected UnmatchedParameter, got {other:?}"),
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        let f = function(vec![
            parm("Buf"),
            full_comment(vec![param_block("buf", "size:len")]),
        ]);
        let err = FunctionDecl::new(&f).unwrap().params().unwrap_err();
        assert!(matches!(err, AstError::UnmatchedParameter { .. }));
    }

    #[test]
    fn duplicate_blocks_first_match_wins() {
        let f = function(vec![
            parm("dst"),
            full_comment(vec![
                param_block("dst", "first size:a"),
                param_block("dst", "second size:b"),
            ]),
        ]);
        let func = FunctionDecl::new(&f).unwrap();
        assert_eq!(func.first_param().unwrap().size().unwrap(), "a");
    }

    #[test]
    fn params_follow_declaration_order() {
        let f = function(vec![
            parm("a"),
            parm("b"),
            full_comment(vec![param_block("b", "bee"), param_block("a", "ay")]),
        ]);
        let params = FunctionDecl::new(&f).unwrap().params().unwrap();
        let docs: Vec<_> = params
            .iter()
            .map(|p| (p.name().unwrap(), p.comment().text().unwrap()))
            .collect();
        assert_eq!(docs, [("a", "ay"), ("b", "bee")]);
    }

    #[test]
    fn missing_comment() {
        let f = function(vec![parm("dst")]);
        let func = FunctionDecl::new(&f).unwrap();
        match func.comment().unwrap_err() {
            AstError::MissingComment { function } => assert_eq!(function, "copy"),
            other => panic!("expected MissingComment, got {other:?}"),
        }
        assert!(matches!(
            func.params(),
            Err(AstError::MissingComment { .. })
        ));
    }

    #[test]
    fn several_full_comments_use_the_first() {
        let f = function(vec![
            full_comment(vec![json!({
                "kind": "ParagraphComment",
                "inner": [{ "kind": "TextComment", "text": " one" }]
            })]),
            full_comment(vec![]),
        ]);
        let func = FunctionDecl::new(&f).unwrap();
        let (comment, logs) = capture_logs(|| func.comment().unwrap());
        assert_eq!(comment.text().unwrap(), "one");
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("more than one FullComment"), "{logs}");
        assert!(logs.contains("function=copy"), "{logs}");
        assert!(logs.contains("count=2"), "{logs}");
    }

    #[test]
    fn single_full_comment_logs_nothing() {
        let f = function(vec![parm("dst"), full_comment(vec![param_block("dst", "size:n")])]);
        let func = FunctionDecl::new(&f).unwrap();
        let (_, logs) = capture_logs(|| func.params().unwrap());
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn no_parameters() {
        let f = function(vec![full_comment(vec![])]);
        let func = FunctionDecl::new(&f).unwrap();
        assert!(func.params().unwrap().is_empty());
        assert!(matches!(
            func.first_param(),
            Err(AstError::NoParameters { .. })
        ));
    }

    #[test]
    fn unnamed_parameter_is_missing_field() {
        let f = function(vec![
            json!({ "kind": "ParmVarDecl" }),
            full_comment(vec![]),
        ]);
        let err = FunctionDecl::new(&f).unwrap().params().unwrap_err();
        assert!(matches!(err, AstError::MissingField { field: "name", .. }));
    }
}
