//! Read-only query model over a clang JSON AST dump.
//!
//! Every view borrows from the decoded [`Node`] tree and derives what it
//! exposes on demand, so the tree must outlive all views taken from it.

pub mod comment;
pub mod decl;
pub mod kind;
pub mod node;
pub mod unit;

pub use comment::{FullComment, ParamComment, ParamDirection};
pub use decl::{FunctionDecl, ParmVarDecl};
pub use node::{parse, Node};
pub use unit::TranslationUnitDecl;
