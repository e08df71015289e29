//! astdoc: recover parameter documentation from clang JSON AST dumps.
//!
//! Decodes the output of `clang -Xclang -ast-dump=json`, finds function
//! declarations, pairs each parameter with its `@param` block and reads
//! `size:<identifier>` annotations out of the prose.
//!
//! ```no_run
//! use astdoc::ast::{parse, TranslationUnitDecl};
//!
//! # fn main() -> astdoc::Result<()> {
//! let json = std::fs::read_to_string("mac.json").unwrap();
//! let root = parse(&json)?;
//! let unit = TranslationUnitDecl::new(&root)?;
//! for param in unit.first_function()?.params()? {
//!     println!("{} -> {}", param.name()?, param.size()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod annotation;
pub mod ast;
pub mod error;
pub mod model;
pub mod render;

#[cfg(test)]
mod test_support;

pub use error::{AstError, Result};
pub use model::Summary;
