//! # djcheck-python
//!
//! Tree-sitter based Python front end for djcheck.
//!
//! Parses Python source with `tree-sitter-python` and lowers the concrete
//! syntax tree into the `djcheck-core` [`Node`](djcheck_core::Node) model:
//!
//! - [`PythonParser`] turns source text into a module node
//! - [`ParseError`] reports grammar, parser, and syntax failures
//!
//! String literals are decoded during lowering (prefixes, quotes, escapes,
//! implicit concatenation), so checkers compare runtime values rather than
//! source spellings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod literal;
mod lower;
mod parser;

pub use parser::{ParseError, PythonParser};
