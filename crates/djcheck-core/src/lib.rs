//! # djcheck-core
//!
//! Core framework for djcheck, a pluggable linter for Django code.
//!
//! This crate is independent of any parser. It provides:
//!
//! - [`Node`] and friends, the syntax tree model front ends lower into
//! - [`Checker`] trait for class-level rules
//! - [`matchers`] for recognizing equivalent syntactic spellings
//! - [`Analyzer`] for dispatching checkers over a tree
//! - [`Issue`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use djcheck_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .checker(MyChecker::new())
//!     .build();
//!
//! let issues = analyzer.analyze(&tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod checker;
mod config;
mod syntax;
mod types;

pub mod matchers;
pub mod suppress;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use checker::{Checker, CheckerBox};
pub use config::{AnalyzerConfig, CheckerConfig, Config, ConfigError, PYPROJECT};
pub use matchers::{matches_base_class_reference, matches_literal_value, BaseClassPattern};
pub use syntax::{Assign, ClassDef, Literal, Module, Node, Position};
pub use types::{offset_for, FileReport, Issue, IssueCode, IssueDiagnostic, LintResult};
