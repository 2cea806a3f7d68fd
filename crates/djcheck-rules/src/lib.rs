//! # djcheck-rules
//!
//! Built-in checkers for djcheck.
//!
//! ## Available Checkers
//!
//! | Codes | Name | Description |
//! |-------|------|-------------|
//! | DJ06, DJ07 | `model-form` | Forbids `exclude` and `fields = "__all__"` in `ModelForm.Meta` |
//!
//! ## Usage
//!
//! ```ignore
//! use djcheck_core::Analyzer;
//! use djcheck_rules::ModelFormChecker;
//!
//! let analyzer = Analyzer::builder()
//!     .checker(ModelFormChecker::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model_form;
mod presets;

pub use model_form::{ModelFormChecker, DJ06, DJ07};
pub use presets::{all_checkers, configured_checkers, select};

/// Re-export core types for convenience.
pub use djcheck_core::{Checker, Issue, IssueCode};
