//! Predicates recognizing equivalent syntactic spellings.
//!
//! All matchers are total: a node of an unexpected shape is a non-match.

use crate::syntax::Node;
use std::str::FromStr;

/// Returns true if `node` refers to `class_name`, either bare (`ModelForm`)
/// or through a module alias (`models.ModelForm`).
#[must_use]
pub fn matches_base_class_reference(node: &Node, module_alias: &str, class_name: &str) -> bool {
    match node {
        Node::Name { id, .. } => id == class_name,
        Node::Attribute { value, attr, .. } => {
            attr == class_name && value.as_name() == Some(module_alias)
        }
        _ => false,
    }
}

/// Returns true if `node` is a string or byte-string literal whose text equals
/// `expected`. Byte strings that are not valid UTF-8 never match.
#[must_use]
pub fn matches_literal_value(node: &Node, expected: &str) -> bool {
    node.as_literal()
        .and_then(|literal| literal.as_text())
        .is_some_and(|text| text == expected)
}

/// A recognized base class, written `Class` or `module.Class`.
///
/// A pattern without a module part still carries the default alias it was
/// built with, so `BaseClassPattern::new("models", "ModelForm")` accepts both
/// `ModelForm` and `models.ModelForm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseClassPattern {
    /// Module alias accepted in the qualified form.
    pub module_alias: String,
    /// Class name accepted in both forms.
    pub class_name: String,
}

impl BaseClassPattern {
    /// Creates a pattern for `module_alias.class_name` / `class_name`.
    #[must_use]
    pub fn new(module_alias: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            module_alias: module_alias.into(),
            class_name: class_name.into(),
        }
    }

    /// Returns true if `node` references this base class.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        matches_base_class_reference(node, &self.module_alias, &self.class_name)
    }
}

impl std::fmt::Display for BaseClassPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.module_alias, self.class_name)
    }
}

/// Error parsing a [`BaseClassPattern`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid base class pattern `{0}`, expected `module.ClassName`")]
pub struct InvalidPattern(pub String);

impl FromStr for BaseClassPattern {
    type Err = InvalidPattern;

    /// Parses `module.ClassName`. Only a single module segment is supported,
    /// because the matcher compares against a bare receiver name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, class) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| InvalidPattern(s.to_string()))?;
        let valid = |part: &str| {
            !part.is_empty() && part.chars().all(|c| c.is_alphanumeric() || c == '_')
        };
        if !valid(module) || !valid(class) {
            return Err(InvalidPattern(s.to_string()));
        }
        Ok(Self::new(module, class))
    }
}
