//! Core analyzer for dispatching checkers over a syntax tree.

use crate::checker::{Checker, CheckerBox};
use crate::config::Config;
use crate::syntax::Node;
use crate::types::{FileReport, Issue};

use std::path::PathBuf;
use tracing::{debug, trace};

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    checkers: Vec<CheckerBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with no checkers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a checker. Checkers run in the order they are added.
    #[must_use]
    pub fn checker<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    /// Adds several boxed checkers, preserving their order.
    #[must_use]
    pub fn checkers<I>(mut self, checkers: I) -> Self
    where
        I: IntoIterator<Item = CheckerBox>,
    {
        self.checkers.extend(checkers);
        self
    }

    /// Sets the configuration used to disable checkers.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer. The checker list is fixed from here on.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();
        let checkers: Vec<CheckerBox> = self
            .checkers
            .into_iter()
            .filter(|checker| {
                let enabled = config.is_checker_enabled(checker.name());
                if !enabled {
                    debug!("Skipping disabled checker: {}", checker.name());
                }
                enabled
            })
            .collect();

        Analyzer { checkers }
    }
}

/// Dispatches registered checkers over every class definition of a tree.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer with no
/// checkers is valid and reports nothing.
pub struct Analyzer {
    checkers: Vec<CheckerBox>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered checkers.
    #[must_use]
    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    /// Analyzes a tree and returns every issue found.
    ///
    /// Class definitions are visited in pre-order (outer before inner, in
    /// source order); for each class the checkers run in registration order.
    /// Results are concatenated without sorting or deduplication.
    #[must_use]
    pub fn analyze(&self, tree: &Node) -> Vec<Issue> {
        let mut issues = Vec::new();

        for class in tree.class_defs() {
            for checker in &self.checkers {
                if !checker.applies_to(class) {
                    trace!("{} does not apply to {}", checker.name(), class.name);
                    continue;
                }

                let found = checker.run(class);
                debug!(
                    "{} reported {} issue(s) on class {} at {}",
                    checker.name(),
                    found.len(),
                    class.name,
                    class.position
                );
                issues.extend(found);
            }
        }

        issues
    }

    /// Analyzes the tree of one file and wraps the issues in a [`FileReport`].
    #[must_use]
    pub fn analyze_module(&self, path: impl Into<PathBuf>, tree: &Node) -> FileReport {
        let path = path.into();
        debug!("Analyzing: {}", path.display());
        FileReport::new(path, self.analyze(tree))
    }
}
