//! Checker trait for defining lint rules.

use crate::syntax::ClassDef;
use crate::types::{Issue, IssueCode};

/// A rule that inspects class definitions and reports issues.
///
/// The [`Analyzer`](crate::Analyzer) visits every class definition in a tree
/// and calls [`run`](Checker::run) only for classes where
/// [`applies_to`](Checker::applies_to) returned true. Checkers must be
/// stateless: both methods take `&self` and may be called concurrently for
/// different trees.
///
/// # Example
///
/// ```ignore
/// use djcheck_core::{Checker, ClassDef, Issue, IssueCode};
///
/// const XX01: IssueCode = IssueCode::new("XX01", "Class should not be empty");
///
/// pub struct NoEmptyClass;
///
/// impl Checker for NoEmptyClass {
///     fn name(&self) -> &'static str { "no-empty-class" }
///     fn codes(&self) -> &'static [IssueCode] { &[XX01] }
///
///     fn applies_to(&self, _class: &ClassDef) -> bool { true }
///
///     fn run(&self, class: &ClassDef) -> Vec<Issue> {
///         if class.body.is_empty() {
///             vec![XX01.at(class.position)]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Checker: Send + Sync {
    /// Returns the kebab-case name of this checker (e.g., "model-form").
    fn name(&self) -> &'static str;

    /// Returns the issue kinds this checker can emit.
    fn codes(&self) -> &'static [IssueCode];

    /// Returns a brief description of what this checker looks for.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns true if this checker should inspect `class`.
    ///
    /// Called for every class definition in the tree, so it must be cheap and
    /// free of side effects.
    fn applies_to(&self, class: &ClassDef) -> bool;

    /// Inspects `class` and returns the issues found.
    ///
    /// Unexpected node shapes must degrade to "no issue", never to a panic.
    fn run(&self, class: &ClassDef) -> Vec<Issue>;
}

/// Type alias for boxed Checker trait objects.
pub type CheckerBox = Box<dyn Checker>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Position;

    const TEST001: IssueCode = IssueCode::new("TT01", "A test issue");

    struct TestChecker;

    impl Checker for TestChecker {
        fn name(&self) -> &'static str {
            "test-checker"
        }
        fn codes(&self) -> &'static [IssueCode] {
            &[TEST001]
        }
        fn description(&self) -> &'static str {
            "A test checker"
        }
        fn applies_to(&self, class: &ClassDef) -> bool {
            class.name.starts_with("Test")
        }
        fn run(&self, class: &ClassDef) -> Vec<Issue> {
            vec![TEST001.at(class.position)]
        }
    }

    #[test]
    fn test_checker_trait() {
        let checker = TestChecker;
        let class = ClassDef {
            name: "TestCase".into(),
            bases: Vec::new(),
            body: Vec::new(),
            position: Position::new(4, 1),
        };

        assert_eq!(checker.name(), "test-checker");
        assert_eq!(checker.codes()[0].code, "TT01");
        assert!(checker.applies_to(&class));
        assert_eq!(checker.run(&class)[0].line(), 4);
    }
}
