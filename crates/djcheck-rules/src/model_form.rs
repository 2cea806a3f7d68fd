//! Checker for `ModelForm.Meta` field selection.
//!
//! # Rationale
//!
//! A `ModelForm` that uses `exclude`, or sets `fields = "__all__"`, silently
//! exposes every new model field added later. Listing the fields explicitly
//! keeps mass-assignment under review.
//!
//! # Detected Patterns
//!
//! ```python
//! class ArticleForm(ModelForm):
//!     class Meta:
//!         model = Article
//!         exclude = ["author"]      # DJ06
//!
//! class CommentForm(models.ModelForm):
//!     class Meta:
//!         fields = "__all__"        # DJ07
//! ```
//!
//! Both issues are reported at the form class, not at the `Meta` block.

use djcheck_core::{
    matches_literal_value, BaseClassPattern, Checker, CheckerConfig, ClassDef, Issue, IssueCode,
};
use tracing::warn;

/// `ModelForm.Meta` sets `exclude`.
pub const DJ06: IssueCode = IssueCode::new(
    "DJ06",
    "ModelForm.Meta should not set \"exclude\", set \"fields\" instead",
);

/// `ModelForm.Meta` sets `fields = "__all__"`.
pub const DJ07: IssueCode = IssueCode::new("DJ07", "ModelForm.Meta should not set fields to '__all__'");

/// Checker name for the model-form rule.
pub const NAME: &str = "model-form";

const CODES: &[IssueCode] = &[DJ06, DJ07];

/// Reports `exclude` and `fields = "__all__"` in `ModelForm` configuration blocks.
#[derive(Debug, Clone)]
pub struct ModelFormChecker {
    bases: Vec<BaseClassPattern>,
}

impl Default for ModelFormChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFormChecker {
    /// Creates a checker recognizing `ModelForm` and `models.ModelForm`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bases: vec![BaseClassPattern::new("models", "ModelForm")],
        }
    }

    /// Recognizes an additional base class.
    #[must_use]
    pub fn with_base(mut self, base: BaseClassPattern) -> Self {
        if !self.bases.contains(&base) {
            self.bases.push(base);
        }
        self
    }

    /// Creates a checker from its configuration section.
    ///
    /// `bases` entries that are not of the form `module.ClassName` are logged
    /// and ignored.
    #[must_use]
    pub fn from_config(config: &CheckerConfig) -> Self {
        config
            .get_str_array("bases")
            .iter()
            .filter_map(|raw| match raw.parse::<BaseClassPattern>() {
                Ok(base) => Some(base),
                Err(e) => {
                    warn!("{NAME}: {e}");
                    None
                }
            })
            .fold(Self::new(), Self::with_base)
    }

    /// Returns the recognized base classes.
    #[must_use]
    pub fn bases(&self) -> &[BaseClassPattern] {
        &self.bases
    }
}

impl Checker for ModelFormChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn codes(&self) -> &'static [IssueCode] {
        CODES
    }

    fn description(&self) -> &'static str {
        "Forbids exclude and fields = \"__all__\" in ModelForm.Meta"
    }

    fn applies_to(&self, class: &ClassDef) -> bool {
        class
            .bases
            .iter()
            .any(|base| self.bases.iter().any(|pattern| pattern.matches(base)))
    }

    fn run(&self, class: &ClassDef) -> Vec<Issue> {
        if !self.applies_to(class) {
            return Vec::new();
        }
        let Some(meta) = class.nested_classes().next() else {
            return Vec::new();
        };

        let mut issues = Vec::new();
        for assign in meta.assignments() {
            for target in assign.target_names() {
                if target == "fields" && matches_literal_value(&assign.value, "__all__") {
                    issues.push(DJ07.at(class.position));
                } else if target == "exclude" {
                    issues.push(DJ06.at(class.position));
                }
            }
        }
        issues
    }
}
