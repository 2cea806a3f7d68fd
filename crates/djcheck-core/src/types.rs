//! Core types for issues and lint results.

use crate::syntax::Position;
use miette::{Diagnostic, SourceSpan};
use serde::Serialize;
use std::path::PathBuf;

/// Static descriptor of an issue kind a checker can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueCode {
    /// Stable code (e.g., "DJ06").
    pub code: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
}

impl IssueCode {
    /// Creates a new issue descriptor.
    #[must_use]
    pub const fn new(code: &'static str, description: &'static str) -> Self {
        Self { code, description }
    }

    /// Creates an issue of this kind at the given position.
    #[must_use]
    pub fn at(&self, position: Position) -> Issue {
        Issue {
            code: self.code.to_string(),
            description: self.description.to_string(),
            line: position.line,
            column: position.column,
        }
    }
}

/// A single diagnostic produced by a checker.
///
/// Issues are immutable once constructed; use [`IssueCode::at`] to create one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Issue {
    code: String,
    description: String,
    line: usize,
    column: usize,
}

impl Issue {
    /// Issue code (e.g., "DJ07").
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Line number (1-indexed).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column number (1-indexed, counted in bytes).
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Position of the issue.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.line, self.column, self.code, self.description
        )
    }
}

/// Renders an issue as a miette diagnostic over its source file.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("[{code}] {description}")]
pub struct IssueDiagnostic {
    code: String,
    description: String,
    #[source_code]
    source_code: miette::NamedSource<String>,
    #[label("{code}")]
    span: SourceSpan,
}

impl IssueDiagnostic {
    /// Creates a diagnostic for `issue` found in `source` (the file contents).
    #[must_use]
    pub fn new(issue: &Issue, file_name: impl AsRef<str>, source: String) -> Self {
        let offset = offset_for(&source, issue.line, issue.column);
        let length = source[offset..]
            .find('\n')
            .unwrap_or(source.len() - offset);
        Self {
            code: issue.code.clone(),
            description: issue.description.clone(),
            source_code: miette::NamedSource::new(file_name, source),
            span: SourceSpan::from((offset, length)),
        }
    }
}

/// Calculates the byte offset for a 1-indexed line and byte column.
///
/// Out-of-range positions are clamped to the end of the line or file.
#[must_use]
pub fn offset_for(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_content) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let text = line_content.trim_end_matches(['\n', '\r']);
            let mut within = column.saturating_sub(1).min(text.len());
            while !text.is_char_boundary(within) {
                within -= 1;
            }
            return offset + within;
        }
        offset += line_content.len();
    }

    offset
}

/// Issues found in a single file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    /// File path, relative to the analysis root when possible.
    pub path: PathBuf,
    /// Issues in analysis order.
    pub issues: Vec<Issue>,
}

impl FileReport {
    /// Creates a report for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, issues: Vec<Issue>) -> Self {
        Self {
            path: path.into(),
            issues,
        }
    }

    /// Drops issues silenced by a `# noqa` comment in `source`.
    pub fn retain_unsuppressed(&mut self, source: &str) {
        self.issues
            .retain(|issue| !crate::suppress::is_suppressed(source, issue.line, &issue.code));
    }
}

/// Result of running lint analysis over many files.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// Per-file reports, in discovery order. Files without issues are omitted.
    pub reports: Vec<FileReport>,
    /// Number of files analyzed.
    pub files_checked: usize,
    /// Number of files skipped because they could not be parsed.
    pub files_skipped: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an analyzed file.
    pub fn push(&mut self, report: FileReport) {
        self.files_checked += 1;
        if !report.issues.is_empty() {
            self.reports.push(report);
        }
    }

    /// Total number of issues.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.reports.iter().map(|r| r.issues.len()).sum()
    }

    /// Returns true if any issue was found.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.reports.iter().any(|r| !r.issues.is_empty())
    }

    /// Iterates over `(path, issue)` pairs.
    pub fn issues(&self) -> impl Iterator<Item = (&std::path::Path, &Issue)> {
        self.reports
            .iter()
            .flat_map(|r| r.issues.iter().map(move |i| (r.path.as_path(), i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: IssueCode = IssueCode::new("XX01", "sample issue");

    #[test]
    fn issue_code_builds_issue_at_position() {
        let issue = SAMPLE.at(Position::new(3, 5));
        assert_eq!(issue.code(), "XX01");
        assert_eq!(issue.description(), "sample issue");
        assert_eq!(issue.position(), Position::new(3, 5));
    }

    #[test]
    fn issue_display() {
        let issue = SAMPLE.at(Position::new(12, 1));
        insta::assert_snapshot!(issue.to_string(), @"12:1: XX01 sample issue");
    }

    #[test]
    fn issue_serializes_its_four_fields() {
        let issue = SAMPLE.at(Position::new(12, 1));
        let rendered = toml::to_string(&issue).unwrap();
        assert_eq!(
            rendered,
            "code = \"XX01\"\ndescription = \"sample issue\"\nline = 12\ncolumn = 1\n"
        );
    }

    #[test]
    fn offset_calculation() {
        let content = "line1\nline2\nline3";
        assert_eq!(offset_for(content, 1, 1), 0);
        assert_eq!(offset_for(content, 2, 1), 6);
        assert_eq!(offset_for(content, 2, 3), 8);
        assert_eq!(offset_for(content, 2, 99), 11);
    }

    #[test]
    fn result_omits_clean_files_but_counts_them() {
        let mut result = LintResult::new();
        result.push(FileReport::new("a.py", Vec::new()));
        result.push(FileReport::new("b.py", vec![SAMPLE.at(Position::new(1, 1))]));

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.issue_count(), 1);
        assert!(result.has_issues());
    }

    #[test]
    fn report_drops_noqa_lines() {
        let source = "class A(ModelForm):  # noqa: XX01\n    pass\nclass B(ModelForm):\n";
        let mut report = FileReport::new(
            "forms.py",
            vec![SAMPLE.at(Position::new(1, 1)), SAMPLE.at(Position::new(3, 1))],
        );
        report.retain_unsuppressed(source);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].line(), 3);
    }
}
