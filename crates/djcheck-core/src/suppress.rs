//! Comment-based suppression directives.
//!
//! Supports flake8-style directives at the end of a source line:
//! ```text
//! class ArticleForm(ModelForm):  # noqa
//! class ArticleForm(ModelForm):  # noqa: DJ06, DJ07
//! ```

use std::collections::HashSet;

/// Parsed suppression directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression {
    /// Bare `# noqa`: every code on the line is suppressed.
    All,
    /// `# noqa: CODE, ...`: only the listed codes (upper-cased).
    Codes(HashSet<String>),
}

impl Suppression {
    /// Returns true if this directive covers `code`.
    #[must_use]
    pub fn covers(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Codes(codes) => codes.contains(&code.to_ascii_uppercase()),
        }
    }
}

/// Checks whether `code` is suppressed on `line` (1-indexed) of `content`.
#[must_use]
pub fn is_suppressed(content: &str, line: usize, code: &str) -> bool {
    if line == 0 {
        return false;
    }

    content
        .lines()
        .nth(line - 1)
        .and_then(parse_directive)
        .is_some_and(|directive| directive.covers(code))
}

/// Parses a suppression directive from a source line.
///
/// The directive is searched in the comment part of the line, i.e. after the
/// first `#`. A `#` inside a string literal on the same line can cause a false
/// positive, which matches how flake8 treats the same input.
#[must_use]
pub fn parse_directive(line: &str) -> Option<Suppression> {
    let comment = &line[line.find('#')?..];
    let lower = comment.to_ascii_lowercase();
    let start = lower.find("noqa")?;

    // `# noqa` must be introduced by a comment marker, optionally with spaces.
    if !lower[..start].trim_end().ends_with('#') {
        return None;
    }

    let rest = &comment[start + "noqa".len()..];
    let Some(codes) = rest.trim_start().strip_prefix(':') else {
        return Some(Suppression::All);
    };

    let codes: HashSet<String> = codes
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .take_while(|s| s.is_empty() || is_code(s))
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();

    if codes.is_empty() {
        Some(Suppression::All)
    } else {
        Some(Suppression::Codes(codes))
    }
}

/// An issue code is letters followed by digits (e.g. `DJ06`, `E501`).
fn is_code(s: &str) -> bool {
    let letters = s.chars().take_while(char::is_ascii_alphabetic).count();
    let digits = s[letters..].chars().take_while(char::is_ascii_digit).count();
    letters > 0 && digits > 0 && letters + digits == s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_noqa_suppresses_everything() {
        assert_eq!(parse_directive("x = 1  # noqa"), Some(Suppression::All));
        assert_eq!(parse_directive("x = 1  #NOQA"), Some(Suppression::All));
    }

    #[test]
    fn noqa_with_codes() {
        let directive = parse_directive("class A(ModelForm):  # noqa: DJ06, dj07").unwrap();
        assert!(directive.covers("DJ06"));
        assert!(directive.covers("DJ07"));
        assert!(!directive.covers("DJ01"));
    }

    #[test]
    fn codes_stop_at_free_text() {
        let directive = parse_directive("x = 1  # noqa: DJ06 legacy form").unwrap();
        assert_eq!(
            directive,
            Suppression::Codes(HashSet::from(["DJ06".to_string()]))
        );
    }

    #[test]
    fn no_comment_no_directive() {
        assert_eq!(parse_directive("x = 'noqa'"), None);
        assert_eq!(parse_directive("x = 1  # see noqa docs"), None);
    }

    #[test]
    fn is_suppressed_checks_the_given_line_only() {
        let content = "class A(ModelForm):  # noqa: DJ07\n    pass\nclass B(ModelForm):\n";
        assert!(is_suppressed(content, 1, "DJ07"));
        assert!(!is_suppressed(content, 1, "DJ06"));
        assert!(!is_suppressed(content, 3, "DJ07"));
        assert!(!is_suppressed(content, 0, "DJ07"));
        assert!(!is_suppressed(content, 42, "DJ07"));
    }
}
