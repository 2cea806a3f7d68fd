//! Checker sets for common configurations.

use crate::model_form::{self, ModelFormChecker};
use djcheck_core::{CheckerBox, Config};

/// Returns every built-in checker with default settings.
#[must_use]
pub fn all_checkers() -> Vec<CheckerBox> {
    vec![Box::new(ModelFormChecker::new())]
}

/// Returns every built-in checker, customized by `config`.
///
/// Disabled checkers are still returned; the analyzer builder drops them when
/// given the same configuration.
#[must_use]
pub fn configured_checkers(config: &Config) -> Vec<CheckerBox> {
    let model_form = config
        .checker(model_form::NAME)
        .map_or_else(ModelFormChecker::new, ModelFormChecker::from_config);

    vec![Box::new(model_form)]
}

/// Keeps the checkers selected by name or by one of their issue codes.
///
/// Returns the kept checkers and the selectors that matched nothing.
#[must_use]
pub fn select<'a>(
    checkers: Vec<CheckerBox>,
    selectors: &[&'a str],
) -> (Vec<CheckerBox>, Vec<&'a str>) {
    let matches = |checker: &CheckerBox, selector: &str| {
        checker.name() == selector
            || checker
                .codes()
                .iter()
                .any(|c| c.code.eq_ignore_ascii_case(selector))
    };

    let unknown = selectors
        .iter()
        .copied()
        .filter(|s| !checkers.iter().any(|c| matches(c, *s)))
        .collect();

    let kept = checkers
        .into_iter()
        .filter(|c| selectors.iter().any(|s| matches(c, *s)))
        .collect();

    (kept, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checkers_are_listed() {
        let names: Vec<&str> = all_checkers().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["model-form"]);
    }

    #[test]
    fn select_by_name_or_code() {
        let (kept, unknown) = select(all_checkers(), &["dj07", "no-such-rule"]);
        assert_eq!(kept.len(), 1);
        assert_eq!(unknown, vec!["no-such-rule"]);

        let (kept, unknown) = select(all_checkers(), &["model-form"]);
        assert_eq!(kept.len(), 1);
        assert!(unknown.is_empty());

        let (kept, _) = select(all_checkers(), &["DJ99"]);
        assert!(kept.is_empty());
    }

    #[test]
    fn configured_checkers_read_bases() {
        let config =
            Config::parse("[checkers.model-form]\nbases = [\"forms.ModelForm\"]\n").unwrap();
        assert_eq!(configured_checkers(&config).len(), 1);
    }
}
