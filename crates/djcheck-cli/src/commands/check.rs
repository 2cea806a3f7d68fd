//! Check command implementation.

use anyhow::{Context, Result};
use djcheck_core::{Analyzer, LintResult};
use djcheck_python::PythonParser;
use djcheck_rules::{configured_checkers, select};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options of `djcheck check`.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated checker names or issue codes.
    pub select: Option<String>,
    /// Extra exclude globs, added to the configured ones.
    pub exclude: Vec<String>,
    /// Abort on the first file that fails to parse.
    pub fail_on_parse_error: bool,
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    let mut exclude = config.analyzer.exclude.clone();
    exclude.extend(options.exclude.iter().cloned());
    let respect_gitignore = config.analyzer.respect_gitignore;

    let mut checkers = configured_checkers(&config);
    if let Some(filter) = &options.select {
        let selectors: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let (kept, unknown) = select(checkers, &selectors);
        for selector in unknown {
            tracing::warn!("Unknown checker or code: {selector}");
        }
        checkers = kept;
    }

    let analyzer = Analyzer::builder().checkers(checkers).config(config).build();
    let parser = PythonParser::new();

    let (root, files) = if path.is_file() {
        (PathBuf::new(), vec![path.to_path_buf()])
    } else {
        let files = discover_files(path, &exclude, respect_gitignore, parser.extensions())?;
        (path.to_path_buf(), files)
    };

    tracing::info!(
        "Analyzing {} files with {} checkers",
        files.len(),
        analyzer.checker_count()
    );

    let result = check_files(
        &analyzer,
        &parser,
        &root,
        &files,
        options.fail_on_parse_error,
    )?;

    super::output::print(&result, options.format, &root)?;

    if result.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}

/// Analyzes `files`, reporting paths relative to `root`.
///
/// Files that fail to parse are counted as skipped, or abort the run when
/// `fail_on_parse_error` is set.
pub fn check_files(
    analyzer: &Analyzer,
    parser: &PythonParser,
    root: &Path,
    files: &[PathBuf],
    fail_on_parse_error: bool,
) -> Result<LintResult> {
    let mut result = LintResult::new();

    for file_path in files {
        let source = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let tree = match parser.parse(&source) {
            Ok(tree) => tree,
            Err(err) if fail_on_parse_error => {
                return Err(err).with_context(|| format!("Failed to parse {}", file_path.display()));
            }
            Err(err) => {
                tracing::warn!("Skipping {}: {err}", file_path.display());
                result.files_skipped += 1;
                continue;
            }
        };

        let rel = file_path.strip_prefix(root).unwrap_or(file_path);
        let mut report = analyzer.analyze_module(rel, &tree);
        report.retain_unsuppressed(&source);
        result.push(report);
    }

    Ok(result)
}

/// Collects source files under `root` with one of `extensions`, skipping
/// paths (relative to `root`) matched by an `exclude` glob.
pub fn discover_files(
    root: &Path,
    exclude: &[String],
    respect_gitignore: bool,
    extensions: &[&str],
) -> Result<Vec<PathBuf>> {
    let patterns: Vec<glob::Pattern> = exclude
        .iter()
        .filter_map(|pattern| match glob::Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("Ignoring invalid exclude pattern {pattern:?}: {e}");
                None
            }
        })
        .collect();

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if !supported {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(rel)) {
            tracing::debug!("Excluded {}", rel.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
