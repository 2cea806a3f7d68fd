//! End-to-end tests for the `djcheck` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const FORMS: &str = "\
from django.db import models

class UserForm(models.ModelForm):
    class Meta:
        model = User
        exclude = ['password']

class GroupForm(models.ModelForm):
    class Meta:
        fields = '__all__'
";

fn djcheck(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_djcheck"))
        .args(args)
        .current_dir(dir)
        .env("DJCHECK_CONFIG_DIR", dir.join("no-global-config"))
        .env_remove("DJCHECK_CONFIG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = tmp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    tmp
}

#[test]
fn compact_output_lists_issues_and_fails() {
    let tmp = project(&[("app/forms.py", FORMS)]);

    let output = djcheck(tmp.path(), &["check", "--format", "compact"]);
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{out}");
    assert!(lines[0].ends_with(
        "forms.py:3:1: DJ06 ModelForm.Meta should not set \"exclude\", set \"fields\" instead"
    ));
    assert!(lines[1].ends_with("forms.py:8:1: DJ07 ModelForm.Meta should not set fields to '__all__'"));
}

#[test]
fn clean_project_succeeds() {
    let tmp = project(&[("app/forms.py", "class UserForm(ModelForm):\n    class Meta:\n        fields = ['name']\n")]);

    let output = djcheck(tmp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Found 0 issue(s) in 1 file(s)"));
}

#[test]
fn json_output_is_machine_readable() {
    let tmp = project(&[("forms.py", FORMS)]);

    let output = djcheck(tmp.path(), &["check", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["reports"][0]["issues"][0]["code"], "DJ06");
    assert_eq!(json["reports"][0]["issues"][1]["line"], 8);
}

#[test]
fn select_limits_codes() {
    let tmp = project(&[("forms.py", FORMS)]);

    let output = djcheck(tmp.path(), &["check", "--format", "compact", "--select", "no-such-checker"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

#[test]
fn config_disables_checker() {
    let tmp = project(&[
        ("forms.py", FORMS),
        ("djcheck.toml", "[checkers.model-form]\nenabled = false\n"),
    ]);

    let output = djcheck(tmp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn excluded_and_unparseable_files() {
    let tmp = project(&[
        ("app/migrations/0001_initial.py", FORMS),
        ("broken.py", "class Broken(:\n"),
    ]);

    let output = djcheck(tmp.path(), &["check", "--exclude", "**/migrations/**"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("1 file(s) skipped"));

    let output = djcheck(
        tmp.path(),
        &["check", "--exclude", "**/migrations/**", "--fail-on-parse-error"],
    );
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn list_checkers_shows_codes() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&djcheck(tmp.path(), &["list-checkers"]));
    assert!(out.contains("DJ06"));
    assert!(out.contains("DJ07"));
    assert!(out.contains("model-form"));
    assert!(out.contains("Forbids exclude and fields = \"__all__\" in ModelForm.Meta"));
}

#[test]
fn piped_output_has_no_colour_codes() {
    let tmp = project(&[("forms.py", FORMS)]);

    let output = djcheck(tmp.path(), &["check"]);
    let out = stdout(&output);
    assert!(out.contains("DJ06"));
    assert!(!out.contains('\x1b'), "{out:?}");

    let output = djcheck(tmp.path(), &["check", "--format", "pretty"]);
    let out = stdout(&output);
    assert!(out.contains("DJ07"));
    assert!(!out.contains('\x1b'), "{out:?}");
}

#[test]
fn pyproject_tool_table_applies_to_subdirectories() {
    let tmp = project(&[
        ("pyproject.toml", "[project]\nname = \"shop\"\n\n[tool.djcheck.checkers.model-form]\nenabled = false\n"),
        ("shop/forms.py", FORMS),
    ]);

    let output = djcheck(tmp.path(), &["check", "shop"]);
    assert_eq!(output.status.code(), Some(0));

    let output = djcheck(tmp.path(), &["check", "shop/forms.py"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();

    assert!(djcheck(tmp.path(), &["init"]).status.success());
    assert!(tmp.path().join("djcheck.toml").exists());

    assert!(!djcheck(tmp.path(), &["init"]).status.success());
    assert!(djcheck(tmp.path(), &["init", "--force"]).status.success());
}
