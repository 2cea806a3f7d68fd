//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# djcheck configuration

[analyzer]
# Glob patterns to exclude from analysis, relative to the checked directory
exclude = [
    "**/.venv/**",
    "**/venv/**",
    "**/node_modules/**",
    "**/migrations/**",
]

# Respect .gitignore files
respect_gitignore = true

# Checker configurations
# Each checker can be disabled and may take extra options

[checkers.model-form]
enabled = true
# Extra base classes treated as ModelForm, written as `module.Class`
# bases = ["forms.ModelForm"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("djcheck.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created djcheck.toml");
    println!("\nNext steps:");
    println!("  1. Edit djcheck.toml to configure checkers");
    println!("  2. Run: djcheck check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use djcheck_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_checker_enabled("model-form"));
        assert!(config.analyzer.respect_gitignore);
        assert!(config
            .analyzer
            .exclude
            .contains(&"**/migrations/**".to_string()));
    }
}
