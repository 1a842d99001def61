//! Init command - initializes immut configuration in a project

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use immut_core::config::CONFIG_FILENAME;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# immut configuration file
# See https://github.com/kzn-tools/immut for documentation

# File patterns to include in analysis
# include = ["src/**/*.ts", "src/**/*.tsx"]

# File patterns to exclude from analysis
# exclude = ["**/*.test.ts", "**/*.spec.ts"]

[rules]
# Disable specific rules
# disabled = ["no-var"]

# Override rule severity
# [rules.severity]
# prefer-const = "error"

[rules.prefer-const]
# Require every member of a destructuring pattern to qualify ("all")
# before reporting any of them, or report members individually ("any").
destructuring = "any"

# Skip bindings whose first use is a read before the initial assignment.
ignore_read_before_assign = false

# Initializer calls that opt a binding out of analysis entirely,
# e.g. framework state factories.
# ignored_initializers = ["$state", "ref"]
ignored_initializers = []
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(&self) -> Result<()> {
        self.run_in(Path::new("."))
    }

    fn run_in(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILENAME);

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Config file '{}' already exists. Use --force to overwrite.",
                CONFIG_FILENAME
            );
        }

        fs::write(&config_path, DEFAULT_CONFIG)?;
        println!(
            "{} Created {} configuration file",
            "✓".green().bold(),
            CONFIG_FILENAME.cyan()
        );
        Ok(())
    }
}
