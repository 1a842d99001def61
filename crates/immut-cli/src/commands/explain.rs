//! Explain command - provides detailed explanation of a rule

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use immut_core::analysis::AnalysisEngine;
use immut_core::config::load_config_or_default_with_warnings;
use immut_core::rules::Severity;
use std::env;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[arg(
        value_name = "RULE_ID",
        help = "Rule ID to explain (e.g., \"M001\", \"prefer-const\")"
    )]
    pub rule_id: String,
}

impl ExplainArgs {
    pub fn run(&self) -> Result<()> {
        let cwd = env::current_dir()?;
        let config = load_config_or_default_with_warnings(&cwd).config;
        let engine = AnalysisEngine::with_config(&config);
        let registry = engine.registry();

        let rule = registry
            .get_rule(&self.rule_id)
            .or_else(|| registry.get_rule_by_name(&self.rule_id));

        let Some(rule) = rule else {
            anyhow::bail!(
                "Unknown rule '{}'. Known rules: {}",
                self.rule_id,
                registry
                    .rules()
                    .map(|r| r.metadata().name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        };

        let metadata = rule.metadata();
        let is_enabled = registry.is_rule_enabled(metadata.id);

        println!();
        println!("{}", format!("Rule {}", metadata.id).bold());
        println!();
        println!("  {}: {}", "name".cyan(), metadata.name);
        println!("  {}: {}", "description".cyan(), metadata.description);
        println!(
            "  {}: {}",
            "severity".cyan(),
            format_severity(&metadata.severity)
        );

        if let Some(url) = metadata.docs_url {
            println!("  {}: {}", "documentation".cyan(), url);
        }

        if let Some(examples) = metadata.examples {
            println!();
            println!("  {}:", "examples".cyan());
            for line in examples.lines() {
                println!("    {}", line);
            }
        }

        println!();
        if is_enabled {
            println!("  {}: {}", "status".cyan(), "enabled".green());
        } else {
            println!("  {}: {}", "status".cyan(), "disabled".red());
        }
        println!();

        Ok(())
    }
}

fn format_severity(severity: &Severity) -> String {
    match severity {
        Severity::Error => "error".red().to_string(),
        Severity::Warning => "warning".yellow().to_string(),
        Severity::Info => "info".blue().to_string(),
        Severity::Hint => "hint".cyan().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explains_known_rule_by_id() {
        let args = ExplainArgs {
            rule_id: "M001".to_string(),
        };
        assert!(args.run().is_ok());
    }

    #[test]
    fn explains_known_rule_by_name() {
        let args = ExplainArgs {
            rule_id: "no-var".to_string(),
        };
        assert!(args.run().is_ok());
    }

    #[test]
    fn fails_for_unknown_rule() {
        let args = ExplainArgs {
            rule_id: "does-not-exist".to_string(),
        };
        let error = args.run().unwrap_err();
        assert!(error.to_string().contains("prefer-const"));
    }
}
