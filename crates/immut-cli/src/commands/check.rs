//! Check command - analyzes JavaScript/TypeScript files for mutability issues

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use immut_core::analysis::AnalysisEngine;
use immut_core::config::load_config_or_default_with_warnings;
use immut_core::diagnostic::{Diagnostic, apply_fixes};
use immut_core::parser::ParsedFile;
use immut_core::rules::Severity;

use crate::output::json::JsonFormatter;
use crate::output::pretty::PrettyFormatter;

const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build"];

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to file or directory to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format for diagnostics (pretty, text, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Apply safe fixes in place and report what remains
    #[arg(long)]
    pub fix: bool,

    /// Fail on warnings (exit code 1)
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Filter diagnostics by minimum severity level (error, warning, info, hint)
    #[arg(long, value_name = "LEVEL")]
    pub severity: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let config_result = load_config_or_default_with_warnings(&self.path);
        for warning in &config_result.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
        let config = config_result.config;

        let files = discover_files(&self.path)?;
        if files.is_empty() {
            println!("No JavaScript/TypeScript files found.");
            return Ok(());
        }
        debug!(count = files.len(), "discovered files");

        let engine = AnalysisEngine::with_config(&config);
        let min_severity = self.parse_severity()?;

        let mut results: Vec<(PathBuf, String, Vec<Diagnostic>)> = files
            .par_iter()
            .filter_map(|file| {
                let content = fs::read_to_string(file).ok()?;
                let parsed = ParsedFile::from_source(&file.to_string_lossy(), &content);
                let diagnostics = engine.analyze(&parsed);
                Some((file.clone(), content, diagnostics))
            })
            .collect();

        if self.fix {
            let fixed_count = self.apply_fixes_in_place(&mut results)?;
            if fixed_count > 0 {
                println!(
                    "{} Applied {} fix{}",
                    "✓".green().bold(),
                    fixed_count,
                    if fixed_count == 1 { "" } else { "es" }
                );
            }
        }

        let sources: HashMap<String, String> = results
            .iter()
            .map(|(path, content, _)| (path.to_string_lossy().to_string(), content.clone()))
            .collect();

        let all_diagnostics: Vec<Diagnostic> = results
            .into_iter()
            .flat_map(|(_, _, diags)| diags)
            .filter(|d| severity_level(&d.severity) >= severity_level(&min_severity))
            .collect();

        match self.format.as_str() {
            "json" => {
                let formatter = JsonFormatter::new(&engine);
                println!(
                    "{}",
                    formatter.format(&all_diagnostics, files.len(), &self.path.to_string_lossy())
                );
            }
            "text" => {
                for diag in &all_diagnostics {
                    println!(
                        "{}:{}:{}: [{}] {}",
                        diag.file, diag.line, diag.column, diag.rule_id, diag.message
                    );
                }
            }
            _ => {
                let formatter = PrettyFormatter::with_sources(sources);
                print!("{}", formatter.format(&all_diagnostics));
            }
        }

        let error_count = all_diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
            .count();
        let warning_count = all_diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
            .count();

        if error_count > 0 || (warning_count > 0 && self.fail_on_warnings) {
            process::exit(1);
        }

        Ok(())
    }

    /// Rewrite files whose diagnostics carry fixes; fixed diagnostics are
    /// removed from the result set.
    fn apply_fixes_in_place(
        &self,
        results: &mut Vec<(PathBuf, String, Vec<Diagnostic>)>,
    ) -> Result<usize> {
        let mut fixed_count = 0;

        for (path, content, diagnostics) in results.iter_mut() {
            let fixes: Vec<_> = diagnostics
                .iter()
                .flat_map(|d| d.fixes.iter().cloned())
                .collect();
            if fixes.is_empty() {
                continue;
            }

            let rewritten = apply_fixes(content, &fixes);
            if rewritten != *content {
                fs::write(path, &rewritten)?;
                fixed_count += diagnostics.iter().filter(|d| d.has_fix()).count();
                *content = rewritten;
                diagnostics.retain(|d| !d.has_fix());
            }
        }

        Ok(fixed_count)
    }

    fn parse_severity(&self) -> Result<Severity> {
        match self.severity.as_deref() {
            Some("error") => Ok(Severity::Error),
            Some("warning") => Ok(Severity::Warning),
            Some("info") => Ok(Severity::Info),
            Some("hint") | None => Ok(Severity::Hint),
            Some(other) => anyhow::bail!(
                "Invalid severity '{}'. Valid values: error, warning, info, hint",
                other
            ),
        }
    }
}

fn severity_level(severity: &Severity) -> u8 {
    match severity {
        Severity::Error => 4,
        Severity::Warning => 3,
        Severity::Info => 2,
        Severity::Hint => 1,
    }
}

fn discover_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
        entry
            .file_name()
            .to_str()
            .map(|name| !SKIPPED_DIRS.contains(&name))
            .unwrap_or(true)
    });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_supported = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false);
        if is_supported {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
