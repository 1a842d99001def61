//! immut CLI - Command-line interface for the immut mutability analyzer
//!
//! Scope-aware mutability analyzer for JavaScript and TypeScript.

mod commands;
mod output;

use clap::Parser;
use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "immut",
    author,
    version,
    about = "Scope-aware mutability analyzer for JavaScript and TypeScript",
    long_about = "immut finds `let` bindings that are never reassigned and rewrites them\n\
                  to `const`, reasoning about scopes, destructuring patterns, and\n\
                  cross-scope initialization so every suggested fix is behavior-preserving."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Init(args) => args.run(),
        Commands::Explain(args) => args.run(),
    }
}
