//! CLI command definitions.
//!
//! This module defines the command structure for the cvtex CLI.

use clap::{Parser, Subcommand};

pub mod generate;
pub mod init;
pub mod validate;

/// cvtex - resume configuration to LaTeX generator
#[derive(Parser)]
#[command(name = "cvtex")]
#[command(version, about = "cvtex - resume configuration to LaTeX generator")]
#[command(long_about = r#"
cvtex converts a structured resume configuration (YAML or JSON) into LaTeX
resume source, either against a built-in preamble or by substituting
{{SECTION}} placeholders in an external template.

WORKFLOWS:
  init      → Write a starter resume configuration
  generate  → Render the LaTeX resume from a configuration
  validate  → Check a configuration for missing or malformed fields

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Configuration error
  5 - Render error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the LaTeX resume from a configuration
    Generate(generate::GenerateArgs),

    /// Validate a resume configuration
    Validate(validate::ValidateArgs),

    /// Write a starter resume configuration
    Init(init::InitArgs),
}
