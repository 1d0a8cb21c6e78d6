//! Validate command - Check a resume configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use cvtex_config::{ConfigReader, ConfigValidator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the resume configuration (.yaml, .yml or .json)
    #[arg(short, long, default_value = "resume.yaml")]
    config: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating configuration: {:?}", args.config);

    println!("📋 Validating {}...", args.config.display());

    let config = ConfigReader::read(&args.config)?;
    let result = ConfigValidator::validate(&config);

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if result.valid {
        println!("   ✅ Configuration is valid");
        Ok(())
    } else {
        println!("   ❌ Configuration has errors:");
        for error in &result.errors {
            println!("      - {}", error);
        }
        anyhow::bail!("Validation failed with {} error(s)", result.errors.len())
    }
}
