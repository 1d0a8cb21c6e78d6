//! Generate command - Render the LaTeX resume.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use cvtex_config::{ConfigReader, ConfigValidator};
use cvtex_render::{Assembler, ExperienceStyle, RenderOptions};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the resume configuration (.yaml, .yml or .json)
    #[arg(short, long, default_value = "resume.yaml")]
    config: PathBuf,

    /// External LaTeX template with {{SECTION}} placeholders; omit to
    /// assemble against the built-in preamble
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output path for the generated LaTeX source
    #[arg(short, long, default_value = "resume.tex")]
    output: PathBuf,

    /// Experience section layout
    #[arg(long, value_enum, default_value = "detailed")]
    experience_style: ExperienceStyleArg,

    /// Print the document to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExperienceStyleArg {
    /// Split each period into start and end, include descriptions
    Detailed,
    /// Keep periods verbatim, omit descriptions
    Compact,
}

impl From<ExperienceStyleArg> for ExperienceStyle {
    fn from(style: ExperienceStyleArg) -> Self {
        match style {
            ExperienceStyleArg::Detailed => ExperienceStyle::Detailed,
            ExperienceStyleArg::Compact => ExperienceStyle::Compact,
        }
    }
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    info!("Generating resume from {:?}", args.config);

    let config = ConfigReader::read(&args.config)?;

    let result = ConfigValidator::validate(&config);
    for warning in &result.warnings {
        println!("⚠️  {}", warning);
    }
    if !result.valid {
        for error in &result.errors {
            eprintln!("   - {}", error);
        }
        anyhow::bail!("Configuration validation failed");
    }

    let assembler = Assembler::new(RenderOptions {
        experience_style: args.experience_style.into(),
    });

    let document = match &args.template {
        Some(template_path) => {
            let template = ConfigReader::read_template(template_path)?;
            assembler.assemble_with_template(&config, &template)?
        }
        None => assembler.assemble_standalone(&config)?,
    };

    if args.stdout {
        print!("{}", document);
    } else {
        fs::write(&args.output, &document)
            .with_context(|| format!("Failed to write {:?}", args.output))?;
        println!("✅ Resume LaTeX generated: {}", args.output.display());
    }

    Ok(())
}
