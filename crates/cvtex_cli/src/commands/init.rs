//! Init command - Write a starter resume configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing resume.yaml
    #[arg(short, long)]
    force: bool,
}

pub fn execute(args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    info!("Initializing resume configuration at {:?}", path);

    let config_path = path.join("resume.yaml");
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::create_dir_all(&path)?;
    fs::write(&config_path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    println!("✅ Starter configuration written!");
    println!();
    println!("Created:");
    println!("  📄 {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} with your own details", config_path.display());
    println!("  2. cvtex generate --config {}", config_path.display());

    Ok(())
}

/// Starter configuration written by `cvtex init`.
const STARTER_CONFIG: &str = r#"# cvtex resume configuration
#
# Required sections: personal, contact, hero, experience, skills, projects.
# The community section is optional and is omitted from the output when
# missing.

personal:
  name: Jane Doe
  title: Platform Engineer
  # tagline is optional
  tagline: Building invisible infrastructure
  location: Berlin, Germany
  description: >-
    Engineer with a decade of experience designing developer platforms
    and the teams that run them.

contact:
  email: jane@example.com
  website: https://example.com
  github: https://github.com/jane
  linkedin: https://linkedin.com/in/jane

hero:
  # Up to 8 highlights are rendered, four per row.
  # Icons: Users, Layers, Activity, Code, Crown, CheckSquare, Package,
  # Palette, Zap, Database, Network, Server, Settings, Cog, Box, Calendar,
  # Tasks, GraduationCap, Heart, PlayCircle, Home.
  # Colors: blue, green, purple, orange, cyan, red, yellow, pink, gray.
  highlights:
    - icon: Users
      color: green
      name: Team Management
    - icon: Layers
      color: purple
      name: Distributed Systems
    - icon: Code
      color: cyan
      name: Full-Stack Development
    - icon: Server
      color: blue
      name: Platform Engineering

experience:
  positions:
    - role: Platform Engineering Lead
      company: Acme Corp
      company_url: https://acme.example
      # period must contain exactly one " - " separator
      period: 2020-01 - Present
      description: >-
        Led the platform group through a migration to Kubernetes.
      achievements:
        - Cut deployment time from hours to minutes
        - Grew the team from 3 to 9 engineers
      technologies:
        - Rust
        - Kubernetes
        - Terraform

skills:
  categories:
    - title: Infrastructure
      description: Container orchestration and infrastructure as code
      experience: 8+ years
      skills:
        - name: Kubernetes
        - name: Terraform
        - name: Docker
    - title: Languages
      description: Daily drivers
      experience: 10+ years
      skills:
        - name: Rust
        - name: Go

projects:
  items:
    - name: Home Lab
      description: Self-hosted infrastructure for experimentation.
      link:
        href: https://github.com/jane/homelab
        is_private: true
      tags:
        - Infrastructure
        - Automation
    - name: Dotfiles
      description: Reproducible development environment setup.
      link:
        href: https://github.com/jane/dotfiles
      highlights:
        - Unified configuration across macOS and Linux

# community:
#   activities:
#     - title: Rust Meetup
#       role: Organizer
#       duration: 3 years
#       type: Community
#       description: Monthly talks and workshops.
#       achievements:
#         - Grew attendance to 200+
"#;
