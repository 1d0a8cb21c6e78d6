//! Configuration validation utilities.
//!
//! Validation is limited to presence and shape checks. Anything the
//! renderers would reject at generation time (an unsplittable period
//! string, an empty link target) is surfaced here first so `cvtex
//! validate` can report every problem in one pass.

use crate::models::{Position, Project, ResumeConfig};

/// Period separator expected by the detailed experience renderer.
pub const PERIOD_SEPARATOR: &str = " - ";

/// Highlight entries beyond this count are dropped by the renderer.
pub const MAX_HIGHLIGHTS: usize = 8;

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for resume configurations.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an entire configuration.
    pub fn validate(config: &ResumeConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        if config.personal.name.is_empty() {
            result.add_error("personal.name cannot be empty");
        }

        if config.personal.title.is_empty() {
            result.add_error("personal.title cannot be empty");
        }

        if config.personal.tagline.is_none() {
            result.add_warning("personal.tagline is recommended");
        }

        if config.hero.highlights.is_empty() {
            result.add_error("hero.highlights cannot be empty");
        }

        if config.hero.highlights.len() > MAX_HIGHLIGHTS {
            result.add_warning(format!(
                "hero.highlights has {} entries; only the first {} are rendered",
                config.hero.highlights.len(),
                MAX_HIGHLIGHTS
            ));
        }

        if config.experience.positions.is_empty() {
            result.add_error("experience.positions cannot be empty");
        }

        for position in &config.experience.positions {
            result.merge(Self::validate_position(position));
        }

        if config.skills.categories.is_empty() {
            result.add_error("skills.categories cannot be empty");
        }

        if config.projects.items.is_empty() {
            result.add_error("projects.items cannot be empty");
        }

        for project in &config.projects.items {
            result.merge(Self::validate_project(project));
        }

        if let Some(community) = &config.community {
            if community.activities.is_empty() {
                result.add_warning("community is present but has no activities");
            }
        }

        result
    }

    /// Validate a single position.
    pub fn validate_position(position: &Position) -> ValidationResult {
        let mut result = ValidationResult::new();

        if position.role.is_empty() {
            result.add_error(format!(
                "Position at '{}' has empty role",
                position.company
            ));
        }

        if position.period.matches(PERIOD_SEPARATOR).count() != 1 {
            result.add_error(format!(
                "Position '{}' has period '{}' without exactly one '{}' separator",
                position.role, position.period, PERIOD_SEPARATOR
            ));
        }

        if position.achievements.is_empty() {
            result.add_warning(format!(
                "Position '{}' has no achievements",
                position.role
            ));
        }

        result
    }

    /// Validate a single project.
    pub fn validate_project(project: &Project) -> ValidationResult {
        let mut result = ValidationResult::new();

        if project.name.is_empty() {
            result.add_error("Project has empty name");
        }

        if let Some(link) = &project.link {
            if link.href.is_empty() {
                result.add_error(format!("Project '{}' has a link with empty href", project.name));
            }
        }

        result
    }
}
