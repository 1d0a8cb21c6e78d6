//! Data model for a resume configuration.
//!
//! The model mirrors the configuration document one-to-one. Required
//! top-level sections are plain fields, so presence is enforced at
//! deserialization time; optional content uses `Option` or defaulted
//! collections. List order is rendering order and is preserved as given.

use serde::{Deserialize, Serialize};

/// Root resume configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeConfig {
    pub personal: Personal,
    pub contact: Contact,
    pub hero: Hero,
    pub experience: Experience,
    pub skills: Skills,
    pub projects: Projects,
    #[serde(default)]
    pub community: Option<Community>,
}

/// Identity block rendered at the top of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub location: String,
    pub description: String,
}

/// Contact channels. All values are raw addresses/URLs and are embedded
/// inside `\href` constructs, never escaped as prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
}

/// Hero section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub highlights: Vec<Highlight>,
}

/// A single highlight box: symbolic icon and color names plus a caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub color: String,
    pub name: String,
}

/// Work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub positions: Vec<Position>,
}

/// A single position. `period` is a free-form string; the detailed
/// renderer expects it to contain exactly one `" - "` separator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub role: String,
    pub company: String,
    pub company_url: String,
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Skills grouped into categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub description: String,
    pub experience: String,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
}

/// Personal projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projects {
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<ProjectLink>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Project link. A missing `is_private` key means public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLink {
    pub href: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_private: bool,
}

/// Optional community involvement section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub role: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}
