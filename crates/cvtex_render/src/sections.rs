//! Section renderers.
//!
//! Each renderer is a pure function from the configuration to one LaTeX
//! fragment. Prose fields are escaped; URLs, email addresses and link
//! labels are embedded raw inside `\href` constructs. Every fragment
//! opens with a fixed `% <Name> Section` comment so regenerated output
//! diffs cleanly.

use cvtex_config::validator::{MAX_HIGHLIGHTS, PERIOD_SEPARATOR};
use cvtex_config::{Position, ResumeConfig};

use crate::error::{RenderError, RenderResult};
use crate::escape::escape;
use crate::theme::{color_token, icon_command};

/// Visible separator glyph for technology and skill lists.
pub const BULLET: &str = " \u{2022} ";

/// Highlight boxes rendered per row.
const HIGHLIGHTS_PER_ROW: usize = 4;

/// How the experience section lays out each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceStyle {
    /// Five-argument `\position` heading with the period split into start
    /// and end, plus the optional description paragraph.
    #[default]
    Detailed,
    /// Four-argument `\jobentry` heading with the period kept verbatim and
    /// no description paragraph.
    Compact,
}

/// Render the header section: identity block, contact line, summary.
pub fn render_header(config: &ResumeConfig) -> String {
    let personal = &config.personal;
    let contact = &config.contact;

    let mut header = String::from("% Header Section\n");
    header.push_str(&format!(
        "{{\\Large\\bfseries\\color{{textdark}} {}}}\n\n",
        escape(&personal.name)
    ));
    header.push_str(&format!(
        "\\vspace{{0.1em}}\n{{\\normalsize\\color{{textgray}} {}}}\n\n",
        escape(&personal.title)
    ));

    if let Some(tagline) = &personal.tagline {
        header.push_str(&format!(
            "\\vspace{{0.1em}}\n{{\\small\\color{{textdark}}\\textit{{{}}}}}\n\n",
            escape(tagline)
        ));
    }

    header.push_str(&format!(
        "\\vspace{{0.1em}}\n{{\\small\\color{{textgray}} {}}}\n\n",
        escape(&personal.location)
    ));

    header.push_str(&format!(
        "\\vspace{{0.3em}}\n{{\\scriptsize\\color{{accentblue}}\n\
         \x20   \\faEnvelope\\ \\href{{mailto:{email}}}{{{email}}} \\quad\n\
         \x20   \\faGlobe\\ \\href{{{website}}}{{{website_label}}} \\quad\n\
         \x20   \\faGithub\\ \\href{{{github}}}{{{github_label}}} \\quad\n\
         \x20   \\faLinkedin\\ \\href{{{linkedin}}}{{{linkedin_label}}}\n}}\n\n",
        email = contact.email,
        website = contact.website,
        website_label = short_label(&contact.website),
        github = contact.github,
        github_label = short_label(&contact.github),
        linkedin = contact.linkedin,
        linkedin_label = short_label(&contact.linkedin),
    ));

    header.push_str(&format!(
        "\\vspace{{0.8em}}\n{{\\small {}}}\n",
        escape(&personal.description)
    ));

    header
}

/// Render the highlights grid: rows of four boxes, first eight entries.
pub fn render_highlights(config: &ResumeConfig) -> String {
    let boxes: Vec<String> = config
        .hero
        .highlights
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(|highlight| {
            format!(
                "\\highlightbox{{{}}}{{{}}}{{{}}}",
                icon_command(&highlight.icon),
                color_token(&highlight.color),
                escape(&highlight.name)
            )
        })
        .collect();

    let rows: Vec<String> = boxes
        .chunks(HIGHLIGHTS_PER_ROW)
        .map(|row| row.join("\\hfill"))
        .collect();

    format!(
        "% Highlights Section\n{}\n",
        rows.join("\\\\\\\\\n\\vspace{0.4em}\n")
    )
}

/// Render the experience section in the requested style.
pub fn render_experience(
    config: &ResumeConfig,
    style: ExperienceStyle,
) -> RenderResult<String> {
    let mut content = String::from("% Experience Section\n\\section{Experience}\n\n");

    for position in &config.experience.positions {
        match style {
            ExperienceStyle::Detailed => {
                let (start, end) = split_period(position)?;
                content.push_str(&format!(
                    "\\position{{{}}}{{{}}}{{{}}}{{{}}}{{{}}}\n\n",
                    escape(&position.role),
                    escape(&position.company),
                    position.company_url,
                    escape(&start),
                    escape(&end),
                ));

                if let Some(description) = &position.description {
                    content.push_str(&format!("{{\\small {}}}\n\n", escape(description)));
                }
            }
            ExperienceStyle::Compact => {
                content.push_str(&format!(
                    "\\jobentry{{{}}}{{{}}}{{{}}}{{{}}}\n\n",
                    escape(&position.role),
                    escape(&position.company),
                    position.company_url,
                    escape(&position.period),
                ));
            }
        }

        if !position.achievements.is_empty() {
            content.push_str(&itemize(&position.achievements));
            content.push('\n');
        }

        if !position.technologies.is_empty() {
            let technologies: Vec<String> =
                position.technologies.iter().map(|tech| escape(tech)).collect();
            content.push_str(&format!(
                "{{\\scriptsize\\color{{textgray}} Technologies: {}}}\n\n",
                technologies.join(BULLET)
            ));
        }

        content.push_str("\\vspace{0.5em}\n\n");
    }

    Ok(content)
}

/// Render the skills section: one `\skillcategory` per category.
pub fn render_skills(config: &ResumeConfig) -> String {
    let mut content = String::from("% Skills Section\n\\section{Skills}\n\n");

    for category in &config.skills.categories {
        let skills: Vec<String> = category
            .skills
            .iter()
            .map(|skill| escape(&skill.name))
            .collect();

        content.push_str(&format!(
            "\\skillcategory\n\
             \x20   {{{}}}\n\
             \x20   {{{}}}\n\
             \x20   {{Expert}}\n\
             \x20   {{{}}}\n\
             \x20   {{{}}}\n\n",
            escape(&category.title),
            escape(&category.description),
            escape(&category.experience),
            skills.join(BULLET),
        ));
    }

    content
}

/// Render the projects section.
pub fn render_projects(config: &ResumeConfig) -> String {
    let mut content = String::from("% Projects Section\n\\section{Projects}\n\n");

    for project in &config.projects.items {
        content.push_str(&format!(
            "\\project{{{}}}{{{}}}\n\n",
            escape(&project.name),
            escape(&project.description),
        ));

        if let Some(link) = &project.link {
            let label = link.label.as_deref().unwrap_or("View project");
            let visibility = if link.is_private { "Private" } else { "Public" };
            content.push_str(&format!(
                "{{\\scriptsize\\color{{accentblue}} \\faLink\\ \\href{{{}}}{{{}}}}} \\quad \
                 {{\\scriptsize\\color{{textgray}} [{}]}}\n\n",
                link.href, label, visibility
            ));
        }

        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|tag| escape(tag)).collect();
            content.push_str(&format!(
                "{{\\scriptsize\\color{{textgray}} {}}}\n\n",
                tags.join(", ")
            ));
        }

        if !project.highlights.is_empty() {
            content.push_str(&itemize(&project.highlights));
            content.push('\n');
        }

        content.push_str("\\vspace{0.4em}\n\n");
    }

    content
}

/// Render the community section, or an empty fragment when the subtree
/// is absent.
pub fn render_community(config: &ResumeConfig) -> String {
    let Some(community) = &config.community else {
        return String::new();
    };

    let mut content = String::from("% Community Section\n\\section{Community}\n\n");

    for activity in &community.activities {
        content.push_str(&format!(
            "\\activity{{{}}}{{{}}}{{{}}}{{{}}}\n\n",
            escape(&activity.title),
            escape(&activity.role),
            escape(&activity.duration),
            escape(&activity.kind),
        ));

        content.push_str(&format!("{{\\small {}}}\n\n", escape(&activity.description)));

        if !activity.achievements.is_empty() {
            content.push_str(&itemize(&activity.achievements));
            content.push('\n');
        }

        content.push_str("\\vspace{0.5em}\n\n");
    }

    content
}

/// Split a period string into start and end on its single `" - "`
/// separator. Zero or multiple occurrences fail the run.
fn split_period(position: &Position) -> RenderResult<(String, String)> {
    let parts: Vec<&str> = position.period.split(PERIOD_SEPARATOR).collect();
    match parts.as_slice() {
        [start, end] => Ok((start.to_string(), end.to_string())),
        _ => Err(RenderError::MalformedPeriod {
            company: position.company.clone(),
            period: position.period.clone(),
        }),
    }
}

/// Render an escaped `itemize` list.
fn itemize(items: &[String]) -> String {
    let mut list = String::from("\\begin{itemize}\n");
    for item in items {
        list.push_str(&format!("    \\item {}\n", escape(item)));
    }
    list.push_str("\\end{itemize}\n");
    list
}

/// Shorten a URL for display: strip the scheme, a leading `www.` and any
/// trailing slash. The result is used as a link label and is not escaped.
fn short_label(url: &str) -> String {
    let label = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let label = label.strip_prefix("www.").unwrap_or(label);
    label.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvtex_config::ConfigReader;

    fn sample_config() -> ResumeConfig {
        ConfigReader::from_yaml(
            r#"
personal:
  name: Jane Doe
  title: Platform Engineer
  tagline: Building invisible infrastructure
  location: New York, NY
  description: Leads a platform team.
contact:
  email: jane@example.com
  website: https://www.example.com/
  github: https://github.com/jane
  linkedin: https://linkedin.com/in/jane
hero:
  highlights:
    - { icon: Users, color: green, name: Team Management }
    - { icon: Layers, color: purple, name: Distributed Systems }
    - { icon: Activity, color: orange, name: API Architecture }
    - { icon: Code, color: cyan, name: Full-Stack Development }
    - { icon: Crown, color: blue, name: Leadership }
experience:
  positions:
    - role: Team Lead
      company: Acme & Co
      company_url: https://acme.example
      period: 2020-01 - 2023-06
      description: Led the platform group.
      achievements:
        - Scaled deploys 10x
      technologies:
        - Rust
        - Kubernetes
skills:
  categories:
    - title: Infrastructure
      description: Platform tooling
      experience: 8+ years
      skills:
        - name: Terraform
        - name: Docker
projects:
  items:
    - name: homelab
      description: Self-hosted lab.
      link:
        href: https://github.com/jane/homelab
        is_private: true
      tags:
        - Infrastructure
        - GPU Computing
    - name: dotfiles
      description: Editor and shell setup.
      link:
        href: https://github.com/jane/dotfiles
      highlights:
        - Unified macOS and Linux environments
    - name: notes
      description: Plain-text knowledge base.
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_header_contains_escaped_identity() {
        let mut config = sample_config();
        config.personal.name = "Jane & Joe".to_string();
        let header = render_header(&config);

        assert!(header.starts_with("% Header Section\n"));
        assert!(header.contains("Jane \\& Joe"));
        assert!(header.contains("\\href{mailto:jane@example.com}{jane@example.com}"));
        // Labels are canonicalized, not escaped.
        assert!(header.contains("\\href{https://www.example.com/}{example.com}"));
        assert!(header.contains("{github.com/jane}"));
    }

    #[test]
    fn test_header_omits_absent_tagline() {
        let mut config = sample_config();
        config.personal.tagline = None;
        let header = render_header(&config);
        assert!(!header.contains("\\textit"));
    }

    #[test]
    fn test_highlights_rows_of_four() {
        let fragment = render_highlights(&sample_config());

        assert_eq!(fragment.matches("\\highlightbox").count(), 5);
        // Five boxes split 4 + 1, one row separator.
        assert_eq!(fragment.matches("\\vspace{0.4em}").count(), 1);
        assert_eq!(fragment.matches("\\hfill").count(), 3);
        assert!(fragment.contains("\\highlightbox{\\faUsers}{accentgreen}{Team Management}"));
    }

    #[test]
    fn test_highlights_cap_at_eight() {
        let mut config = sample_config();
        let template = config.hero.highlights[0].clone();
        config.hero.highlights = (1..=10)
            .map(|i| {
                let mut highlight = template.clone();
                highlight.name = format!("Highlight {}", i);
                highlight
            })
            .collect();

        let fragment = render_highlights(&config);

        assert_eq!(fragment.matches("\\highlightbox").count(), 8);
        assert!(fragment.contains("Highlight 8"));
        assert!(!fragment.contains("Highlight 9"));
        assert!(!fragment.contains("Highlight 10"));
    }

    #[test]
    fn test_experience_detailed_splits_period() {
        let fragment =
            render_experience(&sample_config(), ExperienceStyle::Detailed).unwrap();

        assert!(fragment.contains(
            "\\position{Team Lead}{Acme \\& Co}{https://acme.example}{2020-01}{2023-06}"
        ));
        assert!(fragment.contains("{\\small Led the platform group.}"));
        assert!(fragment.contains("    \\item Scaled deploys 10x"));
        assert!(fragment.contains("Technologies: Rust \u{2022} Kubernetes"));
    }

    #[test]
    fn test_experience_compact_keeps_period_verbatim() {
        let fragment =
            render_experience(&sample_config(), ExperienceStyle::Compact).unwrap();

        assert!(fragment.contains(
            "\\jobentry{Team Lead}{Acme \\& Co}{https://acme.example}{2020-01 - 2023-06}"
        ));
        assert!(!fragment.contains("Led the platform group."));
    }

    #[test]
    fn test_experience_malformed_period_fails() {
        let mut config = sample_config();
        config.experience.positions[0].period = "2020 to 2023".to_string();

        let result = render_experience(&config, ExperienceStyle::Detailed);
        assert!(matches!(
            result,
            Err(RenderError::MalformedPeriod { .. })
        ));

        // The compact style never splits, so the same config renders.
        assert!(render_experience(&config, ExperienceStyle::Compact).is_ok());
    }

    #[test]
    fn test_experience_omits_empty_optionals() {
        let mut config = sample_config();
        let position = &mut config.experience.positions[0];
        position.description = None;
        position.achievements.clear();
        position.technologies.clear();

        let fragment =
            render_experience(&config, ExperienceStyle::Detailed).unwrap();

        assert!(!fragment.contains("\\begin{itemize}"));
        assert!(!fragment.contains("Technologies:"));
        assert!(!fragment.contains("{\\small "));
    }

    #[test]
    fn test_skills_fixed_proficiency_and_bullets() {
        let fragment = render_skills(&sample_config());

        assert!(fragment.starts_with("% Skills Section\n\\section{Skills}"));
        assert!(fragment.contains("{Expert}"));
        assert!(fragment.contains("{Terraform \u{2022} Docker}"));
        assert!(fragment.contains("{8+ years}"));
    }

    #[test]
    fn test_projects_visibility_tags() {
        let fragment = render_projects(&sample_config());

        // homelab: private link.
        assert!(fragment.contains("\\href{https://github.com/jane/homelab}{View project}"));
        assert!(fragment.contains("[Private]"));
        // dotfiles: public link with highlights list.
        assert!(fragment.contains("[Public]"));
        assert!(fragment.contains("    \\item Unified macOS and Linux environments"));
        // tags joined comma-space.
        assert!(fragment.contains("Infrastructure, GPU Computing"));
    }

    #[test]
    fn test_project_without_link_has_no_tag() {
        let fragment = render_projects(&sample_config());

        // The notes project has no link: name and description only.
        assert!(fragment.contains("\\project{notes}{Plain-text knowledge base.}"));
        let notes_fragment = fragment.split("\\project{notes}").nth(1).unwrap();
        assert!(!notes_fragment.contains("View project"));
        assert!(!notes_fragment.contains("[Private]"));
        assert!(!notes_fragment.contains("[Public]"));
    }

    #[test]
    fn test_community_absent_renders_empty() {
        assert_eq!(render_community(&sample_config()), "");
    }

    #[test]
    fn test_community_present_renders_activities() {
        let mut config = sample_config();
        config.community = Some(
            serde_yaml::from_str(
                r#"
activities:
  - title: Rust Meetup
    role: Organizer
    duration: 3 years
    type: Community
    description: Monthly sessions.
    achievements:
      - Grew attendance to 200
"#,
            )
            .unwrap(),
        );

        let fragment = render_community(&config);

        assert!(fragment.starts_with("% Community Section\n\\section{Community}"));
        assert!(fragment.contains("\\activity{Rust Meetup}{Organizer}{3 years}{Community}"));
        assert!(fragment.contains("    \\item Grew attendance to 200"));
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("https://www.example.com/"), "example.com");
        assert_eq!(short_label("http://github.com/jane"), "github.com/jane");
        assert_eq!(short_label("linkedin.com/in/jane"), "linkedin.com/in/jane");
    }
}
