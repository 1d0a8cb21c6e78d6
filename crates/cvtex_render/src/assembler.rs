//! Document assembly.
//!
//! Two strategies produce the final document: substituting rendered
//! fragments into an externally supplied template, or concatenating the
//! fragments between a built-in preamble and closing. Fragment order is
//! fixed here, not by renderer execution order.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use cvtex_config::ResumeConfig;

use crate::error::RenderResult;
use crate::sections::{
    render_community, render_experience, render_header, render_highlights,
    render_projects, render_skills, ExperienceStyle,
};

/// A logical resume section, in fixed render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Highlights,
    Experience,
    Skills,
    Projects,
    Community,
}

impl Section {
    /// The template placeholder name this section replaces.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Section::Header => "HEADER_CONTENT",
            Section::Highlights => "HIGHLIGHTS_CONTENT",
            Section::Experience => "EXPERIENCE_CONTENT",
            Section::Skills => "SKILLS_CONTENT",
            Section::Projects => "PROJECTS_CONTENT",
            Section::Community => "COMMUNITY_CONTENT",
        }
    }
}

/// Options controlling rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub experience_style: ExperienceStyle,
}

/// Assembles rendered section fragments into a complete document.
pub struct Assembler {
    options: RenderOptions,
    placeholder_pattern: Regex,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Assembler {
    /// Create a new assembler.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            // Match {{PLACEHOLDER_NAME}} tokens
            placeholder_pattern: Regex::new(r"\{\{([A-Z_][A-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render every section fragment in fixed order. The community entry
    /// is present only when the configuration carries that subtree.
    pub fn render_fragments(
        &self,
        config: &ResumeConfig,
    ) -> RenderResult<Vec<(Section, String)>> {
        let mut fragments = vec![
            (Section::Header, render_header(config)),
            (Section::Highlights, render_highlights(config)),
            (
                Section::Experience,
                render_experience(config, self.options.experience_style)?,
            ),
            (Section::Skills, render_skills(config)),
            (Section::Projects, render_projects(config)),
        ];

        if config.community.is_some() {
            fragments.push((Section::Community, render_community(config)));
        }

        Ok(fragments)
    }

    /// Assemble by substituting fragments into an external template.
    ///
    /// A single pass over the template: fragments are not re-scanned, so
    /// a fragment containing a placeholder-shaped string is left alone.
    /// Placeholders with no matching fragment stay in the output as-is.
    pub fn assemble_with_template(
        &self,
        config: &ResumeConfig,
        template: &str,
    ) -> RenderResult<String> {
        let fragments = self.render_fragments(config)?;
        let by_placeholder: HashMap<&str, String> = fragments
            .into_iter()
            .map(|(section, fragment)| (section.placeholder(), fragment))
            .collect();

        debug!("Substituting {} fragments into template", by_placeholder.len());

        let document = self
            .placeholder_pattern
            .replace_all(template, |caps: &regex::Captures| {
                by_placeholder
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .to_string();

        Ok(document)
    }

    /// Assemble against the built-in preamble, no external template.
    pub fn assemble_standalone(&self, config: &ResumeConfig) -> RenderResult<String> {
        let fragments = self.render_fragments(config)?;

        debug!("Assembling standalone document from {} fragments", fragments.len());

        let mut document = String::from(PREAMBLE);
        for (_, fragment) in &fragments {
            document.push('\n');
            document.push_str(fragment);
        }
        document.push('\n');
        document.push_str(CLOSING);

        Ok(document)
    }
}

/// Built-in preamble for standalone assembly. Defines every color token
/// the theme tables can resolve to and the section macros the renderers
/// emit.
pub const PREAMBLE: &str = r#"\documentclass[10pt,a4paper]{article}

\usepackage[margin=1.6cm]{geometry}
\usepackage[T1]{fontenc}
\usepackage[utf8]{inputenc}
\usepackage{xcolor}
\usepackage{fontawesome5}
\usepackage{enumitem}
\usepackage{titlesec}
\usepackage[hidelinks]{hyperref}

\definecolor{textdark}{HTML}{1F2937}
\definecolor{textgray}{HTML}{6B7280}
\definecolor{accentblue}{HTML}{2563EB}
\definecolor{accentgreen}{HTML}{16A34A}
\definecolor{accentpurple}{HTML}{9333EA}
\definecolor{accentorange}{HTML}{EA580C}
\definecolor{accentcyan}{HTML}{0891B2}
\definecolor{accentred}{HTML}{DC2626}
\definecolor{accentyellow}{HTML}{CA8A04}
\definecolor{accentpink}{HTML}{DB2777}

\titleformat{\section}{\large\bfseries\color{textdark}}{}{0em}{}[{\color{textgray}\titlerule}]
\titlespacing{\section}{0pt}{0.8em}{0.5em}

\setlist[itemize]{leftmargin=1.2em,itemsep=0.1em,topsep=0.2em}

\pagestyle{empty}
\setlength{\parindent}{0pt}

% One highlight box: icon command, color, caption
\newcommand{\highlightbox}[3]{%
  \begin{minipage}[t]{0.23\textwidth}
    \centering
    {\color{#2}#1}\\[0.2em]
    {\scriptsize\color{textdark}#3}%
  \end{minipage}}

% Detailed position heading: role, company, company URL, start, end
\newcommand{\position}[5]{%
  {\normalsize\bfseries\color{textdark}#1}\hfill{\scriptsize\color{textgray}#4 -- #5}\\
  {\small\color{accentblue}\href{#3}{#2}}\par\vspace{0.2em}}

% Compact position heading: role, company, company URL, period
\newcommand{\jobentry}[4]{%
  {\normalsize\bfseries\color{textdark}#1}\hfill{\scriptsize\color{textgray}#4}\\
  {\small\color{accentblue}\href{#3}{#2}}\par\vspace{0.2em}}

% Skill category: title, description, proficiency, experience, skills line
\newcommand{\skillcategory}[5]{%
  {\small\bfseries\color{textdark}#1}\hfill{\scriptsize\color{textgray}#3 \textbullet\ #4}\\
  {\scriptsize\color{textgray}#2}\\
  {\scriptsize\color{textdark}#5}\par\vspace{0.4em}}

% Project heading: name, description
\newcommand{\project}[2]{%
  {\small\bfseries\color{textdark}#1}\\
  {\small #2}\par\vspace{0.1em}}

% Community activity heading: title, role, duration, type
\newcommand{\activity}[4]{%
  {\small\bfseries\color{textdark}#1}\hfill{\scriptsize\color{textgray}#3}\\
  {\scriptsize\color{accentblue}#2 \textbullet\ #4}\par\vspace{0.2em}}

\begin{document}
"#;

/// Built-in closing for standalone assembly.
pub const CLOSING: &str = "\\end{document}\n";
