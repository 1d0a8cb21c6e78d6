//! # cvtex_render
//!
//! LaTeX escaping, section rendering and document assembly for cvtex.
//!
//! The pipeline is pure: section renderers map a parsed configuration to
//! LaTeX fragments, and the assembler combines the fragments into one
//! document, either by substituting `{{PLACEHOLDER}}` tokens in an
//! external template or by concatenating against a built-in preamble.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cvtex_config::ConfigReader;
//! use cvtex_render::{Assembler, RenderOptions};
//!
//! let config = ConfigReader::read("resume.yaml").unwrap();
//! let assembler = Assembler::new(RenderOptions::default());
//!
//! let document = assembler.assemble_standalone(&config).unwrap();
//! println!("{}", document);
//! ```

pub mod assembler;
pub mod error;
pub mod escape;
pub mod sections;
pub mod theme;

pub use assembler::{Assembler, RenderOptions, Section, CLOSING, PREAMBLE};
pub use error::{RenderError, RenderResult};
pub use escape::{escape, escape_opt};
pub use sections::ExperienceStyle;
