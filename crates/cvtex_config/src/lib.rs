//! # cvtex_config
//!
//! Resume configuration loading and validation for cvtex.
//!
//! This crate owns the configuration side of the pipeline: the data model
//! for a resume document, file readers for YAML and JSON, and a presence
//! validator with human-readable diagnostics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cvtex_config::{ConfigReader, ConfigValidator};
//!
//! let config = ConfigReader::read("resume.yaml").unwrap();
//!
//! let result = ConfigValidator::validate(&config);
//! if !result.valid {
//!     for error in &result.errors {
//!         eprintln!("Error: {}", error);
//!     }
//! }
//! ```

pub mod error;
pub mod models;
pub mod reader;
pub mod validator;

pub use error::{ConfigError, ConfigResult};
pub use models::*;
pub use reader::ConfigReader;
pub use validator::{ConfigValidator, ValidationResult};
