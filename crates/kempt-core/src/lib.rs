//! Naming-convention engine for kempt
//!
//! This crate decides what every file and folder in a project should be
//! called, and repairs the ones that disagree:
//!
//! - **Casing engine**: named casings and dot-fragment formats applied
//!   deterministically to entry names
//! - **Glob and ignore matching**: which paths a rule or exclusion covers,
//!   with gitignore and plain-glob semantics
//! - **Project scanner**: depth-first walk honoring ignore rules and
//!   nested-project boundaries, resolving the first matching convention
//! - **Problem engine**: mismatch detection and safe renames with
//!   collision and ignore safeguards
//! - **Project registry**: multiple discovered projects with
//!   longest-root-wins ownership queries
//!
//! # Architecture
//!
//! `kempt-core` sits between the filesystem seam and the surfaces that
//! drive it:
//!
//! ```text
//!        CLI / editor integrations
//!                   |
//!               kempt-core
//!                   |
//!               kempt-fs
//!          (Folder trait + disk)
//! ```
//!
//! # Example
//!
//! ```
//! use kempt_core::{recase, NameFormat};
//!
//! let format = NameFormat::parse("kebab-case.lc")?;
//! assert_eq!(recase("MyComponent.RS", &format), "my-component.rs");
//! # Ok::<(), kempt_core::Error>(())
//! ```

pub mod casing;
pub mod config;
pub mod error;
pub mod format;
pub mod glob;
pub mod ignore;
pub mod problem;
pub mod project;
pub mod recase;
pub mod registry;

pub use casing::Casing;
pub use config::{CONFIG_FILE_NAME, Convention, ProjectConfig, ProjectSettings, RuleSet};
pub use error::{Error, Result};
pub use format::NameFormat;
pub use glob::Glob;
pub use ignore::{Ignorefile, IgnoreSemantics, ProjectIgnore};
pub use problem::{Problem, ProblemDetails, check, check_path, fix, problem_details};
pub use project::{LoadOptions, Project, SearchOptions};
pub use recase::recase;
pub use registry::ProjectRegistry;
