//! Command implementations for kempt-cli

mod common;

pub mod check;
pub mod fix;
pub mod projects;

pub use check::run_check;
pub use fix::run_fix;
pub use projects::run_projects;
