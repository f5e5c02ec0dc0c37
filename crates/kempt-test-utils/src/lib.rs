//! Shared test utilities for the kempt workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`memory`] — [`MemoryFolder`], an in-memory [`Folder`](kempt_fs::Folder)
//! - [`tree`] — [`TestTree`], a tempdir-backed tree builder for disk tests

pub mod memory;
pub mod tree;

pub use memory::MemoryFolder;
pub use tree::TestTree;
