//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// kempt - Enforce and repair file and folder naming conventions
#[derive(Parser, Debug)]
#[command(name = "kempt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report entries whose names break their conventions
    ///
    /// Scans the project for files and folders that do not follow the
    /// rules in .kempt.toml. Exits 1 when problems are found.
    ///
    /// Examples:
    ///   kempt check                  # Check the whole project
    ///   kempt check 'src/**/*.rs'    # Check a subset
    ///   kempt check --json           # Machine-readable report
    Check {
        /// Globs limiting the scan, relative to the working directory
        globs: Vec<String>,

        /// Project root (defaults to searching upward from the working
        /// directory)
        #[arg(short = 'P', long)]
        project: Option<String>,

        /// Extra ignore files to honor, relative to the project root
        #[arg(long = "ignore-path")]
        ignore_paths: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Rename entries to the names their conventions expect
    ///
    /// Applies every fix `check` would report. A fix that collides with
    /// an existing entry is reported and skipped; the batch continues.
    /// Exits 1 when any problem remains unfixed.
    Fix {
        /// Globs limiting the scan, relative to the working directory
        globs: Vec<String>,

        /// Project root (defaults to searching upward from the working
        /// directory)
        #[arg(short = 'P', long)]
        project: Option<String>,

        /// Extra ignore files to honor, relative to the project root
        #[arg(long = "ignore-path")]
        ignore_paths: Vec<String>,

        /// When a rename may replace an existing entry
        ///
        /// `auto` permits it only for case-only renames, which
        /// case-insensitive filesystems report as conflicts.
        #[arg(long, value_enum, default_value_t = Overwrite::Auto)]
        overwrite: Overwrite,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Discover and list project roots under a directory
    Projects {
        /// Directory to search from
        #[arg(default_value = ".")]
        dir: String,

        /// How many folder levels to search
        #[arg(long, default_value_t = 8)]
        depth: usize,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   kempt completions bash > ~/.local/share/bash-completion/completions/kempt
    ///   kempt completions zsh > ~/.zfunc/_kempt
    ///   kempt completions fish > ~/.config/fish/completions/kempt.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Policy for renames whose destination already exists.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Overwrite only when old and new names differ by case alone
    Auto,
    /// Always overwrite the destination
    Always,
    /// Never overwrite; report a conflict instead
    Never,
}
