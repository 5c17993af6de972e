//! CLI interface for hebphonics
//!
//! Provides command-line utilities for parsing, syllabifying and analyzing
//! words, plus an interactive REPL.

pub mod args;
pub mod commands;
pub mod paths;
pub mod repl;

pub use args::{Cli, Commands, ConfigAction};
pub use paths::{config_dir, PersistentConfig};
