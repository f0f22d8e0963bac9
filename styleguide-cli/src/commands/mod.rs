//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the resolved configuration
//! - `validate`: Report configuration warnings
//! - `defaults`: Print the built-in defaults
//! - `detect`: Report the detected project type
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod defaults;
pub mod detect;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use defaults::DefaultsCommand;
pub use detect::DetectCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
