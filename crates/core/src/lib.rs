//! AI CLI Core Library
//!
//! This crate provides the core functionality for ai-cli, a terminal tool for
//! finding and launching the AI assistants installed on a machine.
//!
//! # Key Features
//!
//! - **Executable Discovery**: Scan the search path and version manager roots
//!   for installed AI command-line tools
//! - **Pattern Classification**: Configurable exact/prefix/suffix rules with
//!   exclusions that always win
//! - **Configuration Management**: JSON configuration with API keys, custom
//!   tools, and detection patterns
//! - **Provider Probing**: Report configured chat backends and local Ollama
//!   models without network access
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Discovering the AI tools on the current search path:
//!
//! ```no_run
//! use ai_cli_core::config::AppConfig;
//! use ai_cli_core::discovery::{self, WhichResolver};
//!
//! let config = AppConfig::default();
//! let tools = discovery::discover(
//!     &discovery::current_search_path(),
//!     &config.rule_set(),
//!     &discovery::default_version_manager_roots(),
//!     &config.custom_tool_names(),
//!     &WhichResolver,
//! );
//! for tool in &tools {
//!     println!("{}: {}", tool.name, tool.absolute_path.display());
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod patterns;
pub mod providers;
