//! AI CLI Library
//!
//! This crate provides the command-line interface for ai-cli, a terminal tool
//! for finding and launching the AI assistants installed on a machine. It
//! handles the interactive selector, argument parsing, and dispatch to the
//! selected tool.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: Interactive raw-terminal list selection
//!
//! # Examples
//!
//! The CLI binary (`ai`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - pick a tool from everything installed
//! ai
//!
//! # Show what was found without launching anything
//! ai list
//!
//! # Launch a tool directly
//! ai run claude
//! ai run ollama:llama3
//!
//! # Always include a tool that the detection patterns would miss
//! ai tools add my-runner
//!
//! # Configure a backend API key
//! ai keys set claude sk-...
//! ```

pub mod cli_args;
pub mod selection;
