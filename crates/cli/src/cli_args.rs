//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `ai`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the ai-cli tool.
///
/// Without a subcommand, the interactive picker runs: it assembles local
/// Ollama models and discovered AI command-line tools into one list and
/// launches whatever the user selects.
#[derive(Parser, Debug)]
#[command(name = "ai", term_width = 0)]
pub struct Args {
    /// Path to the JSON configuration file.
    ///
    /// If not provided, defaults to `~/.ai-cli/config.json`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured backends, local Ollama models and discovered CLI tools.
    List,

    /// Launch a tool by name, bypassing the interactive picker.
    Run {
        /// Tool name (resolved on the current search path) or `ollama:<model>`.
        name: String,

        /// Arguments passed through to the tool.
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Manage custom CLI tools that discovery always includes.
    Tools {
        #[command(subcommand)]
        action: ToolsAction,
    },

    /// Manage API keys for the chat backends.
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ToolsAction {
    /// Add a tool name to the custom list.
    Add { name: String },
    /// Remove a tool name from the custom list.
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
pub enum KeysAction {
    /// Store an API key for a provider (claude, gemini or qwen).
    Set { provider: String, key: String },
    /// Show which providers have a key configured.
    Status,
}
