//! Availability probing for chat backends and local Ollama models.
//!
//! No network calls happen here: backend availability is key presence in the
//! configuration, and Ollama models are read from the local `ollama list`
//! subprocess.

use std::process::Command;

use log::debug;

use crate::config::{AppConfig, KNOWN_PROVIDERS};

/// Names of the chat backends that have an API key configured.
#[must_use]
pub fn configured_backends(config: &AppConfig) -> Vec<String> {
    KNOWN_PROVIDERS
        .iter()
        .filter(|provider| {
            config
                .get_api_key(provider)
                .is_some_and(|key| !key.trim().is_empty())
        })
        .map(ToString::to_string)
        .collect()
}

/// Locally installed Ollama models, or an empty list if Ollama is not
/// installed or not running.
#[must_use]
pub fn ollama_models() -> Vec<String> {
    let output = match Command::new("ollama").arg("list").output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!("`ollama list` exited with {}", output.status);
            return Vec::new();
        }
        Err(e) => {
            debug!("Ollama is not available: {e}");
            return Vec::new();
        }
    };

    parse_ollama_list(&String::from_utf8_lossy(&output.stdout))
}

/// Parses `ollama list` output: one model per line, name in the first
/// column, header line skipped.
#[must_use]
pub fn parse_ollama_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ollama_list_skips_header() {
        let stdout = "NAME            ID              SIZE    MODIFIED\n\
                      llama3:latest   365c0bd3c000    4.7 GB  2 days ago\n\
                      mistral:7b      61e88e884507    4.1 GB  3 weeks ago\n";

        let models = parse_ollama_list(stdout);
        assert_eq!(models, vec!["llama3:latest", "mistral:7b"]);
    }

    #[test]
    fn test_parse_ollama_list_empty_output() {
        assert!(parse_ollama_list("").is_empty());
        assert!(parse_ollama_list("NAME  ID  SIZE  MODIFIED\n").is_empty());
    }

    #[test]
    fn test_parse_ollama_list_ignores_blank_lines() {
        let stdout = "NAME  ID  SIZE  MODIFIED\n\nllama3:latest  abc  4 GB  now\n";
        assert_eq!(parse_ollama_list(stdout), vec!["llama3:latest"]);
    }

    #[test]
    fn test_configured_backends_reflects_api_keys() {
        let mut config = AppConfig::default();
        assert!(configured_backends(&config).is_empty());

        config.set_api_key("claude", "sk-test".to_string());
        config.set_api_key("qwen", "   ".to_string()); // blank keys don't count
        assert_eq!(configured_backends(&config), vec!["claude"]);
    }
}
