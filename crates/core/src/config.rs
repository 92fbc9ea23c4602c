//! JSON configuration store for the AI CLI.
//!
//! The configuration lives at `~/.ai-cli/config.json` and supplies API keys,
//! the tool detection patterns, and the custom/excluded tool lists. Every
//! field is optional; a missing file yields the defaults.

use std::collections::HashMap;
use std::fs::{self, File};
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::PatternRuleSet;

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.ai-cli/config.json";

/// Chat backends that can be configured with an API key
pub const KNOWN_PROVIDERS: [&str; 3] = ["claude", "gemini", "qwen"];

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Detection patterns for AI command-line tools.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ToolPatterns {
    #[serde(default = "default_exact_matches")]
    pub exact_matches: Vec<String>,
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub suffix_exclusions: Vec<String>,
}

fn default_exact_matches() -> Vec<String> {
    [
        "claude", "gemini", "qwen", "codex", "aider", "aichat", "chatgpt", "sgpt", "llm",
        "goose", "cody", "fabric", "ollama",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_prefixes() -> Vec<String> {
    ["gpt-", "llm-", "ai-"].iter().map(ToString::to_string).collect()
}

fn default_suffixes() -> Vec<String> {
    ["-ai", "-gpt", "-llm"].iter().map(ToString::to_string).collect()
}

impl Default for ToolPatterns {
    fn default() -> Self {
        Self {
            exact_matches: default_exact_matches(),
            prefixes: default_prefixes(),
            suffixes: default_suffixes(),
            suffix_exclusions: Vec::new(),
        }
    }
}

/// Status of a single chat backend, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderStatus {
    pub name: String,
    pub configured: bool,
    pub key_preview: String,
}

/// The on-disk configuration document.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
    #[serde(default)]
    pub ai_tool_patterns: ToolPatterns,
    #[serde(default)]
    pub excluded_cli_tools: Vec<String>,
    #[serde(default)]
    pub custom_cli_tools: Vec<String>,
}

impl AppConfig {
    /// Loads the configuration from the given path.
    ///
    /// A missing file yields the default configuration, since running without
    /// a config file is the common case.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or contains
    /// invalid JSON.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let reader = File::open(path)
            .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;

        serde_json::from_reader(reader).map_err(|e| {
            Error::json_error(
                "reading".to_string(),
                "config".to_string(),
                path.to_string(),
                e,
            )
        })
    }

    /// Writes the configuration to the given path, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;
        }

        let f = File::create(path)
            .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;

        serde_json::to_writer_pretty(f, self).map_err(|e| {
            Error::json_error(
                "writing".to_string(),
                "config".to_string(),
                path.to_string(),
                e,
            )
        })
    }

    /// Returns the API key for a provider.
    ///
    /// The `<PROVIDER>_API_KEY` environment variable takes precedence over
    /// the stored key.
    #[must_use]
    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        let env_name = format!("{}_API_KEY", provider.to_uppercase());
        if let Ok(key) = env::var(&env_name) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }

        self.api_keys.get(&provider.to_lowercase()).cloned()
    }

    /// Stores an API key for a provider. The caller is responsible for
    /// saving afterwards.
    pub fn set_api_key(&mut self, provider: &str, key: String) {
        self.api_keys.insert(provider.to_lowercase(), key);
    }

    /// Adds a custom CLI tool. Returns false if it was already present.
    pub fn add_custom_tool(&mut self, tool: &str) -> bool {
        if self.custom_cli_tools.iter().any(|t| t == tool) {
            return false;
        }

        self.custom_cli_tools.push(tool.to_string());
        true
    }

    /// Removes a custom CLI tool. Returns false if it was not present.
    pub fn remove_custom_tool(&mut self, tool: &str) -> bool {
        let before = self.custom_cli_tools.len();
        self.custom_cli_tools.retain(|t| t != tool);
        self.custom_cli_tools.len() != before
    }

    /// Reports the configuration status of every known provider.
    #[must_use]
    pub fn provider_status(&self) -> Vec<ProviderStatus> {
        KNOWN_PROVIDERS
            .iter()
            .map(|provider| {
                let key = self.get_api_key(provider);
                let configured = key.as_deref().is_some_and(|k| !k.trim().is_empty());
                let key_preview = match &key {
                    Some(k) if k.len() > 4 => {
                        let prefix: String = k.chars().take(4).collect();
                        format!("{prefix}...")
                    }
                    _ => "Not set".to_string(),
                };

                ProviderStatus {
                    name: (*provider).to_string(),
                    configured,
                    key_preview,
                }
            })
            .collect()
    }

    /// Builds the pattern rule set for one discovery scan.
    ///
    /// Rule entries are lowercased here so that classification can compare
    /// lowercased names directly.
    #[must_use]
    pub fn rule_set(&self) -> PatternRuleSet {
        fn lower(values: &[String]) -> impl Iterator<Item = String> + '_ {
            values.iter().map(|v| v.to_lowercase())
        }

        PatternRuleSet {
            exact: lower(&self.ai_tool_patterns.exact_matches).collect(),
            prefixes: lower(&self.ai_tool_patterns.prefixes).collect(),
            suffixes: lower(&self.ai_tool_patterns.suffixes).collect(),
            suffix_exclusions: lower(&self.ai_tool_patterns.suffix_exclusions).collect(),
            excluded_names: lower(&self.excluded_cli_tools).collect(),
        }
    }

    /// The custom tool names as a set, for discovery's opt-in check.
    #[must_use]
    pub fn custom_tool_names(&self) -> std::collections::HashSet<String> {
        self.custom_cli_tools.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.json".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.json");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.contains("config.json"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let config = AppConfig::load("/this/path/does/not/exist.json").unwrap();
        assert!(config.api_keys.is_empty());
        assert!(config.custom_cli_tools.is_empty());
        assert!(config
            .ai_tool_patterns
            .exact_matches
            .contains(&"claude".to_string()));
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{not json").unwrap();
        let result = AppConfig::load(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn test_load_partial_document_fills_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"custom_cli_tools": ["my-tool"]}}"#).unwrap();
        let config = AppConfig::load(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.custom_cli_tools, vec!["my-tool".to_string()]);
        assert!(!config.ai_tool_patterns.exact_matches.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir
            .path()
            .join("nested")
            .join("config.json")
            .to_str()
            .unwrap()
            .to_string();

        let mut config = AppConfig::default();
        config.set_api_key("Claude", "sk-test-key".to_string());
        config.add_custom_tool("my-tool");
        config.save(&path).unwrap();

        let reloaded = AppConfig::load(&path).unwrap();
        assert_eq!(
            reloaded.api_keys.get("claude"),
            Some(&"sk-test-key".to_string())
        );
        assert_eq!(reloaded.custom_cli_tools, vec!["my-tool".to_string()]);
    }

    #[test]
    fn test_get_api_key_env_var_takes_precedence() {
        let mut config = AppConfig::default();
        config.set_api_key("testprov", "from-file".to_string());

        env::set_var("TESTPROV_API_KEY", "from-env");
        assert_eq!(config.get_api_key("testprov"), Some("from-env".to_string()));
        env::remove_var("TESTPROV_API_KEY");

        assert_eq!(
            config.get_api_key("testprov"),
            Some("from-file".to_string())
        );
    }

    #[test]
    fn test_add_and_remove_custom_tool() {
        let mut config = AppConfig::default();

        assert!(config.add_custom_tool("my-tool"));
        assert!(!config.add_custom_tool("my-tool")); // already present
        assert!(config.remove_custom_tool("my-tool"));
        assert!(!config.remove_custom_tool("my-tool")); // already gone
    }

    #[test]
    fn test_provider_status_key_preview() {
        let mut config = AppConfig::default();
        config.set_api_key("claude", "sk-abcdef".to_string());

        let status = config.provider_status();
        let claude = status.iter().find(|s| s.name == "claude").unwrap();
        assert!(claude.configured);
        assert_eq!(claude.key_preview, "sk-a...");

        let gemini = status.iter().find(|s| s.name == "gemini").unwrap();
        assert!(!gemini.configured);
        assert_eq!(gemini.key_preview, "Not set");
    }

    #[test]
    fn test_rule_set_lowercases_entries() {
        let mut config = AppConfig::default();
        config.ai_tool_patterns.exact_matches = vec!["Claude".to_string()];
        config.excluded_cli_tools = vec!["Python".to_string()];

        let rules = config.rule_set();
        assert!(rules.exact.contains("claude"));
        assert!(rules.excluded_names.contains("python"));
    }
}
