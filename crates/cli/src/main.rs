use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};

use ai_cli::cli_args::{Args, Commands, KeysAction, ToolsAction};
use ai_cli::selection::{self, SelectableItem, Selection};
use ai_cli_core::config::{self, AppConfig, KNOWN_PROVIDERS};
use ai_cli_core::discovery::{self, CommandResolver, DiscoveredTool, WhichResolver};
use ai_cli_core::error::{Error, Result};
use ai_cli_core::execution::{self, OLLAMA_ROUTE_PREFIX};
use ai_cli_core::providers;

fn discover_tools(config: &AppConfig) -> Vec<DiscoveredTool> {
    discovery::discover(
        &discovery::current_search_path(),
        &config.rule_set(),
        &discovery::default_version_manager_roots(),
        &config.custom_tool_names(),
        &WhichResolver,
    )
}

/// Assembles the selectable list: local Ollama models first, then the
/// discovered CLI tools. Payloads are routing tokens for [`dispatch`].
fn build_items(config: &AppConfig) -> Vec<SelectableItem> {
    let mut items: Vec<SelectableItem> = Vec::new();

    for model in providers::ollama_models() {
        items.push(SelectableItem::new(
            format!("ollama:{model}"),
            format!("{OLLAMA_ROUTE_PREFIX}{model}"),
        ));
    }

    for tool in discover_tools(config) {
        items.push(SelectableItem::new(
            tool.name,
            tool.absolute_path.to_string_lossy().to_string(),
        ));
    }

    items
}

fn dispatch(item: &SelectableItem) -> Result<()> {
    if let Some(model) = item.payload.strip_prefix(OLLAMA_ROUTE_PREFIX) {
        execution::launch_ollama(model)
    } else {
        execution::launch(Path::new(&item.payload), &[])
    }
}

fn pick_and_launch(config: &AppConfig) -> Result<()> {
    let items = build_items(config);

    if items.is_empty() {
        println!("No AI tools were found on this system.");
        println!("Add one with `ai tools add <name>` or install a supported tool.");
        return Ok(());
    }

    match selection::select(items, "Select an AI tool to launch")? {
        Selection::Picked(item) => {
            info!("Selected `{}`", item.label);
            dispatch(&item)
        }
        Selection::Cancelled => {
            println!("Nothing selected.");
            Ok(())
        }
    }
}

fn run_named_tool(name: &str, args: &[String]) -> Result<()> {
    if let Some(model) = name.strip_prefix(OLLAMA_ROUTE_PREFIX) {
        return execution::launch_ollama(model);
    }

    let path = WhichResolver
        .resolve(name)
        .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;
    execution::launch(&path, args)
}

fn list_resources(config: &AppConfig) {
    let backends = providers::configured_backends(config);
    if backends.is_empty() {
        println!("Configured backends: none (see `ai keys set`)");
    } else {
        println!("Configured backends: {}", backends.iter().join(", "));
    }

    let models = providers::ollama_models();
    if !models.is_empty() {
        println!("Ollama models:");
        for model in &models {
            println!("  ollama:{model}");
        }
    }

    let tools = discover_tools(config);
    if tools.is_empty() {
        println!("No AI command-line tools were found on the search path.");
        return;
    }

    println!("Discovered tools:");
    let label_width = tools.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for tool in &tools {
        println!(
            "  {:<label_width$}  {}",
            tool.name,
            tool.absolute_path.display()
        );
    }
}

fn manage_tools(mut config: AppConfig, config_path: &str, action: ToolsAction) -> Result<()> {
    match action {
        ToolsAction::Add { name } => {
            if config.add_custom_tool(&name) {
                config.save(config_path)?;
                println!("Added `{name}` to custom tools.");
            } else {
                println!("`{name}` is already a custom tool.");
            }
        }
        ToolsAction::Remove { name } => {
            if config.remove_custom_tool(&name) {
                config.save(config_path)?;
                println!("Removed `{name}` from custom tools.");
            } else {
                println!("`{name}` is not a custom tool.");
            }
        }
    }

    Ok(())
}

fn manage_keys(mut config: AppConfig, config_path: &str, action: KeysAction) -> Result<()> {
    match action {
        KeysAction::Set { provider, key } => {
            let provider = provider.to_lowercase();
            if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
                return Err(Error::UnknownProvider(provider));
            }

            config.set_api_key(&provider, key);
            config.save(config_path)?;
            println!("Stored API key for `{provider}`.");
        }
        KeysAction::Status => {
            for status in config.provider_status() {
                let state = if status.configured {
                    "configured"
                } else {
                    "not configured"
                };
                println!("{:<8} {:<16} {}", status.name, state, status.key_preview);
            }
        }
    }

    Ok(())
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");
    let config = AppConfig::load(&config_path)?;

    match args.command {
        None => pick_and_launch(&config),
        Some(Commands::List) => {
            list_resources(&config);
            Ok(())
        }
        Some(Commands::Run { name, args }) => run_named_tool(&name, &args),
        Some(Commands::Tools { action }) => manage_tools(config, &config_path, action),
        Some(Commands::Keys { action }) => manage_keys(config, &config_path, action),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
