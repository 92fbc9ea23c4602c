//! Subprocess launch for selected tools.

use std::path::Path;
use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Payload prefix that routes a selection to a local Ollama model instead of
/// an executable path.
pub const OLLAMA_ROUTE_PREFIX: &str = "ollama:";

/// Launches a tool by absolute path with the terminal handed over to it.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or exits with a
/// non-zero status.
pub fn launch(program: &Path, args: &[String]) -> Result<()> {
    info!("Launching `{}`", program.display());

    let mut command = Command::new(program);
    command.args(args);
    run(&mut command)
}

/// Starts an interactive `ollama run` session for the given model.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or exits with a
/// non-zero status.
pub fn launch_ollama(model: &str) -> Result<()> {
    info!("Launching Ollama model `{model}`");

    let mut command = Command::new("ollama");
    command.args(["run", model]);
    run(&mut command)
}

fn run(command: &mut Command) -> Result<()> {
    let subprocess_exit_success = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
