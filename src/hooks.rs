//! Pre and post generation hook execution.
//!
//! Hooks are shell scripts listed in the manifest and stored under
//! `prehooks/` and `posthooks/`. They receive the run's variables through
//! `FLINT_<NAME>` environment variables and the destination root through
//! `FLINT_OUTPUT_PATH`. A failing or missing hook never stops generation.

use crate::constants::OUTPUT_PATH_ENV;
use crate::generator::GenerationContext;
use log::{debug, warn};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Runs one external script synchronously.
pub trait ScriptExecutor {
    /// Executes `script` in `working_dir` with `envs` added to the inherited
    /// environment, blocking until it exits.
    fn execute(
        &self,
        script: &Path,
        working_dir: &Path,
        envs: &[(String, String)],
    ) -> std::io::Result<ExitStatus>;
}

/// Runs scripts with `sh <script>`.
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptExecutor for ShellExecutor {
    fn execute(
        &self,
        script: &Path,
        working_dir: &Path,
        envs: &[(String, String)],
    ) -> std::io::Result<ExitStatus> {
        Command::new("sh")
            .arg(script)
            .current_dir(working_dir)
            .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .status()
    }
}

/// How a single hook ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Succeeded,
    /// The script is listed in the manifest but absent from disk
    Missing,
    /// Non-zero exit; `None` when terminated by a signal
    Failed(Option<i32>),
    /// The script could not be started
    SpawnFailed(String),
}

/// Environment added to every hook of a run.
pub fn hook_env(context: &GenerationContext) -> Vec<(String, String)> {
    let mut envs = vec![(
        OUTPUT_PATH_ENV.to_string(),
        context.output_root.display().to_string(),
    )];
    envs.extend(context.inputs.env_vars().map(|(k, v)| (k, v.to_string())));
    envs
}

/// Runs `scripts` from `scripts_dir` in order.
///
/// # Arguments
/// * `scripts` - Script names, in manifest order
/// * `scripts_dir` - Directory the names are relative to
/// * `working_dir` - Working directory of each script (the template root)
/// * `context` - Generation context supplying the exported environment
/// * `executor` - Runs each script
///
/// # Returns
/// * The outcome of every listed script, in order
pub fn run_hooks(
    scripts: &[String],
    scripts_dir: &Path,
    working_dir: &Path,
    context: &GenerationContext,
    executor: &dyn ScriptExecutor,
) -> Vec<(String, HookOutcome)> {
    let envs = hook_env(context);

    scripts
        .iter()
        .map(|name| {
            let script_path = scripts_dir.join(name);
            let outcome = if !script_path.is_file() {
                warn!("Cannot find hook script {}", script_path.display());
                HookOutcome::Missing
            } else {
                debug!("Executing hook {}", script_path.display());
                match executor.execute(&script_path, working_dir, &envs) {
                    Ok(status) if status.success() => HookOutcome::Succeeded,
                    Ok(status) => {
                        warn!("Hook {} failed with status: {}", name, status);
                        HookOutcome::Failed(status.code())
                    }
                    Err(e) => {
                        warn!("Cannot execute hook {}: {}", name, e);
                        HookOutcome::SpawnFailed(e.to_string())
                    }
                }
            };
            (name.clone(), outcome)
        })
        .collect()
}
